//! Writing generated strings to stdout or a file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroizing;

/// Newline-joined batch in a buffer that is wiped on drop.
pub fn join(batch: &[Zeroizing<String>], trailing_newline: bool) -> Zeroizing<String> {
    let len: usize = batch.iter().map(|s| s.len() + 1).sum();
    let mut joined = Zeroizing::new(String::with_capacity(len));
    for (i, s) in batch.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(s);
    }
    if trailing_newline && !batch.is_empty() {
        joined.push('\n');
    }
    joined
}

/// Move the buffer out for APIs that take `String` by value. The heap
/// allocation changes hands without a copy; the emptied wrapper has nothing
/// left to wipe.
pub fn into_owned(mut buf: Zeroizing<String>) -> String {
    std::mem::take(&mut *buf)
}

pub fn write_lines<W: Write>(out: &mut W, batch: &[Zeroizing<String>]) -> io::Result<()> {
    let joined = join(batch, true);
    out.write_all(joined.as_bytes())?;
    out.flush()
}

pub fn to_stdout(batch: &[Zeroizing<String>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, batch)
}

/// Append to `path`, creating parent directories. Returns the display path.
pub fn to_file(path: &str, batch: &[Zeroizing<String>]) -> io::Result<String> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_lines(&mut file, batch)?;

    Ok(std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string()))
}

/// `.` and directories get the default file name; other paths get `.txt`.
pub fn resolve_path(path: &str) -> String {
    if path == "." {
        "randstr.txt".to_string()
    } else if path.ends_with('/') {
        format!("{path}randstr.txt")
    } else if !path.ends_with(".txt") {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}
