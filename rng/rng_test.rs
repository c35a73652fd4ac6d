//! RNG test binary - streams `HwRand` output to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test                # endless stream
//!   ./rng_test 1048576        # stop after N bytes
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};
use std::process::ExitCode;

use randstr::rng::HwRand;

fn write_stream<W: Write>(out: &mut W, rng: &mut HwRand, limit: Option<usize>) -> io::Result<()> {
    let mut buf = [0u8; 65536];
    let mut written = 0usize;

    loop {
        for chunk in buf.chunks_exact_mut(8) {
            chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
        }

        let to_write = match limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(written);
                if remaining == 0 {
                    return Ok(());
                }
                remaining.min(buf.len())
            }
            None => buf.len(),
        };

        out.write_all(&buf[..to_write])?;
        written += to_write;
    }
}

fn main() -> ExitCode {
    let limit = match std::env::args().nth(1).map(|s| s.parse::<usize>()) {
        None => None,
        Some(Ok(n)) => Some(n),
        Some(Err(_)) => {
            eprintln!("usage: rng_test [BYTES]");
            return ExitCode::from(2);
        }
    };

    eprintln!("rng_test: source {}", HwRand::source_name());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut rng = HwRand::new();

    match write_stream(&mut out, &mut rng, limit) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader closed the pipe
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rng_test: {e}");
            ExitCode::FAILURE
        }
    }
}
