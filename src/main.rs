use std::env;
use std::process::ExitCode;

mod cli;
mod terminal;

fn main() -> ExitCode {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
