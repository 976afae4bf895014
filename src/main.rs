//! addr - Architecture decision records from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = addr::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
