//! Desktop binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match ryopaste_gui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ryopaste: {}", err);
            ExitCode::FAILURE
        }
    }
}
