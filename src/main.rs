use std::process::ExitCode;

use prokit::cli;
use prokit::formatters::console::{self, Colors};

fn main() -> ExitCode {
    // Every failure past argument parsing surfaces here and is fatal.
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", console::error(&Colors::stderr(), &format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}
