use std::env::args_os;
use std::process::ExitCode;

use color_range_tuner::{run_tuner, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_tuner(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Tuning failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
