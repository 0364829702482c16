//! maven-app binary entry point.

use std::process::ExitCode;

use clap::Parser;
use maven_app::cli::{Cli, cmd_greet};
use maven_app::logging::dispatch_or_silent;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let sink = dispatch_or_silent(&cli.log_filter);

    match cmd_greet(&sink, cli.format) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
