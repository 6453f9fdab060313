use std::process::ExitCode;

use clap::Parser;

use abtest_core::errors::AbTestErrorCode;
use abtest_core::tracing::init_tracing;

mod cli;

use cli::Args;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match cli::run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{}", e.coded_string());
            ExitCode::from(2)
        }
    }
}
