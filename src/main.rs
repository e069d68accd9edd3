use std::io;
use std::process::ExitCode;

use clap::Parser;
use roster::cli::{self, Cli};
use roster::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli::run(cli, &mut io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
