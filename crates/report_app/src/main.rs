mod app;
mod cli;
mod effects;
mod output;

use std::process::ExitCode;

use clap::Parser;
use report_logging::report_error;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    report_logging::initialize(cli.log_level(), &cli.log_destination());

    match app::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            report_error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
