//! Main application entry point.

use chromamesh_app::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting ChromaMesh");

    let cli = Cli::parse();
    match chromamesh_app::run(&cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("chromamesh: {}", e);
            ExitCode::FAILURE
        }
    }
}
