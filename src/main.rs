use std::io;
use std::process::ExitCode;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use top_restaurants::config::{usage_exit_code, Config};
use top_restaurants::controller;
use top_restaurants::error::LookupError;

fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match controller::run(&config, &mut input, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<LookupError>()
                .map(LookupError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
