//! `vault-utils` — maintenance helpers for versioned artwork archives.
//!
//! The front-end owns everything the parse engine deliberately does not:
//! it reads the process argument vector, prints help, reports errors with
//! an exit code, resolves the working directory from the environment, and
//! dispatches to the workflow code.

use std::env;
use std::process;
use std::time::Instant;

use crate::app::Application;
use crate::config::build_parser;
use crate::dotenv::DotEnv;
use crate::error::CliError;

mod app;
mod audit;
mod config;
mod dotenv;
mod error;
mod rename;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let parser = build_parser()?;
    let (config, command) = parser.parse(args)?;
    init_tracing(config.verbose);

    let Some(command) = command.filter(|_| !config.help) else {
        print!("{}", parser.render_help());
        return Ok(());
    };

    let env = DotEnv::load(&env::current_dir()?);
    let time_exec = config.time_exec;
    let app = Application::new(config, &env)?;

    let started = Instant::now();
    app.run(command)?;
    if time_exec {
        println!("Finished in: {}ms", started.elapsed().as_millis());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
