mod cli;
mod config;
mod model;
mod render;
mod track;

use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, format_error};
use config::Config;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            println!("{}", format_error(&e, cli.color(&Config::default())));
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&cli, &config) {
        println!("{}", format_error(&e, cli.color(&config)));
        process::exit(1);
    }
}
