mod args;
mod config;
mod db;
mod error;
mod export;
mod import;
mod logging;
mod models;
mod repository;
mod run;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = args::Args::parse();
    logging::init(args.common.log_level);
    tracing::debug!("{args:?}");

    let config = config::Config::from_args(&args.common)?;
    run::execute(&args.command, &config)
}
