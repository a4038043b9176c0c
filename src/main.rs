mod app;
mod cli;
mod domain;
mod infra;
mod node;
mod runtime;
mod ui;
mod usecases;
mod wallet;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
