// src/bin/coauthor.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use coauthor_core::cli::{self, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Network {
            category,
            sample,
            json,
        } => cli::handle_network(*category, sample, *json),
        Commands::Compare {
            category,
            author,
            sample,
            json,
        } => cli::handle_compare(*category, author, sample, *json),
        Commands::Top {
            category,
            limit,
            sample,
        } => cli::handle_top(*category, *limit, sample),
        Commands::Pairs { category, sample } => cli::handle_pairs(*category, sample),
    }
}
