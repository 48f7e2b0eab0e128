// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::category::Category;

#[derive(Parser)]
#[command(name = "coauthor", version, about = "Co-authorship network explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and summarize the co-authorship network for a category sample
    Network {
        #[arg(value_enum)]
        category: Category,
        #[command(flatten)]
        sample: SampleArgs,
        /// Emit the graph as JSON instead of a terminal summary
        #[arg(long)]
        json: bool,
    },
    /// Compare an author's network against the most influential author's
    Compare {
        #[arg(value_enum)]
        category: Category,
        /// Exact author name as it appears in article bylines
        #[arg(value_name = "AUTHOR")]
        author: String,
        #[command(flatten)]
        sample: SampleArgs,
        /// Emit the comparison as JSON instead of a terminal summary
        #[arg(long)]
        json: bool,
    },
    /// List the sample's top authors by publication count
    Top {
        #[arg(value_enum)]
        category: Category,
        #[arg(long, default_value = "10")]
        limit: usize,
        #[command(flatten)]
        sample: SampleArgs,
    },
    /// Show the pair of authors with the most shared articles
    Pairs {
        #[arg(value_enum)]
        category: Category,
        #[command(flatten)]
        sample: SampleArgs,
    },
}

/// Sampling knobs shared by every subcommand. Flags override `coauthor.toml`.
#[derive(Args)]
pub struct SampleArgs {
    /// Directory holding the per-category snapshot files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Articles to draw from the snapshot
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,
    /// Fix the sampling RNG for reproducible runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}
