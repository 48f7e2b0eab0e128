// src/cli/handlers.rs
//! Subcommand handlers: wire the sampling boundary to the graph engine and
//! hand results to reporting.

use anyhow::Result;

use crate::article::Article;
use crate::category::Category;
use crate::cli::args::SampleArgs;
use crate::config::Config;
use crate::graph::{compare, stats, CoauthorGraph};
use crate::reporting;
use crate::source::{ArticleSource, SnapshotSource};

/// # Errors
/// Fails when the snapshot cannot be read or parsed.
pub fn handle_network(category: Category, sample: &SampleArgs, json: bool) -> Result<()> {
    let articles = load_sample(category, sample)?;
    let graph = CoauthorGraph::build(&articles);

    if json {
        let dump = reporting::GraphDump::from_graph(&graph);
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        reporting::print_network_summary(category, articles.len(), &graph);
    }
    Ok(())
}

/// # Errors
/// Fails on snapshot errors, on an empty graph (nothing to rank), and when
/// the author does not appear in the sample.
pub fn handle_compare(
    category: Category,
    author: &str,
    sample: &SampleArgs,
    json: bool,
) -> Result<()> {
    let articles = load_sample(category, sample)?;
    let graph = CoauthorGraph::build(&articles);
    let comparison = compare::compare(&graph, author)?;

    if json {
        let dump = reporting::ComparisonDump::from_comparison(&comparison);
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        reporting::print_comparison(&comparison);
    }
    Ok(())
}

/// # Errors
/// Fails when the snapshot cannot be read or parsed.
pub fn handle_top(category: Category, limit: usize, sample: &SampleArgs) -> Result<()> {
    let articles = load_sample(category, sample)?;
    let ranked = stats::top_authors(&articles, limit);
    reporting::print_top_authors(&ranked);
    Ok(())
}

/// # Errors
/// Fails when the snapshot cannot be read or parsed.
pub fn handle_pairs(category: Category, sample: &SampleArgs) -> Result<()> {
    let articles = load_sample(category, sample)?;
    let graph = CoauthorGraph::build(&articles);
    let pair = stats::strongest_pair(&graph);
    reporting::print_strongest_pair(pair.as_ref());
    Ok(())
}

fn load_sample(category: Category, sample: &SampleArgs) -> Result<Vec<Article>> {
    let config = Config::load();
    let data_dir = sample.data_dir.clone().unwrap_or(config.data_dir);
    let sample_size = sample.sample.unwrap_or(config.sample_size);

    let source = SnapshotSource::new(data_dir, sample_size).with_seed(sample.seed);
    Ok(source.sample(category)?)
}
