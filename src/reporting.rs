// src/reporting.rs
//! Terminal and JSON views of graphs and comparisons.
//!
//! The core exposes plain node/edge/weight data; everything here is
//! presentation. JSON dumps exist so an external renderer can consume the
//! graph without linking this crate.

use colored::Colorize;
use serde::Serialize;

use crate::category::Category;
use crate::graph::{Comparison, CoauthorGraph};

/// Serializable snapshot of a graph for downstream renderers.
#[derive(Debug, Serialize)]
pub struct GraphDump {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub source: String,
    pub target: String,
    pub weight: usize,
}

#[derive(Debug, Serialize)]
pub struct ComparisonDump {
    pub queried: String,
    pub queried_degree: usize,
    pub queried_network: GraphDump,
    pub is_influential: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_influential: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_influential_degree: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_influential_network: Option<GraphDump>,
}

impl GraphDump {
    #[must_use]
    pub fn from_graph(graph: &CoauthorGraph) -> Self {
        Self {
            nodes: graph.nodes().into_iter().map(String::from).collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(source, target, weight)| EdgeDump {
                    source: source.to_string(),
                    target: target.to_string(),
                    weight,
                })
                .collect(),
        }
    }
}

impl ComparisonDump {
    #[must_use]
    pub fn from_comparison(comparison: &Comparison) -> Self {
        let leader = comparison.most_influential.as_ref();
        Self {
            queried: comparison.queried.clone(),
            queried_degree: comparison.queried_degree,
            queried_network: GraphDump::from_graph(&comparison.queried_network),
            is_influential: comparison.is_influential,
            most_influential: leader.map(|l| l.name.clone()),
            most_influential_degree: leader.map(|l| l.degree),
            most_influential_network: leader.map(|l| GraphDump::from_graph(&l.network)),
        }
    }
}

pub fn print_network_summary(category: Category, sample_len: usize, graph: &CoauthorGraph) {
    println!(
        "{} {}",
        "Co-authorship network:".bold(),
        category.to_string().cyan()
    );
    println!(
        "  {} articles, {} authors, {} collaborations",
        sample_len,
        graph.node_count(),
        graph.edge_count()
    );
    for (a, b, weight) in graph.edges() {
        println!("  {a} {} {b}  {}", "--".dimmed(), weight_label(weight));
    }
}

pub fn print_comparison(comparison: &Comparison) {
    println!("{}", verdict(comparison));

    println!();
    print_ego_network(&comparison.queried, &comparison.queried_network);
    if let Some(leader) = &comparison.most_influential {
        println!();
        print_ego_network(&leader.name, &leader.network);
    }
}

/// Three-way verdict: the queried author leads, ties the leader, or trails.
#[must_use]
pub fn verdict(comparison: &Comparison) -> String {
    match &comparison.most_influential {
        None => format!(
            "{} is the most influential author with {} unique co-authors.",
            comparison.queried.bold(),
            comparison.queried_degree
        ),
        Some(leader) if comparison.is_tied() => format!(
            "{} is tied with {} for the most unique co-authors with {}.",
            comparison.queried.bold(),
            leader.name.bold(),
            leader.degree
        ),
        Some(leader) => format!(
            "{} has {} unique co-authors, while the author with the most unique co-authors is {} with {}.",
            comparison.queried.bold(),
            comparison.queried_degree,
            leader.name.bold(),
            leader.degree
        ),
    }
}

pub fn print_top_authors(ranked: &[(String, usize)]) {
    println!("{}", "Top authors by publication count".bold());
    if ranked.is_empty() {
        println!("  {}", "(empty sample)".dimmed());
        return;
    }
    for (position, (name, count)) in ranked.iter().enumerate() {
        let pubs = if *count == 1 { "article" } else { "articles" };
        println!("  {:>2}. {name}  {}", position + 1, format!("{count} {pubs}").dimmed());
    }
}

pub fn print_strongest_pair(pair: Option<&(String, String, usize)>) {
    match pair {
        Some((a, b, weight)) => println!(
            "The authors who have co-authored the most articles together are {} and {}, with {} shared.",
            a.bold(),
            b.bold(),
            weight
        ),
        None => println!("No collaborations in this sample."),
    }
}

fn print_ego_network(center: &str, network: &CoauthorGraph) {
    println!("{} {}", "Network around".bold(), center.cyan());
    let edges = network.edges();
    if edges.is_empty() {
        println!("  {}", "(no collaborations)".dimmed());
        return;
    }
    for (a, b, weight) in edges {
        println!("  {a} {} {b}  {}", "--".dimmed(), weight_label(weight));
    }
}

fn weight_label(weight: usize) -> String {
    let noun = if weight == 1 { "article" } else { "articles" };
    format!("({weight} {noun})").dimmed().to_string()
}
