// src/graph/builder.rs
//! Graph construction logic: byline pairing and weight accumulation.

use std::collections::{HashMap, HashSet};

use crate::article::Article;
use crate::graph::network::CoauthorGraph;

/// Folds an article sample into a [`CoauthorGraph`].
///
/// Every author in any byline becomes a node. Each article with at least two
/// distinct authors contributes 1 to the weight of every unordered pair of
/// its distinct authors; duplicate names within one byline are collapsed
/// first, so a single article never counts twice for the same pair.
#[must_use]
pub fn build(articles: &[Article]) -> CoauthorGraph {
    let mut nodes: HashSet<String> = HashSet::new();
    let mut adjacency: HashMap<String, HashMap<String, usize>> = HashMap::new();

    for article in articles {
        let byline = distinct_authors(article);
        for name in &byline {
            nodes.insert((*name).to_string());
        }
        add_pair_edges(&byline, &mut adjacency);
    }

    CoauthorGraph { nodes, adjacency }
}

/// Byline with duplicates removed, first occurrence wins. Order is kept only
/// so that construction walks pairs deterministically; it does not affect the
/// resulting weights.
fn distinct_authors(article: &Article) -> Vec<&str> {
    let mut seen = HashSet::new();
    article
        .authors
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}

fn add_pair_edges(byline: &[&str], adjacency: &mut HashMap<String, HashMap<String, usize>>) {
    for (i, a) in byline.iter().enumerate() {
        for b in &byline[i + 1..] {
            bump(adjacency, a, b);
            bump(adjacency, b, a);
        }
    }
}

fn bump(adjacency: &mut HashMap<String, HashMap<String, usize>>, from: &str, to: &str) {
    *adjacency
        .entry(from.to_string())
        .or_default()
        .entry(to.to_string())
        .or_default() += 1;
}
