// src/graph/stats.rs
//! Sample-level collaboration statistics.

use std::collections::{HashMap, HashSet};

use crate::article::Article;
use crate::graph::network::CoauthorGraph;

/// Articles-per-author tally. Duplicate names within one byline count once.
#[must_use]
pub fn publication_counts(articles: &[Article]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for article in articles {
        let mut seen = HashSet::new();
        for name in &article.authors {
            if seen.insert(name.as_str()) {
                *counts.entry(name.clone()).or_default() += 1;
            }
        }
    }
    counts
}

/// Top `limit` authors by publication count, descending; ties resolved by
/// lexicographically smallest name first.
#[must_use]
pub fn top_authors(articles: &[Article], limit: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = publication_counts(articles).into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// The pair of authors with the most shared articles, as `(a, b, weight)`
/// with `a < b`. Ties resolve to the lexicographically smallest pair.
/// `None` when the graph has no edges.
#[must_use]
pub fn strongest_pair(graph: &CoauthorGraph) -> Option<(String, String, usize)> {
    let mut best: Option<(&str, &str, usize)> = None;
    // edges() is sorted by pair, so keeping the first strict maximum makes
    // the tie-break lexicographic.
    for (a, b, weight) in graph.edges() {
        if best.map_or(true, |(_, _, best_weight)| weight > best_weight) {
            best = Some((a, b, weight));
        }
    }
    best.map(|(a, b, weight)| (a.to_string(), b.to_string(), weight))
}
