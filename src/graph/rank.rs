// src/graph/rank.rs
//! Influence ranking: most influential author by unique co-author count.

use crate::error::{CoauthorError, Result};
use crate::graph::network::CoauthorGraph;

/// Returns the author with the maximum degree (distinct co-author count).
///
/// Tie-break: when several authors share the maximum degree, the
/// lexicographically smallest name wins. Total and stable, so repeated calls
/// on the same graph always return the same author.
///
/// # Errors
/// Returns [`CoauthorError::NotFound`] when the graph has no nodes.
pub fn most_influential(graph: &CoauthorGraph) -> Result<&str> {
    let mut best: Option<(&str, usize)> = None;

    for name in &graph.nodes {
        let degree = graph.degree(name);
        let better = match best {
            None => true,
            Some((best_name, best_degree)) => {
                degree > best_degree || (degree == best_degree && name.as_str() < best_name)
            }
        };
        if better {
            best = Some((name, degree));
        }
    }

    best.map(|(name, _)| name).ok_or(CoauthorError::NotFound)
}
