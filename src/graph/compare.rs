// src/graph/compare.rs
//! Side-by-side comparison of an author's ego network against the most
//! influential author's.

use crate::error::{CoauthorError, Result};
use crate::graph::network::CoauthorGraph;
use crate::graph::rank;

/// Outcome of comparing a queried author against the sample's most
/// influential author.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub queried: String,
    pub queried_degree: usize,
    pub queried_network: CoauthorGraph,
    /// True when the queried author IS the most influential author.
    pub is_influential: bool,
    /// Present only when `is_influential` is false.
    pub most_influential: Option<InfluentialNetwork>,
}

/// The most influential author's side of the comparison.
#[derive(Debug, Clone)]
pub struct InfluentialNetwork {
    pub name: String,
    pub degree: usize,
    pub network: CoauthorGraph,
}

impl Comparison {
    /// True when the queried author matches the leader's unique co-author
    /// count without being the leader.
    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.most_influential
            .as_ref()
            .is_some_and(|leader| leader.degree == self.queried_degree)
    }
}

/// Compares `queried` against the most influential author of `graph`.
///
/// # Errors
/// Returns [`CoauthorError::AuthorNotFound`] when `queried` is not a node,
/// and propagates [`CoauthorError::NotFound`] from ranking an empty graph.
pub fn compare(graph: &CoauthorGraph, queried: &str) -> Result<Comparison> {
    if !graph.contains(queried) {
        return Err(CoauthorError::AuthorNotFound {
            name: queried.to_string(),
        });
    }

    let leader = rank::most_influential(graph)?;
    let is_influential = queried == leader;

    let most_influential = if is_influential {
        None
    } else {
        Some(InfluentialNetwork {
            name: leader.to_string(),
            degree: graph.degree(leader),
            network: graph.ego_network(leader),
        })
    };

    Ok(Comparison {
        queried: queried.to_string(),
        queried_degree: graph.degree(queried),
        queried_network: graph.ego_network(queried),
        is_influential,
        most_influential,
    })
}
