// src/graph/network.rs
//! The weighted co-authorship graph structure and query interface.

use std::collections::{HashMap, HashSet};

use crate::article::Article;

/// Undirected co-authorship graph for one article sample.
///
/// Nodes are author names (every author seen in the sample, isolated ones
/// included). An edge between two distinct authors carries a weight equal to
/// the number of sampled articles they share. The adjacency map is symmetric:
/// `adjacency[a][b] == adjacency[b][a]`, and self-loops never occur.
///
/// The graph is a value: built once per sample and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoauthorGraph {
    pub(crate) nodes: HashSet<String>,
    pub(crate) adjacency: HashMap<String, HashMap<String, usize>>,
}

impl CoauthorGraph {
    /// Builds the graph from an article sample. Pure accumulation: an empty
    /// sample yields an empty graph.
    #[must_use]
    pub fn build(articles: &[Article]) -> Self {
        crate::graph::builder::build(articles)
    }

    #[must_use]
    pub fn contains(&self, author: &str) -> bool {
        self.nodes.contains(author)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        crate::graph::queries::edge_count(self)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All author names, sorted.
    #[must_use]
    pub fn nodes(&self) -> Vec<&str> {
        crate::graph::queries::nodes(self)
    }

    /// All edges as `(a, b, weight)` with `a < b`, sorted by endpoint pair.
    #[must_use]
    pub fn edges(&self) -> Vec<(&str, &str, usize)> {
        crate::graph::queries::edges(self)
    }

    /// Number of distinct co-authors, never the sum of edge weights.
    /// Zero for isolated or absent authors.
    #[must_use]
    pub fn degree(&self, author: &str) -> usize {
        self.adjacency.get(author).map_or(0, HashMap::len)
    }

    /// Distinct co-authors of `author`, sorted.
    #[must_use]
    pub fn neighbors(&self, author: &str) -> Vec<&str> {
        crate::graph::queries::neighbors(self, author)
    }

    /// Shared-article count between two authors, `None` when no edge exists.
    #[must_use]
    pub fn weight(&self, a: &str, b: &str) -> Option<usize> {
        self.adjacency.get(a).and_then(|nbrs| nbrs.get(b)).copied()
    }

    /// The induced subgraph over `{author} ∪ neighbors(author)`.
    /// Returns an empty graph when `author` is not a node.
    #[must_use]
    pub fn ego_network(&self, author: &str) -> CoauthorGraph {
        crate::graph::queries::ego_network(self, author)
    }
}
