// src/graph/queries.rs
use std::collections::{HashMap, HashSet};

use crate::graph::network::CoauthorGraph;

#[must_use]
pub fn nodes(graph: &CoauthorGraph) -> Vec<&str> {
    let mut names: Vec<&str> = graph.nodes.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Every edge once, endpoints ordered `a < b`, sorted by pair.
#[must_use]
pub fn edges(graph: &CoauthorGraph) -> Vec<(&str, &str, usize)> {
    let mut result: Vec<(&str, &str, usize)> = Vec::new();
    for (a, nbrs) in &graph.adjacency {
        for (b, weight) in nbrs {
            if a.as_str() < b.as_str() {
                result.push((a.as_str(), b.as_str(), *weight));
            }
        }
    }
    result.sort_unstable();
    result
}

#[must_use]
pub fn edge_count(graph: &CoauthorGraph) -> usize {
    let endpoint_sum: usize = graph.adjacency.values().map(HashMap::len).sum();
    endpoint_sum / 2
}

#[must_use]
pub fn neighbors<'g>(graph: &'g CoauthorGraph, author: &str) -> Vec<&'g str> {
    let mut result: Vec<&str> = graph
        .adjacency
        .get(author)
        .map(|nbrs| nbrs.keys().map(String::as_str).collect())
        .unwrap_or_default();
    result.sort_unstable();
    result
}

/// Induced subgraph over the author and its direct co-authors: those nodes,
/// plus every full-graph edge with both endpoints inside the set (including
/// edges between two neighbors that bypass the center).
#[must_use]
pub fn ego_network(graph: &CoauthorGraph, author: &str) -> CoauthorGraph {
    if !graph.nodes.contains(author) {
        return CoauthorGraph::default();
    }

    let mut members: HashSet<String> = HashSet::new();
    members.insert(author.to_string());
    if let Some(nbrs) = graph.adjacency.get(author) {
        members.extend(nbrs.keys().cloned());
    }

    let mut adjacency: HashMap<String, HashMap<String, usize>> = HashMap::new();
    for member in &members {
        let Some(nbrs) = graph.adjacency.get(member) else {
            continue;
        };
        let kept: HashMap<String, usize> = nbrs
            .iter()
            .filter(|(other, _)| members.contains(*other))
            .map(|(other, weight)| (other.clone(), *weight))
            .collect();
        if !kept.is_empty() {
            adjacency.insert(member.clone(), kept);
        }
    }

    CoauthorGraph {
        nodes: members,
        adjacency,
    }
}
