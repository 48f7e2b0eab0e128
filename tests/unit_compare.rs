// tests/unit_compare.rs
//! Tests for author comparison and ego-network induction.

use coauthor_core::graph::compare::compare;
use coauthor_core::{Article, Category, CoauthorError, CoauthorGraph};

fn article(authors: &[&str]) -> Article {
    Article::new(
        Category::ComputerScience,
        authors.iter().map(ToString::to_string).collect(),
    )
}

fn sample_graph() -> CoauthorGraph {
    // A is the hub: degree 3. D-E is a separate component.
    CoauthorGraph::build(&[
        article(&["A", "B", "C"]),
        article(&["A", "F"]),
        article(&["D", "E"]),
    ])
}

#[test]
fn unknown_author_is_author_not_found() {
    let graph = sample_graph();
    let err = compare(&graph, "Z").unwrap_err();
    match err {
        CoauthorError::AuthorNotFound { name } => assert_eq!(name, "Z"),
        other => panic!("expected AuthorNotFound, got {other:?}"),
    }
}

#[test]
fn empty_graph_rejects_any_queried_author() {
    let graph = CoauthorGraph::build(&[]);
    // Lookup fails first on an empty graph: no author can be present.
    assert!(matches!(
        compare(&graph, "A"),
        Err(CoauthorError::AuthorNotFound { .. })
    ));
}

#[test]
fn most_influential_author_compares_to_itself() {
    let graph = sample_graph();
    let comparison = compare(&graph, "A").unwrap();

    assert!(comparison.is_influential);
    assert!(comparison.most_influential.is_none());
    assert_eq!(comparison.queried_degree, 3);

    assert_eq!(
        comparison.queried_network.nodes(),
        vec!["A", "B", "C", "F"]
    );
}

#[test]
fn ordinary_author_gets_both_networks() {
    let graph = sample_graph();
    let comparison = compare(&graph, "D").unwrap();

    assert!(!comparison.is_influential);
    assert_eq!(comparison.queried_degree, 1);
    assert_eq!(comparison.queried_network.nodes(), vec!["D", "E"]);

    let leader = comparison.most_influential.expect("leader side present");
    assert_eq!(leader.name, "A");
    assert_eq!(leader.degree, 3);
    assert_eq!(leader.network.nodes(), vec!["A", "B", "C", "F"]);
}

#[test]
fn ego_network_keeps_edges_between_neighbors() {
    // B's neighbors are A and C; the A-C edge must survive induction,
    // while A-F (F outside B's ego) must not.
    let graph = sample_graph();
    let comparison = compare(&graph, "B").unwrap();
    let ego = &comparison.queried_network;

    assert_eq!(ego.nodes(), vec!["A", "B", "C"]);
    assert_eq!(ego.weight("A", "B"), Some(1));
    assert_eq!(ego.weight("B", "C"), Some(1));
    assert_eq!(ego.weight("A", "C"), Some(1));
    assert_eq!(ego.weight("A", "F"), None);
    assert_eq!(ego.edge_count(), 3);
}

#[test]
fn ego_network_preserves_full_graph_weights() {
    let graph = CoauthorGraph::build(&[
        article(&["A", "B"]),
        article(&["A", "B"]),
        article(&["A", "C"]),
    ]);
    let comparison = compare(&graph, "A").unwrap();
    assert_eq!(comparison.queried_network.weight("A", "B"), Some(2));
    assert_eq!(comparison.queried_network.weight("A", "C"), Some(1));
}

#[test]
fn tied_author_reports_tie() {
    // Both A and C have degree 2; lexicographic tie-break makes A the
    // leader, and C ties it on count.
    let graph = CoauthorGraph::build(&[
        article(&["A", "B"]),
        article(&["A", "D"]),
        article(&["C", "E"]),
        article(&["C", "F"]),
    ]);
    let comparison = compare(&graph, "C").unwrap();

    assert!(!comparison.is_influential);
    assert!(comparison.is_tied());
    assert_eq!(comparison.queried_degree, 2);
    assert_eq!(comparison.most_influential.unwrap().name, "A");
}

#[test]
fn isolated_author_has_singleton_ego_network() {
    let graph = CoauthorGraph::build(&[article(&["Solo"]), article(&["A", "B", "C"])]);
    let comparison = compare(&graph, "Solo").unwrap();

    assert_eq!(comparison.queried_degree, 0);
    assert_eq!(comparison.queried_network.nodes(), vec!["Solo"]);
    assert_eq!(comparison.queried_network.edge_count(), 0);
}

#[test]
fn comparison_does_not_mutate_the_graph() {
    let graph = sample_graph();
    let before = graph.clone();
    let _ = compare(&graph, "D").unwrap();
    let _ = compare(&graph, "A").unwrap();
    assert_eq!(graph, before);
}
