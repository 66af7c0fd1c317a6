//! Integration tests for closure queries, node roles and subgraphs.

use hierograph_core::NodeId;
use hierograph_graph::graph::DirectedGraph;
use hierograph_graph::traversal::{BfsTraversal, Direction};

fn n(id: u64) -> NodeId {
    NodeId::new(id)
}

fn graph_from(edges: &[(i64, i64)]) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for &(tail, head) in edges {
        graph.add_edge(tail, head).unwrap();
    }
    graph
}

/// A small classification hierarchy:
///
/// ```text
///        0
///      /   \
///     1     2
///    / \     \
///   3   4     5
///        \   /
///          6
/// ```
fn hierarchy() -> DirectedGraph {
    graph_from(&[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (4, 6), (5, 6)])
}

fn sorted(mut nodes: Vec<NodeId>) -> Vec<NodeId> {
    nodes.sort();
    nodes
}

// ============================================================================
// Ancestors and descendants
// ============================================================================

#[test]
fn triangle_scenario() {
    let graph = graph_from(&[(1, 2), (1, 3), (2, 3)]);

    assert_eq!(sorted(graph.get_ancestors(n(3))), vec![n(1), n(2)]);
    assert_eq!(sorted(graph.get_descendants(n(1))), vec![n(2), n(3)]);
    assert_eq!(graph.get_sources(), vec![n(1)]);
    assert_eq!(graph.get_sinks(), vec![n(3)]);
}

#[test]
fn closures_in_hierarchy() {
    let graph = hierarchy();

    assert_eq!(sorted(graph.get_ancestors(n(6))), vec![n(0), n(1), n(2), n(4), n(5)]);
    assert_eq!(sorted(graph.get_descendants(n(1))), vec![n(3), n(4), n(6)]);
    assert!(graph.get_ancestors(n(0)).is_empty());
    assert!(graph.get_descendants(n(3)).is_empty());
}

#[test]
fn closures_exclude_start_on_acyclic_graph() {
    let graph = hierarchy();
    for &node in graph.get_nodes() {
        assert!(!graph.get_ancestors(node).contains(&node));
        assert!(!graph.get_descendants(node).contains(&node));
    }
}

#[test]
fn closures_include_start_on_cycle() {
    let graph = graph_from(&[(1, 2), (2, 3), (3, 1), (3, 4)]);

    assert!(graph.get_ancestors(n(2)).contains(&n(2)));
    assert!(graph.get_descendants(n(2)).contains(&n(2)));
    assert!(!graph.get_descendants(n(4)).contains(&n(4)));
}

#[test]
fn closures_of_unknown_node_are_empty() {
    let graph = hierarchy();
    assert!(graph.get_ancestors(n(42)).is_empty());
    assert!(graph.get_descendants(n(42)).is_empty());
    assert!(graph.get_descendants_within(n(42), 3).is_empty());
}

#[test]
fn bounded_descendants() {
    let graph = hierarchy();

    assert!(graph.get_descendants_within(n(0), 0).is_empty());
    assert_eq!(graph.get_descendants_within(n(0), 1), graph.get_successors(n(0)));
    assert_eq!(sorted(graph.get_descendants_within(n(0), 2)), vec![n(1), n(2), n(3), n(4), n(5)]);
    assert_eq!(
        sorted(graph.get_descendants_within(n(0), 10)),
        sorted(graph.get_descendants(n(0)))
    );
}

#[test]
fn ancestor_and_descendant_predicates_agree() {
    let graph = hierarchy();

    assert!(graph.is_ancestor_of(n(0), n(6)));
    assert!(graph.is_descendant_of(n(6), n(0)));
    assert!(graph.is_ancestor_of(n(2), n(6)));
    assert!(!graph.is_ancestor_of(n(3), n(6)));
    assert!(!graph.is_ancestor_of(n(6), n(0)));
    assert!(!graph.is_ancestor_of(n(1), n(1)));
}

#[test]
fn accession_lookup_then_hierarchy_question() {
    let mut graph = hierarchy();
    graph.add_node_metadata(n(0), "accession", "GO:0008150").unwrap();
    graph.add_node_metadata(n(6), "accession", "GO:0006412").unwrap();

    let root = graph.get_node_from_metadata("GO:0008150").unwrap();
    let leaf = graph.get_node_from_metadata("GO:0006412").unwrap();
    assert!(graph.is_ancestor_of(root, leaf));
}

// ============================================================================
// BFS traversal
// ============================================================================

#[test]
fn bfs_reports_depths() {
    let graph = hierarchy();
    let results = BfsTraversal::new(n(0), Direction::Outgoing).execute(&graph);

    let depth_of = |node: NodeId| results.iter().find(|r| r.node == node).map(|r| r.depth);
    assert_eq!(depth_of(n(1)), Some(1));
    assert_eq!(depth_of(n(5)), Some(2));
    assert_eq!(depth_of(n(6)), Some(3));
    assert_eq!(depth_of(n(0)), None);
}

#[test]
fn bfs_both_directions_reaches_siblings() {
    let graph = hierarchy();
    let nodes = BfsTraversal::new(n(3), Direction::Both).with_max_depth(2).collect_nodes(&graph);

    assert!(nodes.contains(&n(1)));
    assert!(nodes.contains(&n(4)));
    assert!(nodes.contains(&n(0)));
    assert!(!nodes.contains(&n(6)));
}

// ============================================================================
// Sources and sinks
// ============================================================================

#[test]
fn single_edge_roles() {
    let graph = graph_from(&[(1, 2)]);
    assert_eq!(graph.get_sources(), vec![n(1)]);
    assert_eq!(graph.get_sinks(), vec![n(2)]);
    assert!(graph.is_source(n(1)));
    assert!(graph.is_sink(n(2)));
}

#[test]
fn isolated_nodes_are_neither_source_nor_sink() {
    let mut graph = graph_from(&[(1, 2)]);
    graph.add_node(7).unwrap();

    assert!(!graph.is_source(n(7)));
    assert!(!graph.is_sink(n(7)));
    assert!(!graph.get_sources().contains(&n(7)));
    assert!(!graph.get_sinks().contains(&n(7)));
}

#[test]
fn hierarchy_roles() {
    let graph = hierarchy();
    assert_eq!(graph.get_sources(), vec![n(0)]);
    assert_eq!(sorted(graph.get_sinks()), vec![n(3), n(6)]);
}

// ============================================================================
// Subgraphs
// ============================================================================

#[test]
fn subgraph_is_induced() {
    let graph = hierarchy();
    let sub = graph.calc_subgraph(&[n(1), n(4), n(6), n(2)]);

    assert_eq!(sub.get_nodes(), &[n(1), n(4), n(6), n(2)]);
    assert_eq!(sub.count_edges(), 2);
    assert!(sub.contains_edge_between(n(1), n(4)));
    assert!(sub.contains_edge_between(n(4), n(6)));
    assert!(!sub.contains_edge_between(n(2), n(5)));
    assert!(sub.count_edges() <= graph.count_edges());
}

#[test]
fn subgraph_copies_metadata_and_labels() {
    let mut graph = hierarchy();
    graph.set_graph_label("ontology");
    graph.add_node_metadata(n(1), "name", "cellular_component").unwrap();
    let edge = graph.get_edge(n(1), n(3)).unwrap();
    graph.set_edge_label(edge, "is_a").unwrap();

    let sub = graph.calc_subgraph(&[n(1), n(3)]);

    assert_eq!(sub.graph_label(), Some("ontology"));
    assert_eq!(sub.get_node_metadata_value(n(1), "name"), Some("cellular_component"));
    let sub_edge = sub.get_edge(n(1), n(3)).unwrap();
    assert_eq!(sub.get_edge_label(sub_edge), Some("is_a"));
}

#[test]
fn subgraph_is_independent_of_source() {
    let graph = hierarchy();
    let mut sub = graph.calc_subgraph(&[n(0), n(1)]);
    sub.add_edge(1, 9).unwrap();
    sub.set_graph_label("copy");

    assert!(!graph.contains_node(n(9)));
    assert_eq!(graph.graph_label(), None);
    assert_eq!(sub.count_nodes(), 3);
}

#[test]
fn empty_subgraph() {
    let graph = hierarchy();
    let sub = graph.calc_subgraph(&[]);
    assert_eq!(sub.count_nodes(), 0);
    assert_eq!(sub.count_edges(), 0);
}
