//! End-to-end shortest-path scenarios over the public API.

use graph_search::prelude::*;

/// The six-node weighted graph: arcs (a,b,7) (a,c,9) (a,f,14) (b,c,10)
/// (b,d,15) (c,d,11) (c,f,2) (d,e,6) (e,f,9).
const ARCS: [(&str, &str, f64); 9] = [
    ("a", "b", 7.0),
    ("a", "c", 9.0),
    ("a", "f", 14.0),
    ("b", "c", 10.0),
    ("b", "d", 15.0),
    ("c", "d", 11.0),
    ("c", "f", 2.0),
    ("d", "e", 6.0),
    ("e", "f", 9.0),
];

fn directed() -> (Digraph<&'static str>, std::collections::HashMap<&'static str, NodeId>) {
    let mut g = Digraph::new();
    let mut ids = std::collections::HashMap::new();
    for name in ["a", "b", "c", "d", "e", "f"] {
        ids.insert(name, g.add_node(name));
    }
    for (from, to, w) in ARCS {
        g.link(ids[from], ids[to], w);
    }
    (g, ids)
}

fn undirected() -> (Undirected<&'static str>, std::collections::HashMap<&'static str, NodeId>) {
    let mut g = Undirected::new();
    let mut ids = std::collections::HashMap::new();
    for name in ["a", "b", "c", "d", "e", "f"] {
        ids.insert(name, g.add_node(name));
    }
    for (from, to, w) in ARCS {
        g.link(ids[from], ids[to], w);
    }
    (g, ids)
}

#[test]
fn directed_classic() {
    let (g, ids) = directed();
    let (path, dist) = dijkstra_shortest_path(&g, ids["a"], ids["e"]);
    assert_eq!(dist, 26.0);
    let steps: Vec<(Option<f64>, &str)> = path.iter().map(|s| (s.edge, *g.node(s.node))).collect();
    assert_eq!(
        steps,
        vec![
            (None, "a"),
            (Some(9.0), "c"),
            (Some(11.0), "d"),
            (Some(6.0), "e"),
        ]
    );
}

#[test]
fn undirected_classic() {
    let (g, ids) = undirected();
    let (path, dist) = dijkstra_shortest_path(&g, ids["a"], ids["e"]);
    assert_eq!(dist, 20.0);
    let steps: Vec<(Option<f64>, &str)> = path
        .iter()
        .map(|s| (s.edge.as_ref().map(|e| e.weight()), *g.node(s.node)))
        .collect();
    assert_eq!(
        steps,
        vec![
            (None, "a"),
            (Some(9.0), "c"),
            (Some(2.0), "f"),
            (Some(9.0), "e"),
        ]
    );
}

#[test]
fn unreachable_without_outgoing_arcs() {
    // same nodes, but the start keeps no outgoing arcs
    let mut g: Digraph<&'static str> = Digraph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    g.link(b, c, 1.0);
    let (path, dist) = dijkstra_shortest_path(&g, a, c);
    assert!(path.is_empty());
    assert_eq!(dist, f64::INFINITY);
}

/// Render every node's root path the way the predecessor map encodes it,
/// e.g. "a 9 c 11 d".
fn root_paths(
    g: &Digraph<&'static str>,
    from: &graph_search::perf::FastMap<NodeId, FromHalf<NodeId, f64>>,
) -> Vec<String> {
    let mut out = Vec::new();
    for (&node, _) in from.iter() {
        let mut s = g.node(node).to_string();
        let mut fh = &from[&node];
        while let (Some(p), Some(e)) = (fh.from, fh.edge) {
            s = format!("{} {} {}", g.node(p), e, s);
            fh = &from[&p];
        }
        out.push(s);
    }
    out.sort();
    out
}

#[test]
fn all_paths_from_a() {
    let (g, ids) = directed();
    let from = dijkstra_all_paths(&g, ids["a"]);
    let rendered = root_paths(&g, &from);
    assert_eq!(
        rendered,
        vec![
            "a",
            "a 7 b",
            "a 9 c",
            "a 9 c 11 d",
            "a 9 c 11 d 6 e",
            "a 9 c 2 f",
        ]
    );
}

#[test]
fn repeated_runs_agree() {
    let (g, ids) = directed();
    let first = dijkstra_shortest_path(&g, ids["a"], ids["e"]);
    let second = dijkstra_shortest_path(&g, ids["a"], ids["e"]);
    assert_eq!(first, second);
}

/// An ArborBuilder that rebuilds the shortest-path tree as a second
/// `Digraph`, the tree handles being its node ids.
struct TreeGraph {
    tree: Digraph<&'static str>,
}

impl ArborBuilder<NodeId, f64> for TreeGraph {
    type Tree = NodeId;

    fn link_from(&mut self, from: Option<(&NodeId, &f64)>, _node: NodeId) -> NodeId {
        let id = self.tree.add_node("");
        if let Some((&parent, &w)) = from {
            self.tree.link(parent, id, w);
        }
        id
    }
}

#[test]
fn arborescence_builds_an_out_tree() {
    let (g, ids) = directed();
    let mut builder = TreeGraph {
        tree: Digraph::new(),
    };
    let root = dijkstra_arborescence(&g, ids["a"], &mut builder).expect("start is always linked");
    let tree = &builder.tree;
    // six reachable nodes, five tree edges
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.num_arcs(), 5);
    // every non-root node has exactly one incoming tree arc, and the root
    // reaches all of them
    let mut seen = 0;
    let ok = breadth_first_simple(tree, root, |_| {
        seen += 1;
        true
    });
    assert!(ok);
    assert_eq!(seen, 6);
}
