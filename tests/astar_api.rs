//! A*/algorithm-A scenarios over the public API.

use graph_search::prelude::*;

/// Node data whose estimate is always zero: A* degenerates to Dijkstra.
struct Zero(&'static str);

impl Estimator for Zero {
    fn estimate(&self, _other: &Self) -> f64 {
        0.0
    }
}

fn classic_with_zero_estimates() -> (Digraph<Zero>, std::collections::HashMap<&'static str, NodeId>)
{
    let mut g = Digraph::new();
    let mut ids = std::collections::HashMap::new();
    for name in ["a", "b", "c", "d", "e", "f"] {
        ids.insert(name, g.add_node(Zero(name)));
    }
    for (from, to, w) in [
        ("a", "b", 7.0),
        ("a", "c", 9.0),
        ("a", "f", 14.0),
        ("b", "c", 10.0),
        ("b", "d", 15.0),
        ("c", "d", 11.0),
        ("c", "f", 2.0),
        ("d", "e", 6.0),
        ("e", "f", 9.0),
    ] {
        g.link(ids[from], ids[to], w);
    }
    (g, ids)
}

fn names(g: &Digraph<Zero>, path: &[PathStep<NodeId, f64>]) -> Vec<&'static str> {
    path.iter().map(|s| g.node(s.node).0).collect()
}

#[test]
fn zero_estimate_matches_dijkstra() {
    let (g, ids) = classic_with_zero_estimates();
    let (d_path, d_dist) = dijkstra_shortest_path(&g, ids["a"], ids["e"]);
    let (a_path, a_dist) = a_star_a(&g, ids["a"], ids["e"]);
    assert_eq!(a_dist, 26.0);
    assert_eq!(a_dist, d_dist);
    assert_eq!(names(&g, &a_path), names(&g, &d_path));
    assert_eq!(names(&g, &a_path), vec!["a", "c", "d", "e"]);
}

#[test]
fn zero_estimate_is_trivially_monotonic() {
    let (g, ids) = classic_with_zero_estimates();
    let (path, dist) = a_star_m(&g, ids["a"], ids["e"]);
    assert_eq!(dist, 26.0);
    assert_eq!(names(&g, &path), vec!["a", "c", "d", "e"]);
}

/// Straight-line estimates on a grid-ish graph: admissible and monotonic.
struct Pt {
    name: &'static str,
    x: f64,
    y: f64,
}

impl Estimator for Pt {
    fn estimate(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[test]
fn euclidean_estimate_finds_the_straight_route() {
    // a unit square with a diagonal shortcut that is longer than the two
    // sides it cuts
    let mut g = Digraph::new();
    let sw = g.add_node(Pt { name: "sw", x: 0.0, y: 0.0 });
    let se = g.add_node(Pt { name: "se", x: 1.0, y: 0.0 });
    let nw = g.add_node(Pt { name: "nw", x: 0.0, y: 1.0 });
    let ne = g.add_node(Pt { name: "ne", x: 1.0, y: 1.0 });
    g.link(sw, se, 1.0);
    g.link(sw, nw, 1.0);
    g.link(se, ne, 1.0);
    g.link(nw, ne, 1.0);
    g.link(sw, ne, 2.5);

    let (path, dist) = a_star_m(&g, sw, ne);
    assert_eq!(dist, 2.0);
    assert_eq!(path.len(), 3);
    assert_eq!(g.node(path[2].node).name, "ne");

    let (a_path, a_dist) = a_star_a(&g, sw, ne);
    assert_eq!(a_dist, 2.0);
    assert_eq!(a_path.len(), 3);
}

#[test]
fn unreachable_matches_dijkstra_sentinel() {
    let mut g = Digraph::new();
    let a = g.add_node(Zero("a"));
    let b = g.add_node(Zero("b"));
    g.link(b, a, 1.0);
    let (path, dist) = a_star_m(&g, a, b);
    assert!(path.is_empty());
    assert_eq!(dist, f64::INFINITY);
}
