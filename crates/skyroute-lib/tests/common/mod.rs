#![allow(dead_code)]

use std::path::PathBuf;

use skyroute_lib::{build_graph, EdgeCost, EdgeSpec, Graph, Node};

pub const A: i64 = 1;
pub const B: i64 = 2;
pub const C: i64 = 3;
pub const D: i64 = 4;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Four airports with two competing routes from A to D:
/// A -> B -> D (score 260.2 under unit weights) and A -> C -> D (256.1).
pub fn diamond() -> Graph {
    build_graph(
        vec![
            Node::new(A, "A", 0.0, 0.0),
            Node::new(B, "B", 1.0, 0.0),
            Node::new(C, "C", -1.0, 0.0),
            Node::new(D, "D", 0.0, 1.0),
        ],
        vec![
            EdgeSpec::new(A, B, EdgeCost::new(100.0, 10.0, 20.0, 0.1)),
            EdgeSpec::new(B, D, EdgeCost::new(100.0, 10.0, 20.0, 0.1)),
            EdgeSpec::new(A, C, EdgeCost::new(150.0, 8.0, 25.0, 0.05)),
            EdgeSpec::new(C, D, EdgeCost::new(50.0, 8.0, 15.0, 0.05)),
        ],
    )
    .expect("diamond graph builds")
    .calm()
}

/// A denser network with several overlapping routes and a cycle.
pub fn mesh() -> Graph {
    let nodes = (1..=6).map(|id| Node::new(id, format!("M{id}"), 0.0, id as f64));
    let edges = vec![
        EdgeSpec::new(1, 2, EdgeCost::new(120.0, 14.0, 30.0, 0.2)),
        EdgeSpec::new(1, 3, EdgeCost::new(90.0, 22.0, 25.0, 0.4)),
        EdgeSpec::new(2, 3, EdgeCost::new(40.0, 6.0, 8.0, 0.1)),
        EdgeSpec::new(3, 2, EdgeCost::new(45.0, 7.0, 9.0, 0.1)),
        EdgeSpec::new(2, 4, EdgeCost::new(200.0, 25.0, 50.0, 0.3)),
        EdgeSpec::new(3, 5, EdgeCost::new(110.0, 12.0, 26.0, 0.5)),
        EdgeSpec::new(5, 4, EdgeCost::new(60.0, 9.0, 14.0, 0.2)),
        EdgeSpec::new(4, 6, EdgeCost::new(75.0, 10.0, 18.0, 0.1)),
        EdgeSpec::new(5, 6, EdgeCost::new(160.0, 19.0, 35.0, 0.6)),
        EdgeSpec::new(6, 1, EdgeCost::new(300.0, 40.0, 70.0, 0.2)),
    ];
    build_graph(nodes, edges).expect("mesh graph builds").calm()
}
