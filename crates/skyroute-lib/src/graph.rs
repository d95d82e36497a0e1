use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::scoring::CostKind;

/// Minimum Jaro-Winkler similarity for an airport name to be offered as a
/// suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Numeric identifier for an airport.
pub type NodeId = i64;

/// Geographic position of an airport in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Airport (waypoint) within the route network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: Position,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            position: Position { lat, lon },
        }
    }
}

/// The four cost attributes carried by every route.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeCost {
    /// Kilometres.
    pub distance: f64,
    /// Minutes.
    pub duration: f64,
    /// Litres.
    pub fuel: f64,
    /// Dimensionless penalty, unbounded above.
    pub congestion: f64,
}

impl EdgeCost {
    pub fn new(distance: f64, duration: f64, fuel: f64, congestion: f64) -> Self {
        Self {
            distance,
            duration,
            fuel,
            congestion,
        }
    }

    /// Value of a single attribute.
    pub fn get(&self, kind: CostKind) -> f64 {
        match kind {
            CostKind::Distance => self.distance,
            CostKind::Duration => self.duration,
            CostKind::Fuel => self.fuel,
            CostKind::Congestion => self.congestion,
        }
    }

    fn validate(&self, from: NodeId, to: NodeId) -> Result<()> {
        for kind in CostKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidEdgeCost {
                    from,
                    to,
                    attribute: kind,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Directed route as supplied by a dataset loader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: EdgeCost,
}

impl EdgeSpec {
    pub fn new(from: NodeId, to: NodeId, cost: EdgeCost) -> Self {
        Self { from, to, cost }
    }
}

/// Outgoing edge within the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub cost: EdgeCost,
}

#[derive(Debug, Clone, Default)]
struct Network {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    name_to_id: HashMap<String, NodeId>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Network {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn edge(&self, from: NodeId, to: NodeId) -> Option<&EdgeCost> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| &edge.cost)
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Freshly built network whose costs have not yet been finalised.
///
/// A `RawGraph` can only become a routable [`Graph`] by being consumed, either
/// by [`crate::weather::apply_weather`] or by [`RawGraph::calm`], so weather
/// can never be applied to the same network twice.
#[derive(Debug, Clone, Default)]
pub struct RawGraph {
    network: Network,
}

impl RawGraph {
    pub fn node_count(&self) -> usize {
        self.network.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&EdgeCost> {
        self.network.edge(from, to)
    }

    /// Finalise the network without applying any weather.
    pub fn calm(self) -> Graph {
        Graph {
            network: Arc::new(self.network),
        }
    }

    /// Visit every edge mutably, sources in declaration order and targets in
    /// insertion order.
    pub(crate) fn for_each_edge_mut(&mut self, mut visit: impl FnMut(NodeId, &mut Edge)) {
        let network = &mut self.network;
        for node in &network.nodes {
            if let Some(edges) = network.adjacency.get_mut(&node.id) {
                for edge in edges.iter_mut() {
                    visit(node.id, edge);
                }
            }
        }
    }
}

/// Read-only route network used by the enumerator, scorer and analyzer.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    network: Arc<Network>,
}

impl Graph {
    /// All airports in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.network.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.network.node(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.network.index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.network.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }

    /// Return the outgoing edges of an airport in insertion order.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.network.neighbours(node)
    }

    /// Cost attributes of the directed route `from -> to`, if present.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&EdgeCost> {
        self.network.edge(from, to)
    }

    /// Lookup an airport identifier by its case-insensitive name.
    pub fn node_id_by_name(&self, name: &str) -> Option<NodeId> {
        self.network
            .name_to_id
            .get(&name.trim().to_lowercase())
            .copied()
    }

    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// Airport names most similar to `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .network
            .nodes
            .iter()
            .map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                (score, node.name.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Build a route network from airports and directed routes.
///
/// Fails if an airport id is declared twice, if a route references an
/// undeclared airport, or if a route cost is negative or non-finite.
/// Self-loops are accepted. A repeated `from -> to` pair replaces the earlier
/// cost while keeping its position in the adjacency list.
pub fn build_graph(
    nodes: impl IntoIterator<Item = Node>,
    edges: impl IntoIterator<Item = EdgeSpec>,
) -> Result<RawGraph> {
    let mut network = Network::default();

    for node in nodes {
        if network.index.contains_key(&node.id) {
            return Err(Error::DuplicateNode { id: node.id });
        }
        network.index.insert(node.id, network.nodes.len());
        network
            .name_to_id
            .entry(node.name.trim().to_lowercase())
            .or_insert(node.id);
        network.adjacency.insert(node.id, Vec::new());
        network.nodes.push(node);
    }

    for spec in edges {
        for endpoint in [spec.from, spec.to] {
            if !network.index.contains_key(&endpoint) {
                return Err(Error::UnknownEdgeEndpoint {
                    from: spec.from,
                    to: spec.to,
                    missing: endpoint,
                });
            }
        }
        spec.cost.validate(spec.from, spec.to)?;

        let entry = network.adjacency.entry(spec.from).or_default();
        if let Some(existing) = entry.iter_mut().find(|edge| edge.target == spec.to) {
            warn!(
                from = spec.from,
                to = spec.to,
                "duplicate route replaces earlier cost attributes"
            );
            existing.cost = spec.cost;
            continue;
        }
        entry.push(Edge {
            target: spec.to,
            cost: spec.cost,
        });
    }

    debug!(
        nodes = network.nodes.len(),
        edges = network.edge_count(),
        "built route network"
    );

    Ok(RawGraph { network })
}
