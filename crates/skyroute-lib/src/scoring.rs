//! Multi-objective route scoring.
//!
//! Every candidate path is reduced to an [`AggregateCost`] (the four cost
//! attributes summed along its routes) and then to a single scalar score using
//! a caller-supplied [`Weights`] vector:
//!
//! ```text
//! score = w.distance * distance + w.duration * duration
//!       + w.fuel * fuel + w.congestion * congestion
//! ```
//!
//! [`best_path`] scores every simple path produced by
//! [`crate::path::enumerate_simple_paths`] and keeps the strictly smallest
//! score. Ties keep the path the enumeration yields first.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{EdgeCost, Graph, NodeId};
use crate::path::{enumerate_simple_paths, Path, SearchLimits};

/// Named cost attribute carried by every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    Distance,
    Duration,
    Fuel,
    Congestion,
}

impl CostKind {
    pub const ALL: [CostKind; 4] = [
        CostKind::Distance,
        CostKind::Duration,
        CostKind::Fuel,
        CostKind::Congestion,
    ];
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostKind::Distance => "distance",
            CostKind::Duration => "duration",
            CostKind::Fuel => "fuel",
            CostKind::Congestion => "congestion",
        };
        f.write_str(value)
    }
}

/// Per-request weight vector. Defaults to `1.0` for every attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub distance: f64,
    pub duration: f64,
    pub fuel: f64,
    pub congestion: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Weights {
    pub fn new(distance: f64, duration: f64, fuel: f64, congestion: f64) -> Self {
        Self {
            distance,
            duration,
            fuel,
            congestion,
        }
    }

    /// The same weight for every attribute.
    pub fn uniform(weight: f64) -> Self {
        Self::new(weight, weight, weight, weight)
    }

    pub fn get(&self, kind: CostKind) -> f64 {
        match kind {
            CostKind::Distance => self.distance,
            CostKind::Duration => self.duration,
            CostKind::Fuel => self.fuel,
            CostKind::Congestion => self.congestion,
        }
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        for kind in CostKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeight { kind, value });
            }
        }
        Ok(())
    }

    /// Weighted-sum cost of a single route.
    pub fn edge_cost(&self, cost: &EdgeCost) -> f64 {
        CostKind::ALL
            .iter()
            .fold(0.0, |acc, &kind| acc + self.get(kind) * cost.get(kind))
    }
}

/// Cost attributes accumulated along a path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregateCost {
    pub distance: f64,
    pub duration: f64,
    pub fuel: f64,
    pub congestion: f64,
    /// Number of routes traversed.
    pub edges: usize,
}

impl AggregateCost {
    /// Sum the cost attributes of every consecutive pair in `path`.
    ///
    /// A single-airport path has zero cost. Fails with
    /// [`Error::RevisitedNode`] when an airport appears twice and with
    /// [`Error::InvalidPath`] when a consecutive pair has no route.
    pub fn along(graph: &Graph, path: &[NodeId]) -> Result<Self> {
        match path {
            [] => Err(Error::EmptyPath),
            [only] if !graph.contains(*only) => Err(Error::UnknownNode { id: *only }),
            _ => {
                let mut visited = HashSet::with_capacity(path.len());
                if let Some(&id) = path.iter().find(|&&id| !visited.insert(id)) {
                    return Err(Error::RevisitedNode { id });
                }

                let mut total = Self::default();
                for pair in path.windows(2) {
                    let (from, to) = (pair[0], pair[1]);
                    let cost = graph
                        .edge(from, to)
                        .ok_or(Error::InvalidPath { from, to })?;
                    total.add(cost);
                }
                Ok(total)
            }
        }
    }

    fn add(&mut self, cost: &EdgeCost) {
        self.distance += cost.distance;
        self.duration += cost.duration;
        self.fuel += cost.fuel;
        self.congestion += cost.congestion;
        self.edges += 1;
    }

    pub fn get(&self, kind: CostKind) -> f64 {
        match kind {
            CostKind::Distance => self.distance,
            CostKind::Duration => self.duration,
            CostKind::Fuel => self.fuel,
            CostKind::Congestion => self.congestion,
        }
    }

    /// Scalarise the aggregate with `weights`.
    pub fn score(&self, weights: &Weights) -> f64 {
        CostKind::ALL
            .iter()
            .fold(0.0, |acc, &kind| acc + weights.get(kind) * self.get(kind))
    }

    /// Mean congestion per route traversed; `0.0` for a zero-route path.
    pub fn avg_congestion(&self) -> f64 {
        if self.edges == 0 {
            0.0
        } else {
            self.congestion / self.edges as f64
        }
    }
}

/// A path together with its aggregate cost and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPath {
    pub path: Path,
    pub score: f64,
    pub cost: AggregateCost,
}

/// Why a route query produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    UnknownStart,
    UnknownGoal,
    Unreachable,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NotFoundReason::UnknownStart => "start airport is not in the network",
            NotFoundReason::UnknownGoal => "destination airport is not in the network",
            NotFoundReason::Unreachable => "destination is unreachable from start",
        };
        f.write_str(value)
    }
}

/// Outcome of a route query. Not finding a path is a normal result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(ScoredPath),
    NotFound { reason: NotFoundReason },
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn found(self) -> Option<ScoredPath> {
        match self {
            RouteOutcome::Found(scored) => Some(scored),
            RouteOutcome::NotFound { .. } => None,
        }
    }

    pub(crate) fn missing_endpoint(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Self> {
        let reason = if !graph.contains(start) {
            NotFoundReason::UnknownStart
        } else if !graph.contains(goal) {
            NotFoundReason::UnknownGoal
        } else {
            return None;
        };
        Some(RouteOutcome::NotFound { reason })
    }
}

/// Exhaustively score every simple path from `start` to `goal`.
pub fn best_path(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    weights: &Weights,
) -> Result<RouteOutcome> {
    best_path_with_limits(graph, start, goal, weights, &SearchLimits::default())
}

/// Like [`best_path`], failing with [`Error::SearchLimitExceeded`] when an
/// expansion or time cap stops the enumeration before it completes.
pub fn best_path_with_limits(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    weights: &Weights,
    limits: &SearchLimits,
) -> Result<RouteOutcome> {
    weights.validate()?;
    if let Some(outcome) = RouteOutcome::missing_endpoint(graph, start, goal) {
        return Ok(outcome);
    }

    let mut paths = enumerate_simple_paths(graph, start, goal).with_limits(*limits);
    let mut best: Option<ScoredPath> = None;
    let mut candidates = 0usize;

    for path in paths.by_ref() {
        candidates += 1;
        let cost = AggregateCost::along(graph, &path)?;
        let score = cost.score(weights);
        if best.as_ref().is_none_or(|current| score < current.score) {
            best = Some(ScoredPath { path, score, cost });
        }
    }

    if let Some(limit) = paths.limit_hit() {
        return Err(Error::SearchLimitExceeded { limit });
    }

    debug!(
        start,
        goal,
        candidates,
        expansions = paths.expansions(),
        "scored simple paths"
    );

    Ok(match best {
        Some(scored) => RouteOutcome::Found(scored),
        None => RouteOutcome::NotFound {
            reason: NotFoundReason::Unreachable,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, EdgeSpec, Node};

    fn line() -> Graph {
        build_graph(
            vec![
                Node::new(1, "A", 0.0, 0.0),
                Node::new(2, "B", 0.0, 0.0),
                Node::new(3, "C", 0.0, 0.0),
            ],
            vec![
                EdgeSpec::new(1, 2, EdgeCost::new(10.0, 5.0, 2.0, 0.25)),
                EdgeSpec::new(2, 3, EdgeCost::new(20.0, 7.0, 3.0, 0.75)),
            ],
        )
        .expect("graph builds")
        .calm()
    }

    #[test]
    fn aggregate_sums_each_attribute() {
        let cost = AggregateCost::along(&line(), &[1, 2, 3]).expect("valid path");
        assert_eq!(cost.distance, 30.0);
        assert_eq!(cost.duration, 12.0);
        assert_eq!(cost.fuel, 5.0);
        assert_eq!(cost.congestion, 1.0);
        assert_eq!(cost.edges, 2);
        assert_eq!(cost.avg_congestion(), 0.5);
    }

    #[test]
    fn score_applies_weights_per_attribute() {
        let cost = AggregateCost::along(&line(), &[1, 2, 3]).expect("valid path");
        let weights = Weights::new(1.0, 0.0, 2.0, 10.0);
        assert_eq!(cost.score(&weights), 30.0 + 10.0 + 10.0);
    }

    #[test]
    fn edge_cost_matches_single_route_aggregate() {
        let graph = line();
        let weights = Weights::new(0.5, 2.0, 1.5, 4.0);
        let aggregate = AggregateCost::along(&graph, &[1, 2]).expect("valid path");
        let edge = graph.edge(1, 2).expect("edge exists");
        assert_eq!(weights.edge_cost(edge), aggregate.score(&weights));
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let graph = line();
        let err = best_path(&graph, 1, 3, &Weights::new(1.0, -0.5, 1.0, 1.0))
            .expect_err("negative weight");
        assert!(matches!(
            err,
            Error::InvalidWeight {
                kind: CostKind::Duration,
                ..
            }
        ));

        let err = best_path(&graph, 1, 3, &Weights::new(1.0, 1.0, 1.0, f64::NAN))
            .expect_err("NaN weight");
        assert!(matches!(
            err,
            Error::InvalidWeight {
                kind: CostKind::Congestion,
                ..
            }
        ));
    }

    #[test]
    fn unknown_endpoints_are_distinguished_from_unreachable() {
        let graph = line();
        let weights = Weights::default();

        let outcome = best_path(&graph, 42, 3, &weights).expect("valid weights");
        assert_eq!(
            outcome,
            RouteOutcome::NotFound {
                reason: NotFoundReason::UnknownStart
            }
        );

        let outcome = best_path(&graph, 1, 42, &weights).expect("valid weights");
        assert_eq!(
            outcome,
            RouteOutcome::NotFound {
                reason: NotFoundReason::UnknownGoal
            }
        );

        let outcome = best_path(&graph, 3, 1, &weights).expect("valid weights");
        assert_eq!(
            outcome,
            RouteOutcome::NotFound {
                reason: NotFoundReason::Unreachable
            }
        );
    }

    #[test]
    fn weights_deserialize_with_defaults() {
        let weights: Weights = serde_json::from_str(r#"{"fuel": 3.0}"#).expect("valid json");
        assert_eq!(weights, Weights::new(1.0, 1.0, 3.0, 1.0));
    }
}
