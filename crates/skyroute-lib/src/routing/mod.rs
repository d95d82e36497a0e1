//! Route planning over a weather-finalised network.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies (exhaustive, Dijkstra)
//! - [`RouteRequest`] - High-level request keyed by airport names or ids
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each strategy implements the [`RoutePlanner`] trait and returns the same
//! [`crate::scoring::RouteOutcome`] contract. The exhaustive planner scores every simple path
//! and is the correctness baseline for small networks. The Dijkstra planner
//! runs a single-objective shortest-path search on the weighted-sum route
//! cost, which selects a path of the same optimal score in polynomial time
//! because the scalarisation is a non-negative linear combination.
//!
//! # Example
//!
//! ```ignore
//! use skyroute_lib::{load_network, plan_route, DatasetPaths, RouteRequest};
//!
//! let paths = DatasetPaths::resolve(None)?;
//! let graph = load_network(&paths)?.calm();
//! let plan = plan_route(&graph, &RouteRequest::new("Heathrow", "Dubai"))?;
//! println!("Route: {} legs, score {:.2}", plan.hop_count(), plan.score);
//! ```

mod dijkstra;
mod planner;

pub use dijkstra::find_route_dijkstra;
pub use planner::{select_planner, DijkstraPlanner, ExhaustivePlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::{Path, SearchLimits};
use crate::scoring::{AggregateCost, Weights};

/// Number of fuzzy suggestions offered for an unknown airport.
const MAX_SUGGESTIONS: usize = 3;

/// Supported route search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Enumerate and score every simple path.
    #[default]
    Exhaustive,
    /// Dijkstra's algorithm on the weighted-sum route cost.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Exhaustive => "exhaustive",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Start airport name or numeric id.
    pub start: String,
    /// Destination airport name or numeric id.
    pub goal: String,
    pub weights: Weights,
    pub algorithm: RouteAlgorithm,
    pub limits: SearchLimits,
}

impl RouteRequest {
    /// Exhaustive request with unit weights and no search limits.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            weights: Weights::default(),
            algorithm: RouteAlgorithm::default(),
            limits: SearchLimits::default(),
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Path,
    pub score: f64,
    pub cost: AggregateCost,
}

impl RoutePlan {
    /// Number of legs in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve an airport given either its numeric id or its name.
///
/// Names are matched case-insensitively. Unknown airports produce
/// [`Error::UnknownAirport`] with the closest names as suggestions.
pub fn resolve_node(graph: &Graph, name_or_id: &str) -> Result<NodeId> {
    let trimmed = name_or_id.trim();
    if let Ok(id) = trimmed.parse::<NodeId>() {
        if graph.contains(id) {
            return Ok(id);
        }
    }

    graph.node_id_by_name(trimmed).ok_or_else(|| {
        let suggestions = graph.fuzzy_node_matches(trimmed, MAX_SUGGESTIONS);
        Error::UnknownAirport {
            name: trimmed.to_string(),
            suggestions,
        }
    })
}

/// Compute a route using the requested strategy and weights.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves airport names to ids
/// 2. Selects the planner strategy
/// 3. Runs the search and converts "no path" into [`Error::RouteNotFound`]
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_node(graph, &request.start)?;
    let goal_id = resolve_node(graph, &request.goal)?;

    let planner = select_planner(request);
    let outcome = planner.find_path(graph, start_id, goal_id, &request.weights, &request.limits)?;

    let Some(scored) = outcome.found() else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: start_id,
        goal: goal_id,
        steps: scored.path,
        score: scored.score,
        cost: scored.cost,
    })
}
