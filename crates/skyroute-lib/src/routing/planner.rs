//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for the
//! exhaustive baseline and the weighted-sum Dijkstra search. Adding a new
//! strategy does not require changes to the `plan_route` orchestrator.

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::SearchLimits;
use crate::scoring::{best_path_with_limits, RouteOutcome, Weights};

use super::dijkstra::find_route_dijkstra;
use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
///
/// Each implementation encapsulates one search algorithm. All of them honour
/// the same contract: validated weights, `NotFound` for unknown or unreachable
/// endpoints, and `[start]` with a zero score when `start == goal`.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Find the minimum-score path from `start` to `goal`.
    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        weights: &Weights,
        limits: &SearchLimits,
    ) -> Result<RouteOutcome>;
}

/// Enumerate-then-score planner.
///
/// Exponential in the worst case; ties keep the first path in depth-first
/// adjacency order.
#[derive(Debug, Clone, Default)]
pub struct ExhaustivePlanner;

impl RoutePlanner for ExhaustivePlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Exhaustive
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        weights: &Weights,
        limits: &SearchLimits,
    ) -> Result<RouteOutcome> {
        best_path_with_limits(graph, start, goal, weights, limits)
    }
}

/// Dijkstra planner on the weighted-sum route cost.
///
/// Honours the expansion and time caps of [`SearchLimits`]; `max_depth` is
/// not supported and is ignored with a warning.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        weights: &Weights,
        limits: &SearchLimits,
    ) -> Result<RouteOutcome> {
        if limits.max_depth.is_some() {
            tracing::warn!("max_depth is not supported by the dijkstra planner; ignoring it");
        }
        find_route_dijkstra(graph, start, goal, weights, limits)
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Exhaustive => Box::new(ExhaustivePlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_planner_returns_correct_algorithm() {
        assert_eq!(ExhaustivePlanner.algorithm(), RouteAlgorithm::Exhaustive);
    }

    #[test]
    fn dijkstra_planner_returns_correct_algorithm() {
        assert_eq!(DijkstraPlanner.algorithm(), RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        let request = RouteRequest::new("A", "B");
        assert_eq!(
            select_planner(&request).algorithm(),
            RouteAlgorithm::Exhaustive
        );

        let request = request.with_algorithm(RouteAlgorithm::Dijkstra);
        assert_eq!(
            select_planner(&request).algorithm(),
            RouteAlgorithm::Dijkstra
        );
    }
}
