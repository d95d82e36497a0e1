use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::scoring::AggregateCost;

/// User-facing performance figures for a single path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathMetrics {
    pub total_distance_km: f64,
    pub flight_duration_min: f64,
    pub fuel_consumed_l: f64,
    /// Mean congestion per leg; `0.0` when the path has no legs.
    pub avg_congestion: f64,
    pub legs: usize,
}

impl From<AggregateCost> for PathMetrics {
    fn from(cost: AggregateCost) -> Self {
        Self {
            total_distance_km: cost.distance,
            flight_duration_min: cost.duration,
            fuel_consumed_l: cost.fuel,
            avg_congestion: cost.avg_congestion(),
            legs: cost.edges,
        }
    }
}

impl PathMetrics {
    /// Labelled values in report order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("total_distance_km", self.total_distance_km),
            ("flight_duration_min", self.flight_duration_min),
            ("fuel_consumed_l", self.fuel_consumed_l),
            ("avg_congestion", self.avg_congestion),
        ]
    }
}

/// Recompute the aggregate metrics of `path` for reporting.
///
/// Uses the same accumulation as the scorer, so the sums agree exactly with
/// the [`AggregateCost`] of a scored path.
pub fn analyze_path(graph: &Graph, path: &[NodeId]) -> Result<PathMetrics> {
    AggregateCost::along(graph, path).map(PathMetrics::from)
}
