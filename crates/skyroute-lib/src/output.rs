use std::fmt::Write;

use serde::Serialize;

use crate::analysis::{analyze_path, PathMetrics};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    #[default]
    PlainText,
    Json,
}

/// Airport visited by a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    pub name: String,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub legs: usize,
    pub score: f64,
    pub steps: Vec<RouteStep>,
    pub metrics: PathMetrics,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved airport names and
    /// the performance metrics of the chosen path.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyPath);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let name = graph
                    .node_name(id)
                    .ok_or(Error::UnknownNode { id })?
                    .to_string();
                Ok(RouteStep { index, id, name })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            algorithm: plan.algorithm,
            legs: plan.hop_count(),
            score: plan.score,
            steps,
            metrics: analyze_path(graph, &plan.steps)?,
        })
    }

    /// Render the summary using the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> Result<String> {
        match mode {
            RouteRenderMode::PlainText => Ok(self.render_plain()),
            RouteRenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_plain(&self) -> String {
        let route = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ");

        let mut buffer = String::new();
        let _ = writeln!(buffer, "Best Route: {route}");
        let _ = writeln!(
            buffer,
            "Score: {} ({} legs, algorithm: {})",
            round2(self.score),
            self.legs,
            self.algorithm
        );
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Performance Metrics:");
        for (label, value) in self.metrics.entries() {
            let _ = writeln!(buffer, "{}: {}", title_case(label), round2(value));
        }
        buffer
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `total_distance_km` -> `Total Distance Km`.
fn title_case(label: &str) -> String {
    label
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
