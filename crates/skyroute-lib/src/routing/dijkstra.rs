use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::{Path, SearchLimit, SearchLimits};
use crate::scoring::{AggregateCost, NotFoundReason, RouteOutcome, ScoredPath, Weights};

/// Run Dijkstra's algorithm with the weighted sum of the four cost attributes
/// as the route cost.
///
/// The returned score is recomputed from the path's [`AggregateCost`] so it
/// is directly comparable with the exhaustive planner's score.
pub fn find_route_dijkstra(
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

    let Some(path) = search(graph, start, goal, weights, limits)? else {
        return Ok(RouteOutcome::NotFound {
            reason: NotFoundReason::Unreachable,
        });
    };

    let cost = AggregateCost::along(graph, &path)?;
    let score = cost.score(weights);
    Ok(RouteOutcome::Found(ScoredPath { path, score, cost }))
}

fn search(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    weights: &Weights,
    limits: &SearchLimits,
) -> Result<Option<Path>> {
    if start == goal {
        return Ok(Some(vec![start]));
    }

    let started = Instant::now();
    let mut expansions = 0u64;
    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(&entry.node) {
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.node == goal {
            debug!(start, goal, expansions, "dijkstra reached goal");
            return Ok(Some(reconstruct_path(&parents, start, goal)));
        }

        if let Some(max) = limits.max_expansions {
            if expansions >= max {
                return Err(Error::SearchLimitExceeded {
                    limit: SearchLimit::Expansions(max),
                });
            }
        }
        if let Some(budget) = limits.max_duration {
            if started.elapsed() >= budget {
                return Err(Error::SearchLimitExceeded {
                    limit: SearchLimit::Deadline(budget),
                });
            }
        }
        expansions += 1;

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = current_distance + weights.edge_cost(&edge.cost);
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Ok(None)
}

fn reconstruct_path(
    parents: &HashMap<NodeId, Option<NodeId>>,
    start: NodeId,
    goal: NodeId,
) -> Path {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
