use std::collections::HashSet;
use std::fmt;
use std::slice;
use std::time::{Duration, Instant};

use crate::graph::{Edge, Graph, NodeId};

/// Ordered sequence of distinct airports joined by directed routes.
pub type Path = Vec<NodeId>;

/// Optional caps applied while enumerating simple paths.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    /// Maximum number of routes (edges) in a yielded path.
    pub max_depth: Option<usize>,
    /// Maximum number of depth-first node expansions.
    pub max_expansions: Option<u64>,
    /// Wall-clock budget measured from the first call to `next`.
    pub max_duration: Option<Duration>,
}

/// The cap that stopped an enumeration early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    Expansions(u64),
    Deadline(Duration),
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLimit::Expansions(max) => write!(f, "expansion limit of {max} reached"),
            SearchLimit::Deadline(budget) => {
                write!(f, "deadline of {} ms exceeded", budget.as_millis())
            }
        }
    }
}

/// Lazy depth-first enumeration of every simple path between two airports.
///
/// Neighbours are visited in adjacency (insertion) order, so the sequence of
/// yielded paths is deterministic for a given graph. A node already on the
/// current path is never revisited, which also skips self-loops. When
/// `start == goal` the only path yielded is `[start]`. Unknown endpoints yield
/// nothing.
#[derive(Debug)]
pub struct SimplePaths<'a> {
    graph: &'a Graph,
    goal: NodeId,
    path: Vec<NodeId>,
    on_path: HashSet<NodeId>,
    stack: Vec<slice::Iter<'a, Edge>>,
    trivial: Option<NodeId>,
    limits: SearchLimits,
    expansions: u64,
    started: Option<Instant>,
    limit_hit: Option<SearchLimit>,
}

/// Start a fresh enumeration of simple paths from `start` to `goal`.
pub fn enumerate_simple_paths(graph: &Graph, start: NodeId, goal: NodeId) -> SimplePaths<'_> {
    SimplePaths::new(graph, start, goal)
}

impl<'a> SimplePaths<'a> {
    pub fn new(graph: &'a Graph, start: NodeId, goal: NodeId) -> Self {
        let mut paths = Self {
            graph,
            goal,
            path: Vec::new(),
            on_path: HashSet::new(),
            stack: Vec::new(),
            trivial: None,
            limits: SearchLimits::default(),
            expansions: 0,
            started: None,
            limit_hit: None,
        };

        if !graph.contains(start) || !graph.contains(goal) {
            return paths;
        }

        if start == goal {
            paths.trivial = Some(start);
        } else {
            paths.path.push(start);
            paths.on_path.insert(start);
            paths.stack.push(graph.neighbours(start).iter());
        }
        paths
    }

    /// Attach search caps to this enumeration.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The cap that ended the enumeration, if any.
    pub fn limit_hit(&self) -> Option<SearchLimit> {
        self.limit_hit
    }

    /// Number of nodes expanded so far.
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    fn within_depth(&self, edges: usize) -> bool {
        self.limits.max_depth.is_none_or(|max| edges <= max)
    }

    fn exceeded_limit(&mut self) -> Option<SearchLimit> {
        if let Some(max) = self.limits.max_expansions {
            if self.expansions >= max {
                return Some(SearchLimit::Expansions(max));
            }
        }
        if let (Some(budget), Some(started)) = (self.limits.max_duration, self.started) {
            if started.elapsed() >= budget {
                return Some(SearchLimit::Deadline(budget));
            }
        }
        None
    }

    fn abort(&mut self, limit: SearchLimit) {
        self.limit_hit = Some(limit);
        self.stack.clear();
        self.path.clear();
        self.on_path.clear();
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        if let Some(only) = self.trivial.take() {
            return Some(vec![only]);
        }
        if self.limits.max_duration.is_some() && self.started.is_none() {
            self.started = Some(Instant::now());
        }

        let graph = self.graph;
        loop {
            let next_edge = self.stack.last_mut()?.next();
            let Some(edge) = next_edge else {
                self.stack.pop();
                if let Some(node) = self.path.pop() {
                    self.on_path.remove(&node);
                }
                continue;
            };

            let child = edge.target;
            if self.on_path.contains(&child) {
                continue;
            }

            if child == self.goal {
                if !self.within_depth(self.path.len()) {
                    continue;
                }
                let mut found = self.path.clone();
                found.push(child);
                return Some(found);
            }

            if !self.within_depth(self.path.len() + 1) {
                continue;
            }

            if let Some(limit) = self.exceeded_limit() {
                self.abort(limit);
                return None;
            }

            self.expansions += 1;
            self.path.push(child);
            self.on_path.insert(child);
            self.stack.push(graph.neighbours(child).iter());
        }
    }
}
