//! SkyRoute library entry points.
//!
//! This crate loads an airport network, applies the one-off weather
//! adjustment to its edge costs, and selects the route minimising a weighted
//! combination of distance, duration, fuel and congestion. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use skyroute_lib::{
//!     analyze_path, apply_weather, best_path, build_graph, EdgeCost, EdgeSpec, Node, Weights,
//! };
//!
//! let raw = build_graph(
//!     vec![Node::new(1, "A", 0.0, 0.0), Node::new(2, "B", 0.0, 1.0)],
//!     vec![EdgeSpec::new(1, 2, EdgeCost::new(100.0, 15.0, 30.0, 0.2))],
//! )?;
//! let graph = apply_weather(raw, &mut SmallRng::seed_from_u64(7));
//!
//! let best = best_path(&graph, 1, 2, &Weights::default())?
//!     .found()
//!     .expect("route exists");
//! let metrics = analyze_path(&graph, &best.path)?;
//! assert_eq!(metrics.total_distance_km, 100.0);
//! # Ok::<(), skyroute_lib::Error>(())
//! ```

#![deny(warnings)]

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod scoring;
pub mod weather;

pub use analysis::{analyze_path, PathMetrics};
pub use dataset::{load_network, read_airports, read_routes, DatasetPaths};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeCost, EdgeSpec, Graph, Node, NodeId, Position, RawGraph};
pub use output::{RouteRenderMode, RouteSummary};
pub use path::{enumerate_simple_paths, Path, SearchLimit, SearchLimits, SimplePaths};
pub use routing::{plan_route, resolve_node, RouteAlgorithm, RoutePlan, RouteRequest};
pub use scoring::{
    best_path, best_path_with_limits, AggregateCost, CostKind, NotFoundReason, RouteOutcome,
    ScoredPath, Weights,
};
pub use weather::{apply_weather, apply_weather_with, WeatherConfig};
