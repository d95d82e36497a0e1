//! Route command handler for computing the best route between two airports.

use std::time::Duration;

use anyhow::{Context, Result};

use skyroute_cli::network::{load_ready_network, NetworkOptions};
use skyroute_cli::output::OutputFormat;
use skyroute_lib::{
    plan_route, Error as RouteError, RouteAlgorithm, RouteRequest, RouteSummary, SearchLimits,
    Weights,
};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Source airport name or id.
    pub from: String,
    /// Destination airport name or id.
    pub to: String,
    /// Weight vector applied to the four cost attributes.
    pub weights: Weights,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
    /// Maximum number of depth-first expansions.
    pub max_expansions: Option<u64>,
    /// Maximum number of legs in the route.
    pub max_hops: Option<usize>,
    /// Wall-clock budget for the search.
    pub max_duration: Option<Duration>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
            .with_weights(self.weights)
            .with_algorithm(self.algorithm)
            .with_limits(SearchLimits {
                max_depth: self.max_hops,
                max_expansions: self.max_expansions,
                max_duration: self.max_duration,
            })
    }
}

/// Handle the route subcommand.
///
/// Loads the dataset, applies weather and prints the best route with its
/// performance metrics.
pub fn handle_route_command(
    network: &NetworkOptions,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = load_ready_network(network)?;
    let request = args.to_request();

    let plan = match plan_route(&graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(args, err)),
    };

    let summary = RouteSummary::from_plan(&graph, &plan)
        .context("failed to build route summary for display")?;
    print!("{}", ensure_trailing_newline(format.render_route(&summary)?));
    Ok(())
}

fn ensure_trailing_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

fn handle_route_failure(args: &RouteCommandArgs, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { name, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal, args))
        }
        RouteError::SearchLimitExceeded { limit } => anyhow::anyhow!(
            "Route search stopped early: {}. Raise the search limits or use --algorithm dijkstra.",
            limit
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = match suggestions {
            [only] => format!("Did you mean '{only}'?"),
            _ => {
                let joined = suggestions
                    .iter()
                    .map(|s| format!("'{}'", s))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Did you mean one of: {}?", joined)
            }
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str, args: &RouteCommandArgs) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    if args.max_hops.is_some() {
        message.push_str(" Try increasing --max-hops.");
    } else {
        message.push_str(" Check that the routes table connects these airports.");
    }
    message
}
