//! Output formatting for route and airport listings.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use skyroute_lib::{Node, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn route_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Text => RouteRenderMode::PlainText,
            OutputFormat::Json => RouteRenderMode::Json,
        }
    }

    /// Render a planned route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        summary
            .render(self.route_mode())
            .context("failed to render route summary")
    }

    /// Render the airport list in declaration order.
    pub fn render_airports(self, airports: &[Node]) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_airports_text(airports)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(airports).context("failed to serialise airports")
            }
        }
    }
}

fn render_airports_text(airports: &[Node]) -> String {
    let width = airports
        .iter()
        .map(|airport| airport.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut buffer = String::new();
    let _ = writeln!(buffer, "Airports ({}):", airports.len());
    for airport in airports {
        let _ = writeln!(
            buffer,
            "{:>width$}  {} ({:.4}, {:.4})",
            airport.id,
            airport.name,
            airport.position.lat,
            airport.position.lon,
            width = width
        );
    }
    buffer
}
