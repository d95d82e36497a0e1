//! Airports command handler for listing the loaded network.

use anyhow::Result;

use skyroute_cli::network::{load_ready_network, NetworkOptions};
use skyroute_cli::output::OutputFormat;

/// Handle the airports subcommand.
///
/// Lists every airport that can be used with `route --from/--to`.
pub fn handle_airports_command(network: &NetworkOptions, format: OutputFormat) -> Result<()> {
    // Route costs are not shown, so skip the weather draws.
    let graph = load_ready_network(&NetworkOptions {
        calm: true,
        ..network.clone()
    })?;
    print!("{}", format.render_airports(graph.nodes())?);
    Ok(())
}
