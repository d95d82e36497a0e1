//! Dataset loading and weather finalisation for CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use skyroute_lib::{apply_weather, load_network, DatasetPaths, Graph};

/// Options shared by every command that needs the route network.
#[derive(Debug, Clone, Default)]
pub struct NetworkOptions {
    /// Directory holding `airports.csv` and `routes.csv`.
    pub data_dir: Option<PathBuf>,
    /// Seed for the weather draws. Unseeded runs use the thread RNG.
    pub seed: Option<u64>,
    /// Skip the weather pass entirely.
    pub calm: bool,
}

/// Locate and load the dataset, then apply weather unless `calm` is set.
pub fn load_ready_network(options: &NetworkOptions) -> Result<Graph> {
    let paths = DatasetPaths::resolve(options.data_dir.as_deref())
        .context("failed to locate the SkyRoute dataset")?;
    let raw = load_network(&paths).with_context(|| {
        format!(
            "failed to load dataset from {} and {}",
            paths.airports.display(),
            paths.routes.display()
        )
    })?;

    let graph = match (options.calm, options.seed) {
        (true, _) => {
            info!("weather disabled; using published route costs");
            raw.calm()
        }
        (false, Some(seed)) => {
            info!(seed, "applying seeded weather");
            apply_weather(raw, &mut SmallRng::seed_from_u64(seed))
        }
        (false, None) => apply_weather(raw, &mut rand::rng()),
    };
    Ok(graph)
}
