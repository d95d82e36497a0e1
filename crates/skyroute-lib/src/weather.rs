//! One-off weather perturbation of route costs.
//!
//! Weather adds an independent uniform delay to every route's duration and an
//! independent uniform penalty to its congestion. The pass consumes a
//! [`RawGraph`] and returns the routable [`Graph`], so it runs exactly once per
//! network. Applying a second round of weather does not compile:
//!
//! ```compile_fail
//! use rand::{rngs::SmallRng, SeedableRng};
//! use skyroute_lib::{apply_weather, build_graph, Node};
//!
//! let raw = build_graph(vec![Node::new(1, "A", 0.0, 0.0)], Vec::new()).unwrap();
//! let mut rng = SmallRng::seed_from_u64(7);
//! let ready = apply_weather(raw, &mut rng);
//! let twice = apply_weather(ready, &mut rng);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, RawGraph};

/// Upper bound of the uniform delay added to each route, in minutes.
pub const DEFAULT_MAX_DELAY_MINUTES: f64 = 20.0;

/// Upper bound of the uniform congestion added to each route.
pub const DEFAULT_MAX_CONGESTION: f64 = 0.2;

/// Bounds of the weather noise. Both draws are uniform on `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub max_delay_minutes: f64,
    pub max_congestion: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            max_delay_minutes: DEFAULT_MAX_DELAY_MINUTES,
            max_congestion: DEFAULT_MAX_CONGESTION,
        }
    }
}

impl WeatherConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_delay_minutes", self.max_delay_minutes),
            ("max_congestion", self.max_congestion),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeatherConfig {
                    message: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Apply the default weather to every route and finalise the network.
pub fn apply_weather<R: Rng>(raw: RawGraph, rng: &mut R) -> Graph {
    let mut raw = raw;
    perturb(&mut raw, rng, &WeatherConfig::default());
    raw.calm()
}

/// Apply weather with custom bounds and finalise the network.
pub fn apply_weather_with<R: Rng>(
    raw: RawGraph,
    rng: &mut R,
    config: &WeatherConfig,
) -> Result<Graph> {
    config.validate()?;
    let mut raw = raw;
    perturb(&mut raw, rng, config);
    Ok(raw.calm())
}

/// Add one round of noise to every route. Not idempotent: each call compounds.
fn perturb<R: Rng>(raw: &mut RawGraph, rng: &mut R, config: &WeatherConfig) {
    let mut perturbed = 0usize;
    let mut total_delay = 0.0;

    raw.for_each_edge_mut(|_, edge: &mut Edge| {
        let weather_delay = draw(&mut *rng, config.max_delay_minutes);
        edge.cost.duration += weather_delay;
        edge.cost.congestion += draw(&mut *rng, config.max_congestion);
        perturbed += 1;
        total_delay += weather_delay;
    });

    let mean_delay = if perturbed == 0 {
        0.0
    } else {
        total_delay / perturbed as f64
    };
    debug!(
        edges = perturbed,
        mean_delay_min = mean_delay,
        "applied weather to route network"
    );
}

fn draw<R: Rng>(rng: &mut R, max: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        rng.random_range(0.0..=max)
    }
}
