//! CSV dataset loading.
//!
//! A dataset is a directory holding two tables:
//!
//! - `airports.csv` with columns `id,name,lat,lon`
//! - `routes.csv` with columns
//!   `from,to,distance_km,avg_duration_min,fuel_cost_l,congestion_factor`
//!
//! Extra columns are ignored and fields are trimmed.

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{build_graph, EdgeCost, EdgeSpec, Node, NodeId, RawGraph};

/// Filename of the airports table.
pub const AIRPORTS_FILENAME: &str = "airports.csv";

/// Filename of the routes table.
pub const ROUTES_FILENAME: &str = "routes.csv";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "SKYROUTE_DATA_DIR";

/// Paths to the two dataset tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub routes: PathBuf,
}

impl DatasetPaths {
    /// Dataset tables inside `dir`, without checking they exist.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
        }
    }

    /// Locate the dataset directory.
    ///
    /// Resolution order: `explicit`, then `$SKYROUTE_DATA_DIR`, then the
    /// platform data directory. Fails if either table is missing.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let dir = match explicit {
            Some(dir) => dir.to_path_buf(),
            None => match env::var_os(DATA_DIR_ENV) {
                Some(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => default_data_dir()?,
            },
        };
        debug!("resolved dataset directory {}", dir.display());

        let paths = Self::in_dir(&dir);
        for path in [&paths.airports, &paths.routes] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(paths)
    }
}

/// Resolve the default dataset directory using platform-specific project
/// directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "skyroute", "skyroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

#[derive(Debug, Deserialize)]
struct AirportRow {
    id: NodeId,
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RouteRow {
    from: NodeId,
    to: NodeId,
    distance_km: f64,
    avg_duration_min: f64,
    fuel_cost_l: f64,
    congestion_factor: f64,
}

/// Parse the airports table.
pub fn read_airports<R: Read>(reader: R) -> Result<Vec<Node>> {
    read_rows::<_, AirportRow>(reader, AIRPORTS_FILENAME).map(|rows| {
        rows.into_iter()
            .map(|row| Node::new(row.id, row.name, row.lat, row.lon))
            .collect()
    })
}

/// Parse the routes table.
pub fn read_routes<R: Read>(reader: R) -> Result<Vec<EdgeSpec>> {
    read_rows::<_, RouteRow>(reader, ROUTES_FILENAME).map(|rows| {
        rows.into_iter()
            .map(|row| {
                EdgeSpec::new(
                    row.from,
                    row.to,
                    EdgeCost::new(
                        row.distance_km,
                        row.avg_duration_min,
                        row.fuel_cost_l,
                        row.congestion_factor,
                    ),
                )
            })
            .collect()
    })
}

fn read_rows<R: Read, T: for<'de> Deserialize<'de>>(reader: R, file: &str) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    let mut row_num: u64 = 1; // header is line 1
    for result in csv_reader.deserialize::<T>() {
        row_num += 1;
        let row = result.map_err(|err| Error::DatasetValidation {
            file: file.to_string(),
            row: row_num,
            message: err.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load both tables and build the (not yet weather-adjusted) network.
pub fn load_network(paths: &DatasetPaths) -> Result<RawGraph> {
    let nodes = read_airports(open(&paths.airports)?)?;
    let edges = read_routes(open(&paths.routes)?)?;
    info!(
        airports = nodes.len(),
        routes = edges.len(),
        "loaded dataset from {}",
        paths.airports.parent().unwrap_or(Path::new(".")).display()
    );
    build_graph(nodes, edges)
}

fn open(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(File::open(path)?)
}
