use std::fs;

use serde::Deserialize;
use tracing::{debug, info};

// Internal module imports
use crate::distance::matrix::{create_dm, create_heuristic};
use crate::domain::types::{ProblemInstance, Waypoint};

/// Struct to match the input JSON structure
#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<(f64, f64)>,
}

/// Reads a JSON file of the shape `{"nodes": [[x, y], ...]}` into waypoints.
pub fn load_waypoints(path: &str) -> Result<Vec<Waypoint>, Box<dyn std::error::Error>> {
    let file_content = fs::read_to_string(path)?;
    let graph: GraphFile = serde_json::from_str(&file_content)?;

    let waypoints: Vec<Waypoint> = graph
        .nodes
        .into_iter()
        .map(|(x, y)| Waypoint::new(x, y))
        .collect();

    info!("Loaded {} waypoints from {}", waypoints.len(), path);
    Ok(waypoints)
}

/// Build the problem instance: distance matrix plus derived heuristic matrix.
pub fn setup(waypoints: Vec<Waypoint>) -> ProblemInstance {
    info!("Starting setup with {} waypoints", waypoints.len());

    let dm = create_dm(&waypoints);
    print_dist_matrix(&dm);

    let eta = create_heuristic(&dm);

    info!("Setup completed successfully");

    ProblemInstance {
        waypoints,
        distance_matrix: dm,
        heuristic_matrix: eta,
    }
}

// Print distance matrix for debugging
pub fn print_dist_matrix(dist_m: &[Vec<f64>]) {
    debug!("Distance matrix:");
    for row in dist_m {
        debug!("{:?}", row);
    }
}
