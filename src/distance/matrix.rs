use tracing::info;

use crate::domain::types::Waypoint;

/// Added to every distance before inversion so coincident waypoints
/// do not divide by zero.
const HEURISTIC_EPSILON: f64 = 1e-6;

/// Create the N×N Euclidean distance matrix for the given waypoints.
/// Symmetric with a zero diagonal; empty input yields an empty matrix.
pub fn create_dm(waypoints: &[Waypoint]) -> Vec<Vec<f64>> {
    let n = waypoints.len();
    info!("Creating distance matrix for {} waypoints", n);

    let mut dm = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            let dx = waypoints[i].x - waypoints[j].x;
            let dy = waypoints[i].y - waypoints[j].y;
            dm[i][j] = dx.hypot(dy);
        }
    }
    dm
}

/// Derive the heuristic matrix η = 1 / (d + ε) from a distance matrix.
pub fn create_heuristic(dm: &[Vec<f64>]) -> Vec<Vec<f64>> {
    dm.iter()
        .map(|row| row.iter().map(|d| 1.0 / (d + HEURISTIC_EPSILON)).collect())
        .collect()
}
