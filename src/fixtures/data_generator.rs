use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::Waypoint;

/// Generates `count` random waypoints with coordinates in [0, range).
/// Seeded so that fixture runs are reproducible.
pub fn generate_random_waypoints(count: usize, range: f64, seed: u64) -> Vec<Waypoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let waypoints: Vec<Waypoint> = (0..count)
        .map(|_| Waypoint::new(rng.gen::<f64>() * range, rng.gen::<f64>() * range))
        .collect();

    info!("Generated {} random waypoints (seed {})", count, seed);
    waypoints
}
