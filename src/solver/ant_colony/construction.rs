use rand::seq::IteratorRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::AcoConfig;
use crate::domain::types::{ProblemInstance, Tour};
use crate::evaluation::fitness::tour_length;
use crate::utils::roulette_wheel;

/// Build one ant's tour: start at a uniformly random waypoint, then repeatedly
/// draw the next waypoint from the unvisited set with probability proportional
/// to τ^α · η^β. A zero-mass draw falls back to a uniform pick, so
/// construction never deadlocks.
pub fn construct_tour(
    instance: &ProblemInstance,
    tau: &[Vec<f64>],
    config: &AcoConfig,
    rng: &mut ChaCha8Rng,
) -> Tour {
    let n = instance.size();
    if n == 0 {
        return Tour::empty();
    }

    let eta = &instance.heuristic_matrix;

    let start = rng.gen_range(0..n);
    let mut path = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    path.push(start);
    visited[start] = true;

    let mut weights = vec![0.0; n];
    while path.len() < n {
        let curr = path[path.len() - 1];

        for (j, weight) in weights.iter_mut().enumerate() {
            *weight = if visited[j] {
                0.0
            } else {
                tau[curr][j].powf(config.alpha) * eta[curr][j].powf(config.beta)
            };
        }

        let next = match roulette_wheel(&weights, rng) {
            Some(index) => index,
            // All scores underflowed or only degenerate edges remain.
            None => (0..n)
                .filter(|&j| !visited[j])
                .choose(rng)
                .expect("unvisited waypoints remain while the tour is incomplete"),
        };

        path.push(next);
        visited[next] = true;
    }

    let length = tour_length(&path, &instance.distance_matrix);
    Tour { path, length }
}
