use itertools::Itertools;

use crate::domain::types::Tour;

/// Initial pheromone level on every edge.
const INITIAL_PHEROMONE: f64 = 1.0;

pub fn init_pheromone(n: usize) -> Vec<Vec<f64>> {
    vec![vec![INITIAL_PHEROMONE; n]; n]
}

/// Decay every entry by the evaporation rate. rho is validated to [0, 1],
/// so entries never go negative.
pub fn evaporate(tau: &mut [Vec<f64>], rho: f64) {
    for row in tau.iter_mut() {
        for entry in row.iter_mut() {
            *entry *= 1.0 - rho;
        }
    }
}

/// Reinforce every edge of every tour with Q / L, closing edge included.
/// Deposits are mirrored across the diagonal: distances are symmetric here,
/// so edge (i, j) and (j, i) are the same undirected edge.
pub fn deposit(tau: &mut [Vec<f64>], tours: &[Tour], q: f64) {
    for tour in tours {
        if tour.path.len() < 2 || tour.length <= 0.0 {
            continue;
        }
        let amount = q / tour.length;

        let closing = (
            &tour.path[tour.path.len() - 1],
            &tour.path[0],
        );
        for (&from, &to) in tour.path.iter().tuple_windows().chain(Some(closing)) {
            tau[from][to] += amount;
            tau[to][from] += amount;
        }
    }
}
