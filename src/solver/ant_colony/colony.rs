use std::error::Error;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, span, Level};

use crate::config::AcoConfig;
use crate::domain::solution::BestSolution;
use crate::domain::types::{ProblemInstance, Tour};
use crate::solver::ant_colony::construction::construct_tour;
use crate::solver::ant_colony::pheromone::{deposit, evaporate, init_pheromone};

/// The colony: owns the pheromone matrix and the running best, reads the
/// distance and heuristic matrices from the problem instance.
pub struct Colony<'a> {
    instance: &'a ProblemInstance,
    config: AcoConfig,
    pheromone: Vec<Vec<f64>>,
    rng: ChaCha8Rng,
    best: BestSolution,
    best_updates: Vec<(usize, f64)>,
}

impl<'a> Colony<'a> {
    /// Validates the hyperparameters up front; an invalid config never
    /// reaches the iteration loop.
    pub fn new(
        instance: &'a ProblemInstance,
        config: AcoConfig,
        rng: ChaCha8Rng,
    ) -> Result<Self, Box<dyn Error>> {
        config.validate()?;

        Ok(Colony {
            pheromone: init_pheromone(instance.size()),
            instance,
            config,
            rng,
            best: BestSolution::new(),
            best_updates: vec![],
        })
    }

    /// Run the construct/update loop for the configured number of iterations
    /// and return the best tour observed.
    pub fn solve(&mut self) -> Tour {
        let n = self.instance.size();
        if n == 0 {
            info!("No waypoints; returning empty tour");
            return Tour::empty();
        }
        if n == 1 {
            return Tour {
                path: vec![0],
                length: 0.0,
            };
        }

        for iteration in 1..=self.config.iterations {
            let iter_span = span!(Level::DEBUG, "iteration", iter = iteration);
            let _iter_guard = iter_span.enter();

            let tours = self.construction_phase();

            for tour in &tours {
                if self.best.offer(tour) {
                    self.best_updates.push((iteration, tour.length));
                    info!(
                        "New best at iteration {}: length = {:.2}",
                        iteration, tour.length
                    );
                }
            }

            self.update_phase(&tours);
            debug!(
                "Iteration {} done, best so far = {:.2}",
                iteration,
                self.best.length()
            );
        }

        self.best.clone().into_tour()
    }

    /// Every ant builds a private tour against the same pheromone snapshot.
    /// Per-ant RNGs are seeded from the master RNG before the parallel step,
    /// so results do not depend on thread scheduling. The `collect` is the
    /// barrier between construction and the update phase.
    fn construction_phase(&mut self) -> Vec<Tour> {
        let seeds: Vec<u64> = (0..self.config.ants).map(|_| self.rng.gen()).collect();

        let instance = self.instance;
        let tau = &self.pheromone;
        let config = &self.config;

        seeds
            .into_par_iter()
            .map(|seed| {
                let mut ant_rng = ChaCha8Rng::seed_from_u64(seed);
                construct_tour(instance, tau, config, &mut ant_rng)
            })
            .collect()
    }

    /// Single-threaded: evaporate globally, then deposit along every tour.
    fn update_phase(&mut self, tours: &[Tour]) {
        evaporate(&mut self.pheromone, self.config.rho);
        deposit(&mut self.pheromone, tours, self.config.q);
    }

    /// Improvement history as (iteration, new best length) pairs.
    pub fn best_updates(&self) -> &[(usize, f64)] {
        &self.best_updates
    }

    pub fn pheromone(&self) -> &[Vec<f64>] {
        &self.pheromone
    }
}
