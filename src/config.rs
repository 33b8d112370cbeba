use std::error::Error;

pub mod constant {
    pub(crate) const WAYPOINT_COUNT: usize = 10;
    pub(crate) const COORD_RANGE: f64 = 10.0;
    pub(crate) const SEED: u64 = 64;
    pub(crate) const CONVERGENCE_CSV_PATH: &str = "convergence.csv";
}

/// Hyperparameters of the colony. Defaults match the documented CLI defaults.
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of ants per iteration
    pub ants: usize,
    /// Number of iterations
    pub iterations: usize,
    /// Pheromone importance
    pub alpha: f64,
    /// Heuristic importance
    pub beta: f64,
    /// Pheromone evaporation rate, in [0, 1]
    pub rho: f64,
    /// Pheromone deposit factor
    pub q: f64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        AcoConfig {
            ants: 20,
            iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            q: 100.0,
        }
    }
}

impl AcoConfig {
    /// Check every hyperparameter against its documented range.
    /// Called before any iteration runs; invalid configs never reach the loop.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.ants == 0 {
            return Err("ants must be a positive integer".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be a positive integer".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be a non-negative real, got {}", self.alpha).into());
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be a non-negative real, got {}", self.beta).into());
        }
        if !self.rho.is_finite() || !(0.0..=1.0).contains(&self.rho) {
            return Err(format!("rho must lie in [0, 1], got {}", self.rho).into());
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(format!("Q must be a positive real, got {}", self.q).into());
        }
        Ok(())
    }
}
