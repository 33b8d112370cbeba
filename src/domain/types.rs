use serde::{Deserialize, Serialize};

/// A 2D waypoint, identified by its index in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Waypoint { x, y }
    }
}

/// A closed tour: a permutation of waypoint indices plus the implicit
/// closing edge from the last index back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub path: Vec<usize>,
    pub length: f64,
}

impl Tour {
    pub fn empty() -> Self {
        Tour {
            path: vec![],
            length: 0.0,
        }
    }
}

/// Everything the solver reads: waypoints and the matrices derived from them.
/// Built once by setup, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub waypoints: Vec<Waypoint>,
    pub distance_matrix: Vec<Vec<f64>>,
    pub heuristic_matrix: Vec<Vec<f64>>,
}

impl ProblemInstance {
    pub fn size(&self) -> usize {
        self.waypoints.len()
    }
}
