use serde::Serialize;

use crate::domain::types::{Tour, Waypoint};

/// Running best tour across all ants and iterations.
/// Only replaced by a strictly shorter tour, so its length never regresses.
#[derive(Debug, Clone, Default)]
pub struct BestSolution {
    tour: Option<Tour>,
}

impl BestSolution {
    pub fn new() -> Self {
        BestSolution { tour: None }
    }

    pub fn length(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, |t| t.length)
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Adopt `candidate` if it is strictly shorter than the current best.
    /// Returns whether the best changed.
    pub fn offer(&mut self, candidate: &Tour) -> bool {
        if candidate.length < self.length() {
            self.tour = Some(candidate.clone());
            true
        } else {
            false
        }
    }

    pub fn into_tour(self) -> Tour {
        self.tour.unwrap_or_else(Tour::empty)
    }
}

/// Final result in the output JSON shape: the visited coordinates in tour
/// order plus the total length.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub best_path: Vec<Waypoint>,
    pub length: f64,
}

impl SolveReport {
    pub fn from_tour(tour: &Tour, waypoints: &[Waypoint]) -> Self {
        SolveReport {
            best_path: tour.path.iter().map(|&i| waypoints[i]).collect(),
            length: tour.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_best_has_infinite_length() {
        assert_eq!(BestSolution::new().length(), f64::INFINITY);
    }

    #[test]
    fn offer_replaces_only_on_strict_improvement() {
        let mut best = BestSolution::new();

        let first = Tour {
            path: vec![0, 1, 2],
            length: 30.0,
        };
        assert!(best.offer(&first));
        assert_eq!(best.length(), 30.0);

        let equal = Tour {
            path: vec![2, 1, 0],
            length: 30.0,
        };
        assert!(!best.offer(&equal));
        assert_eq!(best.tour().unwrap().path, vec![0, 1, 2]);

        let worse = Tour {
            path: vec![1, 0, 2],
            length: 31.0,
        };
        assert!(!best.offer(&worse));

        let shorter = Tour {
            path: vec![1, 2, 0],
            length: 29.5,
        };
        assert!(best.offer(&shorter));
        assert_eq!(best.length(), 29.5);
    }

    #[test]
    fn report_maps_indices_to_coordinates() {
        let waypoints = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(3.0, 0.0),
            Waypoint::new(3.0, 4.0),
        ];
        let tour = Tour {
            path: vec![2, 0, 1],
            length: 12.0,
        };

        let report = SolveReport::from_tour(&tour, &waypoints);
        assert_eq!(report.best_path.len(), 3);
        assert_eq!(report.best_path[0], waypoints[2]);
        assert_eq!(report.best_path[1], waypoints[0]);
        assert_eq!(report.length, 12.0);
    }
}
