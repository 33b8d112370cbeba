use aco::config::AcoConfig;
use aco::domain::types::Waypoint;
use aco::fixtures::data_generator::generate_random_waypoints;
use aco::setup::init::setup;
use aco::solver::ant_colony::colony::Colony;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn solve_with_seed(waypoints: Vec<Waypoint>, config: AcoConfig, seed: u64) -> aco::domain::types::Tour {
    let instance = setup(waypoints);
    let rng = ChaCha8Rng::seed_from_u64(seed);
    let mut colony = Colony::new(&instance, config, rng).unwrap();
    colony.solve()
}

#[test]
fn best_tour_is_a_permutation() {
    let config = AcoConfig {
        ants: 8,
        iterations: 15,
        ..AcoConfig::default()
    };
    let best = solve_with_seed(generate_random_waypoints(20, 10.0, 31), config, 5);

    let mut seen = vec![false; 20];
    assert_eq!(best.path.len(), 20);
    for &i in &best.path {
        assert!(!seen[i], "waypoint {} visited twice", i);
        seen[i] = true;
    }
    assert!(seen.iter().all(|&v| v));
}

#[test]
fn identical_seeds_give_identical_results() {
    let config = AcoConfig {
        ants: 6,
        iterations: 20,
        ..AcoConfig::default()
    };
    let waypoints = generate_random_waypoints(16, 10.0, 44);

    let a = solve_with_seed(waypoints.clone(), config.clone(), 123);
    let b = solve_with_seed(waypoints, config, 123);

    assert_eq!(a.path, b.path);
    assert_eq!(a.length, b.length);
}

#[test]
fn no_waypoints_yields_empty_tour() {
    let best = solve_with_seed(vec![], AcoConfig::default(), 1);
    assert!(best.path.is_empty());
    assert_eq!(best.length, 0.0);
}

#[test]
fn single_waypoint_yields_trivial_tour() {
    let best = solve_with_seed(vec![Waypoint::new(4.0, -3.0)], AcoConfig::default(), 1);
    assert_eq!(best.path, vec![0]);
    assert_eq!(best.length, 0.0);
}

#[test]
fn two_waypoints_travel_there_and_back() {
    let waypoints = vec![Waypoint::new(0.0, 0.0), Waypoint::new(5.0, 0.0)];
    let config = AcoConfig {
        ants: 2,
        iterations: 3,
        ..AcoConfig::default()
    };
    let best = solve_with_seed(waypoints, config, 2);
    assert_eq!(best.path.len(), 2);
    assert!((best.length - 10.0).abs() < 1e-9);
}

#[test]
fn converges_to_square_perimeter() {
    // The unique optimal tour of a square visits the corners in perimeter
    // order, total length 40.
    let waypoints = vec![
        Waypoint::new(0.0, 0.0),
        Waypoint::new(10.0, 0.0),
        Waypoint::new(10.0, 10.0),
        Waypoint::new(0.0, 10.0),
    ];
    let config = AcoConfig {
        ants: 10,
        iterations: 50,
        alpha: 1.0,
        beta: 5.0,
        rho: 0.5,
        q: 100.0,
    };
    let best = solve_with_seed(waypoints, config, 77);

    assert!(
        (best.length - 40.0).abs() < 1e-9,
        "expected perimeter tour, got length {}",
        best.length
    );
}
