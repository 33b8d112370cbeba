use itertools::Itertools;

/// Total length of a closed tour: the sum of consecutive edges plus the
/// closing edge back to the start. Paths with fewer than two waypoints
/// have length zero.
pub fn tour_length(path: &[usize], dm: &[Vec<f64>]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }

    let open_length: f64 = path
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| dm[from][to])
        .sum();

    open_length + dm[path[path.len() - 1]][path[0]]
}
