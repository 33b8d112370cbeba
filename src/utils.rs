use rand::Rng;

/// Sample an index with probability proportional to its weight.
/// Weights must be non-negative. Returns `None` when the total mass is zero,
/// leaving the uniform fallback to the caller.
pub fn roulette_wheel<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut draw = rng.gen::<f64>() * total;
    for (index, weight) in weights.iter().enumerate() {
        draw -= weight;
        if draw <= 0.0 && *weight > 0.0 {
            return Some(index);
        }
    }

    // Rounding can leave a sliver of `draw` after the last positive weight.
    weights.iter().rposition(|w| *w > 0.0)
}
