use itertools::Itertools;

/// gini coefficient of non-negative values, `Σ_i Σ_j |x_i − x_j| / (2 n Σ x)`,
/// computed over the sorted values as `Σ (2i − n − 1) x_(i) / (n Σ x)`.
///
/// 0 for fewer than two values, for all-equal values and for an all-zero sum.
pub fn gini(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    if sum <= 0.0 || values.iter().all_equal() {
        return 0.0;
    }
    let sorted = values.iter().copied().sorted_by(f64::total_cmp);
    let weighted: f64 = sorted
        .enumerate()
        .map(|(i, x)| (2.0 * (i as f64 + 1.0) - n as f64 - 1.0) * x)
        .sum();
    (weighted / (n as f64 * sum)).max(0.0)
}

/// middle value, or the mean of the two middle values. 0 when empty.
pub fn median(values: &[f64]) -> f64 {
    let sorted = values
        .iter()
        .copied()
        .sorted_by(f64::total_cmp)
        .collect_vec();
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => sorted[n / 2],
        _ => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

/// mean of `(value, weight)` pairs. 0 when the weights sum to 0.
pub fn weighted_mean(pairs: &[(f64, f64)]) -> f64 {
    let total_weight: f64 = pairs.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    pairs.iter().map(|(v, w)| v * w).sum::<f64>() / total_weight
}
