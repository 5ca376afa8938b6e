//! Small numeric primitives shared by the aggregation modules.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator).
///
/// Returns 0.0 for fewer than two values, so threshold comparisons on
/// tiny subsets simply never fire.
pub fn stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Percentile by linear interpolation between order statistics.
///
/// The rank of the q-th percentile is `q/100 * (n - 1)`; fractional ranks
/// interpolate between the two neighboring sorted values. Returns 0.0 for
/// an empty slice.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Standard deviation of the first differences of a sequence.
///
/// Used as a discrete-gradient irregularity measure on pressure series.
pub fn diff_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    stddev(&diffs)
}

/// Round to two decimal places, the precision used in response payloads.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentiles_interpolate_linearly() {
        let values: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        assert!((percentile(&values, 10.0) - 10.9).abs() < 1e-9);
        assert!((percentile(&values, 50.0) - 50.5).abs() < 1e-9);
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 100.0), 100.0);
    }

    #[test]
    fn stddev_is_sample_stddev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Sample variance of this classic series is 32/7.
        assert!((stddev(&values) - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
        assert_eq!(stddev(&[5.0]), 0.0);
    }

    #[test]
    fn diff_stddev_measures_step_irregularity() {
        // Constant steps have zero diff spread.
        assert_eq!(diff_stddev(&[0.0, 10.0, 20.0, 30.0]), 0.0);
        assert!(diff_stddev(&[0.0, 2000.0, 0.0, 2000.0]) > 100.0);
    }

    #[test]
    fn empty_inputs_are_neutral() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(stddev(&[]), 0.0);
        assert_eq!(percentile(&[], 50.0), 0.0);
    }
}
