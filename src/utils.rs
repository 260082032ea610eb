/// Mean of a set of probe totals.
///
/// An empty set has mean 0.
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
pub(crate) fn mean(samples: &[u64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: u64 = samples.iter().sum();
    sum as f64 / samples.len() as f64
}

/// Sample standard deviation (n − 1 denominator) of a set of probe totals.
///
/// Fewer than two samples have no spread, reported as 0.
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
pub(crate) fn std_deviation(samples: &[u64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let average = mean(samples);
    let squared_error: f64 =
        samples.iter().map(|&sample| (sample as f64 - average).powi(2)).sum();
    (squared_error / (samples.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_mean() {
        let samples = [2, 4, 4, 4, 5, 5, 7, 9];
        assert_eq!(mean(&samples), 5.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_std_deviation() {
        let samples = [2, 4, 4, 4, 5, 5, 7, 9];
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((std_deviation(&samples) - expected).abs() < 1e-12);

        assert_eq!(std_deviation(&[]), 0.0);
        assert_eq!(std_deviation(&[5]), 0.0);
    }
}
