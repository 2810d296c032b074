//! Robust statistics shared by the detector and display scaling.

use ordered_float::OrderedFloat;

use crate::error::{ViewerError, ViewerResult};

/// Makes the median absolute deviation a consistent estimator of the standard
/// deviation under Gaussian noise.
pub const MAD_TO_SIGMA: f64 = 1.4826;

/// Last-resort scale when both the MAD and the standard deviation vanish.
pub const SCALE_EPSILON: f64 = 1e-6;

/// Median of `values`; even lengths average the two central elements.
pub fn median(values: &[f64]) -> ViewerResult<f64> {
    if values.is_empty() {
        return Err(ViewerError::EmptyInput);
    }
    let mut sorted: Vec<OrderedFloat<f64>> = values.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid].0)
    } else {
        Ok(0.5 * (sorted[mid - 1].0 + sorted[mid].0))
    }
}

/// Sample standard deviation with an `n - 1` denominator (floored at one).
pub fn sample_std_dev(values: &[f64]) -> ViewerResult<f64> {
    if values.is_empty() {
        return Err(ViewerError::EmptyInput);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Ok((sum_sq / (n - 1.0).max(1.0)).sqrt())
}

/// Scaled median absolute deviation with fallbacks.
///
/// Degenerate input (zero or non-finite MAD) falls back to the sample standard
/// deviation, and then to [`SCALE_EPSILON`], so the result is always a usable
/// positive divisor.
pub fn robust_scale(values: &[f64]) -> ViewerResult<f64> {
    let center = median(values)?;
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    let mad = median(&deviations)? * MAD_TO_SIGMA;
    if mad.is_finite() && mad > 0.0 {
        return Ok(mad);
    }

    let std = sample_std_dev(values)?;
    if std.is_finite() && std > 0.0 {
        return Ok(std);
    }
    Ok(SCALE_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::{MAD_TO_SIGMA, SCALE_EPSILON, median, robust_scale};
    use crate::error::ViewerError;

    #[test]
    fn median_of_even_length_averages_center_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).expect("median"), 2.5);
        assert_eq!(median(&[5.0, 1.0, 3.0]).expect("median"), 3.0);
    }

    #[test]
    fn median_of_empty_input_fails() {
        assert!(matches!(median(&[]), Err(ViewerError::EmptyInput)));
    }

    #[test]
    fn robust_scale_ignores_single_outlier() {
        let values = [1.0, 2.0, 3.0, 4.0, 1000.0];
        let scale = robust_scale(&values).expect("scale");
        assert!((scale - 1.0 * MAD_TO_SIGMA).abs() <= 1e-12);
    }

    #[test]
    fn robust_scale_falls_back_to_std_then_epsilon() {
        // MAD is zero because most samples agree; std is not.
        let values = [1.0, 1.0, 1.0, 1.0, 3.0];
        let scale = robust_scale(&values).expect("scale");
        assert!((scale - 0.8f64.sqrt()).abs() <= 1e-12);

        let flat = [2.0; 8];
        assert_eq!(robust_scale(&flat).expect("scale"), SCALE_EPSILON);
    }
}
