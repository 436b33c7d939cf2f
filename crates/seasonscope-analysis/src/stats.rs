//! Descriptive statistics with explicit undefined results.
//!
//! Every function returns `None` where the quantity is mathematically
//! undefined (empty input, too few values for the estimator, zero mean)
//! instead of propagating NaN.

use std::cmp::Ordering;

use seasonscope_core::Dispersion;

/// Arithmetic mean, `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Variance with the given estimator.
///
/// `None` when there are not more values than the estimator's delta degrees
/// of freedom (a single value under [`Dispersion::Sample`]).
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::stats::variance;
/// use seasonscope_core::Dispersion;
///
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&v, Dispersion::Population), Some(4.0));
/// assert_eq!(variance(&[3.0], Dispersion::Sample), None);
/// ```
pub fn variance(values: &[f64], dispersion: Dispersion) -> Option<f64> {
    let n = values.len();
    let ddof = dispersion.ddof();
    if n <= ddof {
        return None;
    }
    let m = mean(values)?;
    let squares: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    Some(squares / (n - ddof) as f64)
}

/// Standard deviation with the given estimator.
pub fn std_dev(values: &[f64], dispersion: Dispersion) -> Option<f64> {
    variance(values, dispersion).map(f64::sqrt)
}

/// Coefficient of variation: standard deviation divided by mean.
///
/// `None` when the mean is zero or either quantity is undefined.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::stats::coefficient_of_variation;
/// use seasonscope_core::Dispersion;
///
/// let flat = [10.0, 10.0, 10.0, 10.0];
/// assert_eq!(coefficient_of_variation(&flat, Dispersion::Sample), Some(0.0));
///
/// let zeros = [0.0, 0.0, 0.0, 0.0];
/// assert_eq!(coefficient_of_variation(&zeros, Dispersion::Sample), None);
/// ```
pub fn coefficient_of_variation(values: &[f64], dispersion: Dispersion) -> Option<f64> {
    let m = mean(values)?;
    if m == 0.0 {
        return None;
    }
    Some(std_dev(values, dispersion)? / m)
}

/// Descending order with undefined values last.
///
/// Used with stable sorts so that ties keep their original order.
pub fn cmp_desc_undefined_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
