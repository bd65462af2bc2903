//! Moment estimation for reference target distributions.

use crate::error::ScaleError;

/// Compute the population mean and variance of a slice of target values.
///
/// Statistics are intended to be estimated once over a training-set
/// distribution and then reused for many transforms.
///
/// # Arguments
///
/// * `values` - The reference target values, one per training sample.
///
/// # Returns
///
/// `(mean, variance)` on success. Fails with `ScaleError::EmptyInput` for
/// an empty slice and `ScaleError::NonFinite` when NaN or infinite values
/// are present (the count of offending values is carried in the error).
pub fn moments(values: &[f32]) -> Result<(f32, f32), ScaleError> {
    if values.is_empty() {
        return Err(ScaleError::EmptyInput);
    }

    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        return Err(ScaleError::NonFinite(non_finite));
    }

    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f32>() / n;

    Ok((mean, variance))
}
