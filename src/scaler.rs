//! Mean/variance rescaling of target labels.
//!
//! `MeanScaler` standardizes the target field of a labeled item against
//! precomputed distribution statistics, more or less the way a
//! `StandardScaler` would, and implements the inverse so model
//! predictions can be mapped back to real label values. The parameters
//! are fixed at construction; both directions are pure arithmetic.

use rayon::prelude::*;

use crate::data_handling::LabeledItem;
use crate::error::ScaleError;
use crate::stats;
use crate::target::Target;

/// Rescales target labels using a stored mean and variance.
///
/// The forward direction computes `(target - mean) / (variance + epsilon)`
/// elementwise; the inverse computes `(prediction * variance) + mean`.
/// Epsilon enters the denominator only in the forward direction, so the
/// round trip is exact only when epsilon is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeanScaler {
    mean: f32,
    variance: f32,
    epsilon: f32,
}

impl MeanScaler {
    /// Denominator stabilizer used when no explicit epsilon is supplied.
    pub const DEFAULT_EPSILON: f32 = 1e-7;

    /// Create a scaler from externally supplied statistics.
    ///
    /// No validation is performed; the caller is responsible for supplying
    /// sensible values.
    pub fn new(mean: f32, variance: f32) -> Self {
        Self::with_epsilon(mean, variance, Self::DEFAULT_EPSILON)
    }

    /// Create a scaler with an explicit epsilon.
    pub fn with_epsilon(mean: f32, variance: f32, epsilon: f32) -> Self {
        Self {
            mean,
            variance,
            epsilon,
        }
    }

    /// Estimate statistics from a reference distribution and build a scaler.
    ///
    /// # Arguments
    ///
    /// * `values` - Target values of the reference (training) set.
    ///
    /// # Returns
    ///
    /// A scaler with the fitted mean and population variance, or a
    /// `ScaleError` when the slice is empty or contains non-finite values.
    pub fn fit(values: &[f32]) -> Result<Self, ScaleError> {
        Self::fit_with_epsilon(values, Self::DEFAULT_EPSILON)
    }

    /// Like [`MeanScaler::fit`] but with an explicit epsilon.
    pub fn fit_with_epsilon(values: &[f32], epsilon: f32) -> Result<Self, ScaleError> {
        let (mean, variance) = stats::moments(values)?;

        if variance == 0.0 {
            log::warn!(
                "Fitted variance is zero; epsilon {} alone carries the denominator.",
                epsilon
            );
        }
        log::debug!(
            "Fitted scaler over {} values: mean={}, variance={}",
            values.len(),
            mean,
            variance
        );

        Ok(Self::with_epsilon(mean, variance, epsilon))
    }

    pub fn mean(&self) -> f32 {
        self.mean
    }

    pub fn variance(&self) -> f32 {
        self.variance
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Rescale the item's target in place and return the same item.
    ///
    /// Reads the target, computes `(target - mean) / (variance + epsilon)`
    /// elementwise, overwrites the target field, and hands the reference
    /// back so calls can be chained inside a pipeline stage.
    pub fn apply<'a, I>(&self, item: &'a mut I) -> &'a mut I
    where
        I: LabeledItem,
    {
        let rescaled = self.transform(item.target());
        item.set_target(rescaled);
        item
    }

    /// The forward transform on a bare target value.
    pub fn transform(&self, target: &Target) -> Target {
        let denominator = self.variance + self.epsilon;
        let mean = self.mean;
        target.mapv(|t| (t - mean) / denominator)
    }

    /// Map predictions back to label space.
    ///
    /// Computes `(prediction * variance) + mean` elementwise into a new
    /// value; the input is left untouched. Epsilon is not applied here, so
    /// inverting a forward transform recovers the original only up to an
    /// error of `|x - mean| * epsilon / (variance + epsilon)`.
    pub fn invert(&self, predictions: &Target) -> Target {
        let variance = self.variance;
        let mean = self.mean;
        predictions.mapv(|p| p * variance + mean)
    }

    /// Rescale a batch of items in parallel.
    ///
    /// Each item only touches its own target and the scaler parameters are
    /// immutable, so the batch is embarrassingly parallel.
    pub fn apply_all<I>(&self, items: &mut [I])
    where
        I: LabeledItem + Send,
    {
        items.par_iter_mut().for_each(|item| {
            self.apply(item);
        });
    }
}
