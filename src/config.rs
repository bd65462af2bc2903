use serde::{Deserialize, Serialize};

use crate::scaler::MeanScaler;

/// Serializable scaler parameters.
///
/// Statistics are typically estimated once over a training set and carried
/// alongside a trained model; this struct is the round-trippable form.
/// `epsilon` falls back to [`MeanScaler::DEFAULT_EPSILON`] when absent
/// from the serialized representation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScalerConfig {
    pub mean: f32,
    pub variance: f32,
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
}

fn default_epsilon() -> f32 {
    MeanScaler::DEFAULT_EPSILON
}

impl ScalerConfig {
    pub fn new(mean: f32, variance: f32) -> Self {
        Self {
            mean,
            variance,
            epsilon: default_epsilon(),
        }
    }

    /// Build a [`MeanScaler`] after checking the statistics are usable.
    ///
    /// Unlike [`MeanScaler::new`], which accepts whatever it is given,
    /// this path rejects non-finite values and negative variance so that
    /// parameters deserialized from the outside fail loudly.
    pub fn build(&self) -> anyhow::Result<MeanScaler> {
        if !self.mean.is_finite() || !self.variance.is_finite() || !self.epsilon.is_finite() {
            anyhow::bail!(
                "Scaler statistics must be finite: mean={}, variance={}, epsilon={}",
                self.mean,
                self.variance,
                self.epsilon
            );
        }
        if self.variance < 0.0 {
            anyhow::bail!("Variance must be non-negative, got {}", self.variance);
        }

        Ok(MeanScaler::with_epsilon(
            self.mean,
            self.variance,
            self.epsilon,
        ))
    }
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
            epsilon: default_epsilon(),
        }
    }
}
