//! Integration tests for moment estimation and config types.

use labelscale::config::ScalerConfig;
use labelscale::error::ScaleError;
use labelscale::scaler::MeanScaler;
use labelscale::stats::moments;

// ---------------------------------------------------------------------------
// Moment estimation
// ---------------------------------------------------------------------------

#[test]
fn moments_basic() {
    let (mean, variance) = moments(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!((mean - 2.5).abs() < 1e-6, "mean = {}", mean);
    assert!((variance - 1.25).abs() < 1e-6, "variance = {}", variance);
}

#[test]
fn moments_constant_values_have_zero_variance() {
    let (mean, variance) = moments(&[7.0; 12]).unwrap();
    assert!((mean - 7.0).abs() < 1e-6);
    assert_eq!(variance, 0.0);
}

#[test]
fn moments_empty_errors() {
    let result = moments(&[]);
    assert!(matches!(result, Err(ScaleError::EmptyInput)));
}

#[test]
fn moments_counts_non_finite_values() {
    let result = moments(&[1.0, f32::NAN, 3.0, f32::INFINITY]);
    assert!(matches!(result, Err(ScaleError::NonFinite(2))));
}

// ---------------------------------------------------------------------------
// Fitting
// ---------------------------------------------------------------------------

#[test]
fn fit_uses_population_moments() {
    let scaler = MeanScaler::fit(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!((scaler.mean() - 2.5).abs() < 1e-6);
    assert!((scaler.variance() - 1.25).abs() < 1e-6);
    assert_eq!(scaler.epsilon(), MeanScaler::DEFAULT_EPSILON);
}

#[test]
fn fit_with_epsilon_overrides_default() {
    let scaler = MeanScaler::fit_with_epsilon(&[1.0, 2.0], 0.5).unwrap();
    assert_eq!(scaler.epsilon(), 0.5);
}

#[test]
fn fit_on_empty_errors() {
    assert!(MeanScaler::fit(&[]).is_err());
}

#[test]
fn fit_on_constant_targets_still_transforms() {
    // variance 0 means epsilon alone carries the denominator
    let scaler = MeanScaler::fit(&[5.0; 8]).unwrap();
    let scaled = scaler.transform(&labelscale::target::Target::Scalar(5.0));
    assert_eq!(scaled.as_scalar(), Some(0.0));
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_default_values() {
    let cfg = ScalerConfig::default();
    assert_eq!(cfg.mean, 0.0);
    assert_eq!(cfg.variance, 1.0);
    assert_eq!(cfg.epsilon, MeanScaler::DEFAULT_EPSILON);
}

#[test]
fn config_new_uses_default_epsilon() {
    let cfg = ScalerConfig::new(2.0, 4.0);
    assert_eq!(cfg.epsilon, MeanScaler::DEFAULT_EPSILON);
}

#[test]
fn config_round_trips_json() {
    let cfg = ScalerConfig::new(2.5, 1.25);
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: ScalerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn config_epsilon_defaults_when_absent() {
    let cfg: ScalerConfig = serde_json::from_str(r#"{"mean": 2.0, "variance": 4.0}"#).unwrap();
    assert_eq!(cfg.epsilon, MeanScaler::DEFAULT_EPSILON);
}

#[test]
fn config_build_produces_matching_scaler() {
    let cfg = ScalerConfig {
        mean: 2.0,
        variance: 4.0,
        epsilon: 0.0,
    };
    let scaler = cfg.build().unwrap();
    assert_eq!(scaler.mean(), 2.0);
    assert_eq!(scaler.variance(), 4.0);
    assert_eq!(scaler.epsilon(), 0.0);
}

#[test]
fn config_build_rejects_negative_variance() {
    let cfg = ScalerConfig {
        mean: 0.0,
        variance: -1.0,
        epsilon: 1e-7,
    };
    assert!(cfg.build().is_err());
}

#[test]
fn config_build_rejects_non_finite_statistics() {
    let cfg = ScalerConfig {
        mean: f32::NAN,
        variance: 1.0,
        epsilon: 1e-7,
    };
    assert!(cfg.build().is_err());
}
