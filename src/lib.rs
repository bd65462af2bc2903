//! labelscale: target-label rescaling for machine-learning data pipelines.
//!
//! This crate provides a mean/variance scaler for numeric target labels,
//! the labeled-item capability it operates through, and the supporting
//! configuration and statistics helpers used by pipeline tooling. The
//! forward transform rescales a label in place on its owning item; the
//! inverse maps model predictions back to label space.
//!
//! The design favors small, testable modules; the transform itself is
//! pure arithmetic and safe to share across threads.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod scaler;
pub mod stats;
pub mod target;
