//! Target value representation.
//!
//! A label payload is either a single scalar or a tensor of floats.
//! `Target` closes that universe in one enum so the scaler can apply
//! elementwise arithmetic without caring which shape it was handed.
//! Tensor storage is an ndarray with dynamic dimensionality.

use ndarray::{Array1, ArrayD};

/// The numeric label field of a data item, scalar or tensor valued.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Scalar(f32),
    Tensor(ArrayD<f32>),
}

impl Target {
    /// Apply `f` to every element, returning a new `Target` of the same shape.
    pub fn mapv<F>(&self, f: F) -> Target
    where
        F: Fn(f32) -> f32,
    {
        match self {
            Target::Scalar(v) => Target::Scalar(f(*v)),
            Target::Tensor(t) => Target::Tensor(t.mapv(|v| f(v))),
        }
    }

    /// Apply `f` to every element in place.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(f32) -> f32,
    {
        match self {
            Target::Scalar(v) => *v = f(*v),
            Target::Tensor(t) => t.mapv_inplace(|v| f(v)),
        }
    }

    /// The scalar payload, if this target is scalar valued.
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Target::Scalar(v) => Some(*v),
            Target::Tensor(_) => None,
        }
    }

    /// The tensor payload, if this target is tensor valued.
    pub fn as_tensor(&self) -> Option<&ArrayD<f32>> {
        match self {
            Target::Scalar(_) => None,
            Target::Tensor(t) => Some(t),
        }
    }
}

impl From<f32> for Target {
    fn from(value: f32) -> Self {
        Target::Scalar(value)
    }
}

impl From<Vec<f32>> for Target {
    fn from(value: Vec<f32>) -> Self {
        Target::Tensor(Array1::from_vec(value).into_dyn())
    }
}

impl From<Array1<f32>> for Target {
    fn from(value: Array1<f32>) -> Self {
        Target::Tensor(value.into_dyn())
    }
}

impl From<ArrayD<f32>> for Target {
    fn from(value: ArrayD<f32>) -> Self {
        Target::Tensor(value)
    }
}
