//! Continuous joint action.
use crate::Act;
use ndarray::{Array1, ArrayD};

/// A continuous action, one element per commanded joint.
#[derive(Clone, Debug, PartialEq)]
pub struct JointAct(Array1<f32>);

impl JointAct {
    /// Creates an action from joint commands.
    pub fn new(a: Array1<f32>) -> Self {
        Self(a)
    }

    /// Joint commands as an array.
    pub fn as_array(&self) -> &Array1<f32> {
        &self.0
    }

    /// Joint commands as a slice.
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice().expect("JointAct is contiguous")
    }
}

impl Act for JointAct {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<f32>> for JointAct {
    fn from(v: Vec<f32>) -> Self {
        Self(Array1::from(v))
    }
}

impl From<JointAct> for ArrayD<f32> {
    fn from(value: JointAct) -> Self {
        value.0.into_dyn()
    }
}
