//! Bounded continuous action space.
use crate::error::SixDofError;
use anyhow::Result;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A bounded continuous space, the set of vectors `v` with
/// `low[i] <= v[i] <= high[i]` for all `i`.
///
/// This is the action-space descriptor reported by environments implementing
/// [`ContinuousEnv`](crate::ContinuousEnv). For the arm environments in this
/// crate every element of the space is a commanded joint delta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    low: Array1<f32>,
    high: Array1<f32>,
}

impl BoxSpace {
    /// Creates a space from per-element bounds.
    ///
    /// Fails when the bound vectors have different lengths.
    pub fn new(low: Array1<f32>, high: Array1<f32>) -> Result<Self> {
        if low.len() != high.len() {
            return Err(SixDofError::MismatchedBounds {
                low: low.len(),
                high: high.len(),
            }
            .into());
        }
        Ok(Self { low, high })
    }

    /// Creates a space of `dim` elements, all sharing the same bounds.
    pub fn uniform(dim: usize, low: f32, high: f32) -> Self {
        Self {
            low: Array1::from_elem(dim, low),
            high: Array1::from_elem(dim, high),
        }
    }

    /// The number of elements of the space.
    pub fn dim(&self) -> usize {
        self.low.len()
    }

    /// Lower bounds.
    pub fn low(&self) -> &Array1<f32> {
        &self.low
    }

    /// Upper bounds.
    pub fn high(&self) -> &Array1<f32> {
        &self.high
    }

    /// Returns `true` if `v` has the right length and lies within the bounds.
    pub fn contains(&self, v: &[f32]) -> bool {
        v.len() == self.dim()
            && v.iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(x, (l, h))| l <= x && x <= h)
    }

    /// Returns the space with element `ix` removed from both bound vectors.
    ///
    /// Fails when `ix` is not an element of this space.
    pub fn without_index(&self, ix: usize) -> Result<Self> {
        if ix >= self.dim() {
            return Err(SixDofError::FixedJointIndexOutOfRange {
                index: ix,
                dof: self.dim(),
            }
            .into());
        }
        let delete = |a: &Array1<f32>| {
            a.iter()
                .enumerate()
                .filter(|(i, _)| *i != ix)
                .map(|(_, x)| *x)
                .collect::<Array1<f32>>()
        };
        Ok(Self {
            low: delete(&self.low),
            high: delete(&self.high),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BoxSpace;
    use ndarray::array;

    #[test]
    fn test_without_index() {
        let space = BoxSpace::new(array![-1., -2., -3.], array![1., 2., 3.]).unwrap();
        let reduced = space.without_index(1).unwrap();
        assert_eq!(reduced.dim(), 2);
        assert_eq!(reduced.low(), &array![-1., -3.]);
        assert_eq!(reduced.high(), &array![1., 3.]);
        assert!(space.without_index(3).is_err());
    }

    #[test]
    fn test_contains() {
        let space = BoxSpace::uniform(3, -1.0, 1.0);
        assert!(space.contains(&[0.0, -1.0, 1.0]));
        assert!(!space.contains(&[0.0, -1.5, 0.0]));
        assert!(!space.contains(&[0.0, 0.0]));
    }

    #[test]
    fn test_mismatched_bounds() {
        assert!(BoxSpace::new(array![-1., -1.], array![1.]).is_err());
    }
}
