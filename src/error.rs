//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum SixDofError {
    /// The wrapped environment's action space has the wrong dimensionality.
    #[error("expected an action space of dimension {expected}, got {got}")]
    InvalidActionSpaceDim {
        /// Required dimensionality of the wrapped action space.
        expected: usize,
        /// Dimensionality actually reported by the wrapped environment.
        got: usize,
    },

    /// The fixed joint index does not fit the exposed action space.
    #[error("fixed joint index {index} is out of range for {dof} degrees of freedom")]
    FixedJointIndexOutOfRange {
        /// The configured insertion index.
        index: usize,
        /// The exposed (reduced) number of degrees of freedom.
        dof: usize,
    },

    /// An action with the wrong number of elements was given to `step`.
    #[error("expected an action of {expected} elements, got {got}")]
    InvalidActionLen {
        /// Number of elements the environment accepts.
        expected: usize,
        /// Number of elements in the rejected action.
        got: usize,
    },

    /// Lower and upper bounds of a box space have different lengths.
    #[error("mismatched bound lengths: low has {low} elements, high has {high}")]
    MismatchedBounds {
        /// Length of the lower bound vector.
        low: usize,
        /// Length of the upper bound vector.
        high: usize,
    },

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
