//! Environment.
use super::{Act, Info, Obs, Step};
use crate::{record::Record, BoxSpace};
use anyhow::Result;

/// Represents an environment, typically an MDP.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [self::Step] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    ///
    /// Fails when the given action is rejected by input validation.
    /// Failures of the environment's own dynamics propagate unchanged.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Resets the environment if `is_done[0] == 1` or `is_done.is_none()`.
    ///
    /// Old versions of the library supports vectorized environments and `is_done` was
    /// used to reset a part of the vectorized environments. Currently, vectorized
    /// environment is not supported and `is_done.len()` is expected to be 1.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs>;

    /// Performes an environment step and reset the environment if an episode ends.
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Resets the environment with a given index.
    ///
    /// The index is used in an arbitrary way. For example, it can be used as a random
    /// seed, which is useful when evaluating a trained agent.
    /// This method does not support vectorized environments.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}

/// An environment with a bounded continuous action space.
///
/// Exposes the action-space descriptor that environment wrappers such as
/// [`SixDofEnv`](crate::SixDofEnv) need to validate and reshape actions.
pub trait ContinuousEnv: Env {
    /// Returns the action space of the environment.
    fn action_space(&self) -> BoxSpace;
}
