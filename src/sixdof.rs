//! 6-DOF wrapper over a 7-DOF arm environment.
use crate::{error::SixDofError, record::Record, Act, BoxSpace, ContinuousEnv, Env, JointAct, Step};
use anyhow::Result;
use log::{info, trace};

mod config;
pub use config::SixDofEnvConfig;

/// Number of degrees of freedom the wrapper exposes to the agent.
///
/// The wrapped environment must accept actions of `REDUCED_DOF + 1` elements.
pub const REDUCED_DOF: usize = 6;

/// Converts a 7-DOF arm environment into a 6-DOF one by fixing one joint.
///
/// The agent interacts with a 6-dimensional action space; at every step the
/// wrapper inserts `fixed_joint_value` at `fixed_joint_idx` and forwards the
/// resulting 7-element action to the wrapped environment. Observations,
/// rewards, termination flags and step records pass through unchanged.
///
/// The conversion is one-directional. The wrapper never projects 7-element
/// vectors back to 6 elements; `Step::act` of the returned step is the
/// 6-element action the agent supplied.
///
/// An insertion index equal to [`REDUCED_DOF`] appends the fixed value after
/// the last commanded joint.
pub struct SixDofEnv<E> {
    env: E,
    fixed_joint_idx: usize,
    fixed_joint_value: f32,

    /// Wrapped action space with the fixed index removed.
    action_space: BoxSpace,
}

impl<E> SixDofEnv<E>
where
    E: ContinuousEnv<Act = JointAct>,
{
    /// Wraps an existing environment.
    ///
    /// Fails when the wrapped environment's action space is not exactly
    /// `REDUCED_DOF + 1`-dimensional, or when `fixed_joint_idx` exceeds
    /// [`REDUCED_DOF`].
    pub fn new(env: E, fixed_joint_idx: usize, fixed_joint_value: f32) -> Result<Self> {
        let full_space = env.action_space();
        if full_space.dim() != REDUCED_DOF + 1 {
            return Err(SixDofError::InvalidActionSpaceDim {
                expected: REDUCED_DOF + 1,
                got: full_space.dim(),
            }
            .into());
        }
        if fixed_joint_idx > REDUCED_DOF {
            return Err(SixDofError::FixedJointIndexOutOfRange {
                index: fixed_joint_idx,
                dof: REDUCED_DOF,
            }
            .into());
        }

        // Valid insertion positions [0, 6] are all valid deletion positions
        // in the 7-element bound vectors.
        let action_space = full_space.without_index(fixed_joint_idx)?;

        info!(
            "Converted {}-DOF arm to {}-DOF",
            REDUCED_DOF + 1,
            REDUCED_DOF
        );
        info!(
            "Fixed joint {} at value {}",
            fixed_joint_idx, fixed_joint_value
        );
        info!("New action space dimension: {}", action_space.dim());

        Ok(Self {
            env,
            fixed_joint_idx,
            fixed_joint_value,
            action_space,
        })
    }

    /// The wrapped environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Index at which the fixed joint value is inserted.
    pub fn fixed_joint_idx(&self) -> usize {
        self.fixed_joint_idx
    }

    /// Value the fixed joint is held at.
    pub fn fixed_joint_value(&self) -> f32 {
        self.fixed_joint_value
    }

    /// Expands a 6-element action to the 7-element action of the wrapped
    /// environment.
    ///
    /// Fails when the given action does not have exactly [`REDUCED_DOF`]
    /// elements.
    fn expand(&self, a: &JointAct) -> Result<JointAct> {
        if a.len() != REDUCED_DOF {
            return Err(SixDofError::InvalidActionLen {
                expected: REDUCED_DOF,
                got: a.len(),
            }
            .into());
        }
        let a = a.as_slice();
        let mut full = Vec::with_capacity(REDUCED_DOF + 1);
        full.extend_from_slice(&a[..self.fixed_joint_idx]);
        full.push(self.fixed_joint_value);
        full.extend_from_slice(&a[self.fixed_joint_idx..]);
        Ok(JointAct::from(full))
    }
}

impl<E> Env for SixDofEnv<E>
where
    E: ContinuousEnv<Act = JointAct>,
{
    type Config = SixDofEnvConfig<E>;
    type Obs = E::Obs;
    type Act = JointAct;
    type Info = E::Info;

    /// Builds the wrapped environment with the given seed, then wraps it.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.inner, seed)?;
        Self::new(env, config.fixed_joint_idx, config.fixed_joint_value)
    }

    /// Runs a step of the wrapped environment's dynamics with the expanded
    /// 7-element action.
    ///
    /// The returned [`Step`] is the wrapped environment's step, except that
    /// its `act` field is the 6-element action given by the caller.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        trace!("SixDofEnv::step()");

        let full = self.expand(a)?;
        let (step, record) = self.env.step(&full)?;
        let step = Step::new(
            step.obs,
            a.clone(),
            step.reward,
            step.is_terminated,
            step.is_truncated,
            step.info,
            step.init_obs,
        );
        Ok((step, record))
    }

    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        let (step, record) = self.step(a)?;
        let step = if step.is_done() {
            let init_obs = self.reset(None)?;
            Step { init_obs, ..step }
        } else {
            step
        };
        Ok((step, record))
    }

    /// Resets the wrapped environment with no transformation.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        trace!("SixDofEnv::reset()");
        self.env.reset(is_done)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.env.reset_with_index(ix)
    }
}

impl<E> ContinuousEnv for SixDofEnv<E>
where
    E: ContinuousEnv<Act = JointAct>,
{
    /// The wrapped action space with the fixed index removed.
    fn action_space(&self) -> BoxSpace {
        self.action_space.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{SixDofEnv, SixDofEnvConfig, REDUCED_DOF};
    use crate::{
        dummy::{DummyArmConfig, DummyArmEnv},
        error::SixDofError,
        ContinuousEnv, Env, JointAct,
    };
    use ndarray::array;

    fn build(config: SixDofEnvConfig<DummyArmEnv>) -> SixDofEnv<DummyArmEnv> {
        SixDofEnv::build(&config, 0).unwrap()
    }

    #[test]
    fn test_inserts_fixed_joint_at_default_index() {
        let mut env = build(SixDofEnvConfig::default());
        env.reset(None).unwrap();

        let a = JointAct::from(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let (step, _) = env.step(&a).unwrap();

        let forwarded = env.env().last_act().unwrap();
        assert_eq!(forwarded, &array![0.1, 0.2, 0.0, 0.3, 0.4, 0.5, 0.6]);

        // The step carries the caller's 6-element action, not the expanded one.
        assert_eq!(step.act, a);
    }

    #[test]
    fn test_inserts_custom_fixed_joint() {
        let config = SixDofEnvConfig::default()
            .fixed_joint_idx(3)
            .fixed_joint_value(0.5);
        let mut env = build(config);
        env.reset(None).unwrap();

        let a = JointAct::from(vec![1., 2., 3., 4., 5., 6.]);
        env.step(&a).unwrap();

        let forwarded = env.env().last_act().unwrap();
        assert_eq!(forwarded, &array![1., 2., 3., 0.5, 4., 5., 6.]);
    }

    #[test]
    fn test_boundary_indices() {
        let mut env = build(SixDofEnvConfig::default().fixed_joint_idx(0).fixed_joint_value(9.));
        env.reset(None).unwrap();
        env.step(&JointAct::from(vec![1., 2., 3., 4., 5., 6.])).unwrap();
        assert_eq!(
            env.env().last_act().unwrap(),
            &array![9., 1., 2., 3., 4., 5., 6.]
        );

        let mut env = build(
            SixDofEnvConfig::default()
                .fixed_joint_idx(REDUCED_DOF)
                .fixed_joint_value(9.),
        );
        env.reset(None).unwrap();
        env.step(&JointAct::from(vec![1., 2., 3., 4., 5., 6.])).unwrap();
        assert_eq!(
            env.env().last_act().unwrap(),
            &array![1., 2., 3., 4., 5., 6., 9.]
        );
    }

    #[test]
    fn test_expansion_is_invertible() {
        let fixed_joint_idx = 4;
        let mut env = build(SixDofEnvConfig::default().fixed_joint_idx(fixed_joint_idx));
        env.reset(None).unwrap();

        let a = vec![0.7, -0.3, 0.1, 0.9, -0.5, 0.2];
        env.step(&JointAct::from(a.clone())).unwrap();

        // Removing the fixed index from the forwarded action reproduces the input.
        let forwarded = env.env().last_act().unwrap();
        let recovered: Vec<f32> = forwarded
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != fixed_joint_idx)
            .map(|(_, x)| *x)
            .collect();
        assert_eq!(recovered, a);
    }

    #[test]
    fn test_rejects_wrong_action_len() {
        let mut env = build(SixDofEnvConfig::default());
        env.reset(None).unwrap();

        for len in [5, 7] {
            let err = env
                .step(&JointAct::from(vec![0.0; len]))
                .err()
                .expect("wrong action length must be rejected");
            match err.downcast_ref::<SixDofError>() {
                Some(SixDofError::InvalidActionLen { expected: 6, got }) => {
                    assert_eq!(*got, len)
                }
                _ => panic!("unexpected error: {}", err),
            }
        }
    }

    #[test]
    fn test_action_space_is_reduced() {
        let env = build(SixDofEnvConfig::default());
        let full_space = env.env().action_space();
        let space = env.action_space();

        assert_eq!(space.dim(), REDUCED_DOF);
        assert_eq!(space.dim(), full_space.dim() - 1);
        assert_eq!(space, full_space.without_index(2).unwrap());
    }

    #[test]
    fn test_rejects_wrong_underlying_dof() {
        let config = DummyArmConfig::default().n_joints(8);
        let env = DummyArmEnv::build(&config, 0).unwrap();

        let err = SixDofEnv::new(env, 2, 0.0)
            .err()
            .expect("an 8-DOF arm must be rejected");
        match err.downcast_ref::<SixDofError>() {
            Some(SixDofError::InvalidActionSpaceDim { expected: 7, got: 8 }) => {}
            _ => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let env = DummyArmEnv::build(&DummyArmConfig::default(), 0).unwrap();

        let err = SixDofEnv::new(env, 7, 0.0)
            .err()
            .expect("index 7 must be rejected");
        match err.downcast_ref::<SixDofError>() {
            Some(SixDofError::FixedJointIndexOutOfRange { index: 7, dof: 6 }) => {}
            _ => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn test_reset_passes_through() {
        let mut wrapped = build(SixDofEnvConfig::default());
        let mut direct = DummyArmEnv::build(&DummyArmConfig::default(), 0).unwrap();

        assert_eq!(wrapped.reset(None).unwrap(), direct.reset(None).unwrap());
        assert_eq!(
            wrapped.reset_with_index(3).unwrap(),
            direct.reset_with_index(3).unwrap()
        );
    }

    #[test]
    fn test_step_matches_direct_expanded_step() {
        let mut wrapped = build(SixDofEnvConfig::default());
        let mut direct = DummyArmEnv::build(&DummyArmConfig::default(), 0).unwrap();
        wrapped.reset(None).unwrap();
        direct.reset(None).unwrap();

        let a = JointAct::from(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let a_full = JointAct::from(vec![0.1, 0.2, 0.0, 0.3, 0.4, 0.5, 0.6]);
        let (step, _) = wrapped.step(&a).unwrap();
        let (step_direct, _) = direct.step(&a_full).unwrap();

        assert_eq!(step.obs, step_direct.obs);
        assert_eq!(step.reward, step_direct.reward);
        assert_eq!(step.is_terminated, step_direct.is_terminated);
        assert_eq!(step.is_truncated, step_direct.is_truncated);
    }
}
