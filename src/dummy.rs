//! A deterministic arm environment, used for tests.
//!
//! [`DummyArmEnv`] is a stand-in for a simulated 7-DOF arm: each joint is an
//! integrator driven by the commanded delta, the achieved goal is the first
//! three joint values, and the reward is the negative distance to a fixed
//! desired goal. It retains the last action it executed so tests can assert
//! what a wrapper actually forwarded.
use crate::{
    error::SixDofError,
    record::{Record, RecordValue},
    Act, BoxSpace, ContinuousEnv, Env, GoalObs, JointAct, Obs, Step,
};
use anyhow::Result;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Integration step of the joint integrators.
const DT: f32 = 0.05;

/// Distance below which an episode terminates.
const GOAL_EPS: f32 = 0.05;

/// Configuration of [`DummyArmEnv`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DummyArmConfig {
    /// Number of joints of the arm.
    pub n_joints: usize,

    /// Goal position the arm is asked to reach.
    pub desired_goal: Vec<f32>,

    /// Episodes are truncated after this number of steps.
    pub max_steps: Option<usize>,
}

impl Default for DummyArmConfig {
    fn default() -> Self {
        Self {
            n_joints: 7,
            desired_goal: vec![0.2, -0.1, 0.3],
            max_steps: Some(50),
        }
    }
}

impl DummyArmConfig {
    /// Sets the number of joints.
    pub fn n_joints(mut self, v: usize) -> Self {
        self.n_joints = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }
}

/// A deterministic integrator arm with a goal-conditioned observation.
pub struct DummyArmEnv {
    joints: Array1<f32>,
    desired_goal: Array1<f32>,
    max_steps: Option<usize>,
    count_steps: usize,

    /// The action executed by the most recent step.
    last_act: Option<Array1<f32>>,
}

impl DummyArmEnv {
    /// The action executed by the most recent step, if any.
    pub fn last_act(&self) -> Option<&Array1<f32>> {
        self.last_act.as_ref()
    }

    fn observe(&self) -> GoalObs {
        GoalObs::new(
            self.joints.clone(),
            self.achieved_goal(),
            self.desired_goal.clone(),
        )
    }

    fn achieved_goal(&self) -> Array1<f32> {
        let n = self.desired_goal.len().min(self.joints.len());
        self.joints.slice(ndarray::s![..n]).to_owned()
    }

    fn goal_dist(&self) -> f32 {
        (&self.achieved_goal() - &self.desired_goal)
            .mapv(|x| x * x)
            .sum()
            .sqrt()
    }
}

impl Env for DummyArmEnv {
    type Config = DummyArmConfig;
    type Obs = GoalObs;
    type Act = JointAct;
    type Info = ();

    /// Builds the arm in its zero pose.
    ///
    /// The dynamics are deterministic; the seed is ignored.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            joints: Array1::zeros(config.n_joints),
            desired_goal: Array1::from(config.desired_goal.clone()),
            max_steps: config.max_steps,
            count_steps: 0,
            last_act: None,
        })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        if a.len() != self.joints.len() {
            return Err(SixDofError::InvalidActionLen {
                expected: self.joints.len(),
                got: a.len(),
            }
            .into());
        }

        self.joints = &self.joints + &(a.as_array() * DT);
        self.last_act = Some(a.as_array().clone());

        let dist = self.goal_dist();
        let is_terminated = vec![(dist < GOAL_EPS) as i8];
        let mut is_truncated = vec![0];

        self.count_steps += 1;
        if let Some(max_steps) = self.max_steps {
            if self.count_steps >= max_steps {
                is_truncated[0] = 1;
                self.count_steps = 0;
            }
        }

        let record = Record::from_slice(&[
            ("act", RecordValue::Array1(a.as_slice().to_vec())),
            ("goal_dist", RecordValue::Scalar(dist)),
        ]);
        let step = Step::new(
            self.observe(),
            a.clone(),
            vec![-dist],
            is_terminated,
            is_truncated,
            (),
            GoalObs::dummy(1),
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

    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        let reset = match is_done {
            None => true,
            Some(v) => {
                debug_assert_eq!(v.len(), 1);
                v[0] != 0
            }
        };

        if !reset {
            return Ok(GoalObs::dummy(1));
        }

        self.joints.fill(0.0);
        self.count_steps = 0;
        self.last_act = None;
        Ok(self.observe())
    }

    /// Resets the arm to a pose offset by the given index.
    ///
    /// Distinct indices give distinct, reproducible initial poses.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.reset(None)?;
        self.joints.fill(ix as f32 * 0.01);
        Ok(self.observe())
    }
}

impl ContinuousEnv for DummyArmEnv {
    /// Per-joint command bounds, wider for the joints closer to the wrist.
    fn action_space(&self) -> BoxSpace {
        let high: Array1<f32> = (0..self.joints.len())
            .map(|i| 0.1 * (i + 1) as f32)
            .collect();
        let low = high.mapv(|x| -x);
        BoxSpace::new(low, high).expect("bounds have equal lengths")
    }
}
