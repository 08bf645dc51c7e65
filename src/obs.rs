//! Goal-conditioned observation.
use crate::Obs;
use ndarray::Array1;

/// A goal-conditioned observation, as emitted by robotic reaching
/// environments (FetchReach, PandaReach and the like).
///
/// [`SixDofEnv`](crate::SixDofEnv) never looks inside this type; it is
/// forwarded unchanged between the wrapped environment and the agent.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalObs {
    /// Proprioceptive state of the arm.
    pub observation: Array1<f32>,

    /// Goal position currently reached by the end effector.
    pub achieved_goal: Array1<f32>,

    /// Goal position the agent is asked to reach.
    pub desired_goal: Array1<f32>,
}

impl GoalObs {
    /// Creates an observation from its three components.
    pub fn new(observation: Array1<f32>, achieved_goal: Array1<f32>, desired_goal: Array1<f32>) -> Self {
        Self {
            observation,
            achieved_goal,
            desired_goal,
        }
    }

    /// Concatenates the three components into a flat vector.
    ///
    /// Goal-conditioned policies typically consume the observation in this
    /// form.
    pub fn to_flat_vec(&self) -> Vec<f32> {
        self.observation
            .iter()
            .chain(self.achieved_goal.iter())
            .chain(self.desired_goal.iter())
            .cloned()
            .collect()
    }
}

impl Obs for GoalObs {
    fn dummy(_n: usize) -> Self {
        Self {
            observation: Array1::zeros(0),
            achieved_goal: Array1::zeros(0),
            desired_goal: Array1::zeros(0),
        }
    }

    fn len(&self) -> usize {
        1
    }
}
