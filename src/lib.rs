#![warn(missing_docs)]
//! An action-space adapter for a 7-DOF simulated robot arm.
//!
//! The Franka Panda arm has seven revolute joints, one of which (the elbow
//! joint at index 2) is kinematically redundant for reaching tasks. This
//! crate provides [`SixDofEnv`], an environment wrapper that fixes one joint
//! at a constant value and exposes the remaining six to the agent:
//!
//! * the agent sends 6-element actions; the wrapper inserts the fixed joint
//!   value and forwards a 7-element action to the wrapped environment;
//! * observations, rewards and termination flags pass through unchanged;
//! * the reported action space is the wrapped space with the fixed index
//!   removed.
//!
//! The crate also carries the minimal environment interface the wrapper is
//! written against ([`Env`], [`Obs`], [`Act`], [`Step`]) and a bounded
//! continuous action space type ([`BoxSpace`]).
pub mod error;
pub mod record;

mod base;
pub use base::{Act, ContinuousEnv, Env, Info, Obs, Step};

mod space;
pub use space::BoxSpace;

mod obs;
pub use obs::GoalObs;

mod act;
pub use act::JointAct;

mod sixdof;
pub use sixdof::{SixDofEnv, SixDofEnvConfig, REDUCED_DOF};

pub mod dummy;
