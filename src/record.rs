//! Records attached to environment steps.
//!
//! Every [`Env::step`](crate::Env::step) returns a [`Record`] alongside the
//! [`Step`](crate::Step) object. Environments put diagnostic values in it
//! (executed actions, goal distances); wrappers forward it unchanged.
mod base;

pub use base::{Record, RecordValue};
