//! Configuration of [`SixDofEnv`](super::SixDofEnv).
use crate::Env;
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`SixDofEnv`](super::SixDofEnv).
///
/// Wraps the configuration of the underlying environment and adds the two
/// fixed-joint parameters. The defaults fix joint 3 of the arm (index 2,
/// the redundant elbow joint) at its neutral position.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "E::Config: Serialize",
    deserialize = "E::Config: Deserialize<'de>"
))]
pub struct SixDofEnvConfig<E: Env> {
    pub(super) inner: E::Config,
    pub(super) fixed_joint_idx: usize,
    pub(super) fixed_joint_value: f32,
}

impl<E: Env> Clone for SixDofEnvConfig<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            fixed_joint_idx: self.fixed_joint_idx,
            fixed_joint_value: self.fixed_joint_value,
        }
    }
}

impl<E: Env> Default for SixDofEnvConfig<E>
where
    E::Config: Default,
{
    fn default() -> Self {
        Self {
            inner: E::Config::default(),
            fixed_joint_idx: 2,
            fixed_joint_value: 0.0,
        }
    }
}

impl<E: Env> SixDofEnvConfig<E> {
    /// Sets the configuration of the wrapped environment.
    pub fn inner(mut self, inner: E::Config) -> Self {
        self.inner = inner;
        self
    }

    /// Sets the index of the joint to fix.
    pub fn fixed_joint_idx(mut self, v: usize) -> Self {
        self.fixed_joint_idx = v;
        self
    }

    /// Sets the value the fixed joint is held at.
    pub fn fixed_joint_value(mut self, v: f32) -> Self {
        self.fixed_joint_value = v;
        self
    }
}

impl<E: Env> SixDofEnvConfig<E>
where
    E::Config: Serialize + DeserializeOwned,
{
    /// Loads [`SixDofEnvConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SixDofEnvConfig`] as a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
