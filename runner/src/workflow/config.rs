use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shared input configuration for the exercise problems.
///
/// `width` and `height` size the generated operands (vectors use `width`,
/// square matrices use `height` as their order), `scalar` feeds the saxpy
/// problems, and `seed` pins the generated data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub width: usize,
    pub height: usize,
    pub scalar: f32,
    pub seed: u64,
}

impl ExerciseConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading exercise config {}", path_ref.display()))?;
        let config: ExerciseConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing exercise config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(width: usize, height: usize, scalar: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            scalar,
            seed,
        }
    }
}
