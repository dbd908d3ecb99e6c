use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::catalog::RunOutcome;
use crate::workflow::config::ExerciseConfig;

/// JSON summary of a runner invocation, one record per executed problem.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub config: ExerciseConfig,
    pub results: Vec<RunOutcome>,
}

impl RunReport {
    pub fn new(config: ExerciseConfig) -> Self {
        Self {
            config,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: RunOutcome) {
        self.results.push(outcome);
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        let contents =
            serde_json::to_string_pretty(self).context("serializing run report")?;
        if let Some(parent) = path_ref.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        fs::write(path_ref, contents)
            .with_context(|| format!("writing run report {}", path_ref.display()))?;
        Ok(())
    }
}
