use std::collections::BTreeMap;

use anyhow::{anyhow, Context};
use log::info;
use serde::Serialize;

use crate::catalog::group::ProblemGroup;

/// Result of one dispatched problem execution.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub group: usize,
    pub problem: usize,
    pub annotation: String,
    pub value: f32,
}

/// Two-level menu over problem groups, dispatching by (group, problem) index.
pub struct GroupManager {
    name: String,
    groups: BTreeMap<usize, ProblemGroup>,
}

impl GroupManager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, group: ProblemGroup) {
        self.groups.insert(group.number(), group);
    }

    pub fn group(&self, number: usize) -> Option<&ProblemGroup> {
        self.groups.get(&number)
    }

    pub fn print_menu(&self) {
        println!("=== {} ===", self.name);
        for group in self.groups.values() {
            println!("{}. {}", group.number(), group.annotation());
            for (number, problem) in group.problems() {
                println!("   {}.{} {}", group.number(), number, problem.annotation());
            }
        }
    }

    pub fn print_group_menu(&self, number: usize) {
        match self.groups.get(&number) {
            Some(group) => {
                println!("{}. {}", group.number(), group.annotation());
                for (problem_number, problem) in group.problems() {
                    println!(
                        "   {}.{} {}",
                        group.number(),
                        problem_number,
                        problem.annotation()
                    );
                }
            }
            None => println!("unknown group {}", number),
        }
    }

    /// Runs the problem at `(group, problem)` and returns its outcome.
    pub fn run(&self, group: usize, problem: usize) -> anyhow::Result<RunOutcome> {
        let selected_group = self
            .groups
            .get(&group)
            .ok_or_else(|| anyhow!("unknown group {}", group))?;
        let selected = selected_group
            .problem(problem)
            .ok_or_else(|| anyhow!("unknown problem {}.{}", group, problem))?;

        info!("running {}.{} {}", group, problem, selected.annotation());
        let value = selected
            .execute()
            .with_context(|| format!("running problem {}.{}", group, problem))?;

        Ok(RunOutcome {
            group,
            problem,
            annotation: selected.annotation().to_string(),
            value,
        })
    }

    /// Runs every registered problem in menu order.
    pub fn run_all(&self) -> anyhow::Result<Vec<RunOutcome>> {
        let mut outcomes = Vec::new();
        for group in self.groups.values() {
            for (number, _) in group.problems() {
                outcomes.push(self.run(group.number(), number)?);
            }
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::problem::Problem;

    fn sample_manager() -> GroupManager {
        let mut group = ProblemGroup::new(1, "sample");
        group.register(Problem::new("constant", || Ok(42.0)));
        group.register(Problem::new("failing", || Err(anyhow!("boom"))));

        let mut manager = GroupManager::new("test menu");
        manager.register(group);
        manager
    }

    #[test]
    fn manager_dispatches_by_index() {
        let manager = sample_manager();
        let outcome = manager.run(1, 1).unwrap();
        assert_eq!(outcome.value, 42.0);
        assert_eq!(outcome.annotation, "constant");
    }

    #[test]
    fn manager_rejects_unknown_indices() {
        let manager = sample_manager();
        assert!(manager.run(9, 1).is_err());
        assert!(manager.run(1, 9).is_err());
    }

    #[test]
    fn manager_propagates_problem_failures() {
        let manager = sample_manager();
        assert!(manager.run(1, 2).is_err());
    }
}
