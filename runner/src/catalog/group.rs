use std::collections::BTreeMap;

use crate::catalog::problem::Problem;

/// Numbered collection of problems presented together in the menu.
pub struct ProblemGroup {
    number: usize,
    annotation: String,
    problems: BTreeMap<usize, Problem>,
}

impl ProblemGroup {
    pub fn new(number: usize, annotation: impl Into<String>) -> Self {
        Self {
            number,
            annotation: annotation.into(),
            problems: BTreeMap::new(),
        }
    }

    /// Adds a problem under the next menu number, starting at 1.
    pub fn register(&mut self, problem: Problem) {
        let number = self.problems.len() + 1;
        self.problems.insert(number, problem);
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    pub fn problem(&self, number: usize) -> Option<&Problem> {
        self.problems.get(&number)
    }

    pub fn problems(&self) -> impl Iterator<Item = (usize, &Problem)> {
        self.problems.iter().map(|(number, problem)| (*number, problem))
    }
}
