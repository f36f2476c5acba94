//! Problem catalog
//!
//! Holds the built-in problems plus any problems declared in configuration.

use std::collections::HashMap;

use thiserror::Error;

pub use crate::catalog::problem::{Difficulty, Example, Problem, ProblemSummary, TestCase};
pub use crate::catalog::two_sum::{TWO_SUM_ID, two_sum};

mod problem;
mod two_sum;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("problem '{0}' not found")]
    ProblemNotFound(String),

    #[error("catalog has no problems")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    problems: HashMap<String, Problem>,
}

impl Catalog {
    /// Catalog containing only the built-in problems
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(two_sum());
        catalog
    }

    pub fn empty() -> Self {
        Self {
            problems: HashMap::new(),
        }
    }

    /// Built-in problems with `extra` layered on top.
    ///
    /// Keys of `extra` become the problem ids and replace built-ins of the same id.
    pub fn with_problems<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (String, Problem)>,
    {
        let mut catalog = Self::builtin();
        for (id, mut problem) in extra {
            problem.id = id;
            catalog.insert(problem);
        }
        catalog
    }

    pub fn insert(&mut self, problem: Problem) {
        self.problems.insert(problem.id.clone(), problem);
    }

    pub fn get(&self, id: &str) -> Result<&Problem, CatalogError> {
        self.problems
            .get(id)
            .ok_or_else(|| CatalogError::ProblemNotFound(id.to_owned()))
    }

    /// Problem used when a request doesn't name one: two-sum if present,
    /// otherwise the first id in sort order
    pub fn default_problem(&self) -> Result<&Problem, CatalogError> {
        if let Some(problem) = self.problems.get(TWO_SUM_ID) {
            return Ok(problem);
        }
        self.list().into_iter().next().ok_or(CatalogError::Empty)
    }

    /// Resolve an optional id, falling back to the default problem
    pub fn resolve(&self, id: Option<&str>) -> Result<&Problem, CatalogError> {
        match id {
            Some(id) => self.get(id),
            None => self.default_problem(),
        }
    }

    /// All problems sorted by id
    pub fn list(&self) -> Vec<&Problem> {
        let mut problems: Vec<_> = self.problems.values().collect();
        problems.sort_by(|a, b| a.id.cmp(&b.id));
        problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
