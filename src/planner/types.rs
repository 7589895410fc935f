//! Task and subtask list types

use crate::error::{GenerationError, PlannerError};
use serde::Serialize;

/// A single subtask description, always trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    pub fn new(description: &str) -> Result<Self, PlannerError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(PlannerError::EmptyDescription);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, never-empty list of subtasks. Order is execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubtaskList {
    tasks: Vec<Task>,
}

impl SubtaskList {
    /// Build a list from generated descriptions, rejecting empty lists and blank entries
    pub fn from_descriptions<I, S>(descriptions: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tasks = descriptions
            .into_iter()
            .enumerate()
            .map(|(i, d)| Task::new(d.as_ref()).map_err(|_| GenerationError::BlankEntry(i + 1)))
            .collect::<Result<Vec<_>, _>>()?;

        if tasks.is_empty() {
            return Err(GenerationError::Empty);
        }

        Ok(Self { tasks })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always false: a list is never built without tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Task> {
        position.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Replace the task at a 1-based position
    pub(super) fn replace(&mut self, position: usize, task: Task) -> Result<(), PlannerError> {
        let len = self.tasks.len();
        let slot = position
            .checked_sub(1)
            .and_then(|i| self.tasks.get_mut(i))
            .ok_or(PlannerError::IndexOutOfRange {
                index: position,
                len,
            })?;
        *slot = task;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SubtaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
