//! Task planning: turn a main task into an editable, ordered subtask list
//!
//! 1. Ask the subtask generator for a breakdown of the main task
//! 2. Let the caller edit single entries or regenerate the whole list
//! 3. Confirm the list and hand it over to the session runner by value

mod generator;
mod parser;
mod types;

pub use generator::{LlmGenerator, SubtaskGenerator};
pub use types::{SubtaskList, Task};

use crate::config::CountHint;
use crate::error::{GenerationError, PlannerError};
use std::sync::Arc;
use tracing::{info, warn};

pub struct TaskPlanner {
    generator: Arc<dyn SubtaskGenerator>,
    system_prompt: String,
    count_hint: CountHint,
}

impl TaskPlanner {
    pub fn new(
        generator: Arc<dyn SubtaskGenerator>,
        system_prompt: String,
        count_hint: CountHint,
    ) -> Self {
        Self {
            generator,
            system_prompt,
            count_hint,
        }
    }

    /// Generate a fresh subtask list for the main task. Never merges with a previous list.
    pub async fn generate(&self, main_task: &str) -> Result<SubtaskList, GenerationError> {
        info!("Generating {} subtasks for: {}", self.count_hint, main_task);

        let descriptions = self
            .generator
            .generate(
                &self.system_prompt,
                main_task,
                &self.count_hint.to_string(),
            )
            .await?;

        let list = SubtaskList::from_descriptions(&descriptions)?;

        if !self.count_hint.contains(list.len()) {
            warn!(
                "Generator returned {} subtasks, outside the requested {}",
                list.len(),
                self.count_hint
            );
        }

        Ok(list)
    }

    /// Replace the description at a 1-based position, leaving `list` untouched
    pub fn edit(
        list: &SubtaskList,
        index: usize,
        new_text: &str,
    ) -> Result<SubtaskList, PlannerError> {
        if index == 0 || index > list.len() {
            return Err(PlannerError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        let task = Task::new(new_text)?;

        let mut edited = list.clone();
        edited.replace(index, task)?;
        Ok(edited)
    }

    /// Finish planning; the returned list is what the sessions will run
    pub fn confirm(list: SubtaskList) -> SubtaskList {
        info!("Confirmed {} subtasks", list.len());
        list
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{planner, ScriptedGenerator};
    use super::*;

    fn descriptions(list: &SubtaskList) -> Vec<&str> {
        list.iter().map(Task::description).collect()
    }

    #[tokio::test]
    async fn test_generate_returns_ordered_list() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(vec![
            "Draft outline",
            "Write body",
            "Edit",
        ])]));
        let planner = planner(generator.clone());

        let list = planner.generate("Write report").await.unwrap();

        assert_eq!(descriptions(&list), vec!["Draft outline", "Write body", "Edit"]);
        assert_eq!(*generator.calls.lock().unwrap(), vec!["Write report"]);
    }

    #[tokio::test]
    async fn test_generate_fails_on_empty_or_error() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok(vec![]),
            Err(GenerationError::ParseOutput("garbage".to_string())),
        ]));
        let planner = planner(generator);

        assert!(matches!(
            planner.generate("Write report").await,
            Err(GenerationError::Empty)
        ));
        assert!(matches!(
            planner.generate("Write report").await,
            Err(GenerationError::ParseOutput(_))
        ));
    }

    #[tokio::test]
    async fn test_regeneration_replaces_whole_list() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok(vec!["a", "b", "c"]),
            Ok(vec!["x"]),
        ]));
        let planner = planner(generator);

        let first = planner.generate("Write report").await.unwrap();
        let second = planner.generate("Write report").await.unwrap();

        assert_eq!(descriptions(&first), vec!["a", "b", "c"]);
        assert_eq!(descriptions(&second), vec!["x"]);
    }

    #[test]
    fn test_edit_in_range_changes_only_that_position() {
        let list = SubtaskList::from_descriptions(&["a", "b", "c"]).unwrap();

        for i in 1..=3 {
            let edited = TaskPlanner::edit(&list, i, "  new  ").unwrap();
            for (pos, task) in edited.iter().enumerate() {
                if pos + 1 == i {
                    assert_eq!(task.description(), "new");
                } else {
                    assert_eq!(task, list.get(pos + 1).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_edit_out_of_range_leaves_list_unchanged() {
        let list = SubtaskList::from_descriptions(&["a", "b", "c"]).unwrap();
        let before = list.clone();

        for i in [0, 4, 99] {
            assert_eq!(
                TaskPlanner::edit(&list, i, "new"),
                Err(PlannerError::IndexOutOfRange { index: i, len: 3 })
            );
        }
        assert_eq!(
            TaskPlanner::edit(&list, 2, "   "),
            Err(PlannerError::EmptyDescription)
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_confirm_returns_list_unchanged() {
        let list = SubtaskList::from_descriptions(&["a", "b"]).unwrap();
        assert_eq!(TaskPlanner::confirm(list.clone()), list);
    }
}
