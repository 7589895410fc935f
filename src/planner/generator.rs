//! Subtask generation service backed by a provider runner

use crate::error::GenerationError;
use crate::provider::Runner;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::parser::parse_subtasks;

/// Turns a main task into an ordered list of subtask descriptions
#[async_trait]
pub trait SubtaskGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        main_task: &str,
        count_hint: &str,
    ) -> Result<Vec<String>, GenerationError>;
}

pub struct LlmGenerator {
    runner: Arc<dyn Runner>,
    timeout: Duration,
}

impl LlmGenerator {
    pub fn new(runner: Arc<dyn Runner>, timeout: Duration) -> Self {
        Self { runner, timeout }
    }
}

fn build_prompt(main_task: &str, count_hint: &str) -> String {
    format!(
        "Break down this task into {} specific subtasks: {}\n\n\
         Respond with only a JSON object of the form \
         {{\"tasks\": [\"first subtask\", \"second subtask\"]}}.",
        count_hint, main_task
    )
}

#[async_trait]
impl SubtaskGenerator for LlmGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        main_task: &str,
        count_hint: &str,
    ) -> Result<Vec<String>, GenerationError> {
        let prompt = build_prompt(main_task, count_hint);
        let output = self
            .runner
            .execute(system_prompt, &prompt, self.timeout)
            .await?;

        debug!(
            "{} replied in {:?} ({} bytes)",
            self.runner.name(),
            output.duration,
            output.text.len()
        );

        parse_subtasks(&output.text)
    }
}
