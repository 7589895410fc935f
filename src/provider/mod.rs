mod claude;
mod openai;

pub use claude::ClaudeRunner;
pub use openai::OpenAiRunner;

use crate::config::{Config, Provider};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct ProviderOutput {
    /// Raw model reply (or CLI stdout) to be parsed by the caller
    pub text: String,
    pub duration: Duration,
}

#[async_trait]
pub trait Runner: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(
        &self,
        system_prompt: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<ProviderOutput, ProviderError>;
}

/// Create a runner for the configured planner provider
pub fn create_runner(config: &Config) -> Result<Arc<dyn Runner>, ProviderError> {
    let runner: Arc<dyn Runner> = match config.planner.provider {
        Provider::Openai => Arc::new(OpenAiRunner::from_config(&config.providers.openai)?),
        Provider::ClaudeCli => Arc::new(ClaudeRunner {
            binary: config.providers.claude_cli.binary.clone(),
            model: config.providers.claude_cli.model.clone(),
        }),
    };
    Ok(runner)
}
