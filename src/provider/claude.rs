use super::{ProviderOutput, Runner};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

pub struct ClaudeRunner {
    pub binary: PathBuf,
    pub model: String,
}

#[async_trait]
impl Runner for ClaudeRunner {
    fn name(&self) -> &'static str {
        "claude_cli"
    }

    async fn execute(
        &self,
        system_prompt: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<ProviderOutput, ProviderError> {
        // Build command - use string for PATH lookup if not an absolute/relative path
        let binary_str = self.binary.to_string_lossy();
        let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
            Command::new(&self.binary)
        } else {
            Command::new(binary_str.as_ref())
        };

        // Ensure subscription auth is used (not API key)
        cmd.env_remove("ANTHROPIC_API_KEY");

        // No tools: the answer comes from the prompt alone
        cmd.arg("-p")
            .arg(prompt)
            .arg("--model")
            .arg(&self.model)
            .arg("--append-system-prompt")
            .arg(system_prompt)
            .arg("--output-format")
            .arg("json");

        debug!("Invoking {} with model {}", binary_str, self.model);

        let start = std::time::Instant::now();

        let output = tokio_timeout(timeout, cmd.output())
            .await
            .map_err(|_| ProviderError::Timeout(timeout))?
            .map_err(ProviderError::Io)?;

        if !output.status.success() {
            return Err(ProviderError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(ProviderOutput {
            text: String::from_utf8_lossy(&output.stdout).to_string(),
            duration: start.elapsed(),
        })
    }
}
