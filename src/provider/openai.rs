//! OpenAI Chat Completions backend
//!
//! Sends one system + user message pair and asks for a JSON object reply.

use super::{ProviderOutput, Runner};
use crate::config::OpenAiConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

pub struct OpenAiRunner {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenAiRunner {
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, ProviderError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        })
    }

    fn build_request_body(&self, system_prompt: &str, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": prompt },
            ],
            "response_format": { "type": "json_object" },
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl Runner for OpenAiRunner {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn execute(
        &self,
        system_prompt: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<ProviderOutput, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_request_body(system_prompt, prompt);
        debug!(%url, model = %self.model, "Sending chat completion request");

        let start = std::time::Instant::now();

        let request = async {
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok::<_, ProviderError>(response.json::<ChatResponse>().await?)
        };

        let response = tokio_timeout(timeout, request)
            .await
            .map_err(|_| ProviderError::Timeout(timeout))??;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(ProviderOutput {
            text,
            duration: start.elapsed(),
        })
    }
}
