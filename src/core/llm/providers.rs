use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::LlmConfig;
use crate::error::{ClassdocError, Result};
use super::super::ClassRecord;
use super::documenter::{build_class_prompt, ClassDocumenter};

/// Factory function to create the appropriate LLM documenter based on config
pub fn create_documenter(config: &LlmConfig) -> Result<Box<dyn ClassDocumenter>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(OpenAiDocumenter::new(config)?)),
        _ => Err(ClassdocError::Config(
            format!("Unsupported LLM provider: {}", config.provider)
        )),
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Chat-completions client for the OpenAI API
pub struct OpenAiDocumenter {
    config: LlmConfig,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiDocumenter {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: &LlmConfig, client: reqwest::Client) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ClassdocError::Config("API key required for the OpenAI provider".to_string()))?;

        Ok(Self {
            config: config.clone(),
            api_key,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    async fn call_openai_api(&self, prompt: &str) -> Result<String> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": self.config.system_prompt
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature
        });

        let response = self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClassdocError::Service(format!("OpenAI API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClassdocError::Service(
                format!("OpenAI API error {}: {}", status, error_text)
            ));
        }

        let body: ChatCompletionResponse = response.json().await
            .map_err(|e| ClassdocError::Service(format!("Failed to parse OpenAI response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .ok_or_else(|| ClassdocError::Service("OpenAI response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| ClassdocError::Service("OpenAI response choice had no content".to_string()))
    }
}

#[async_trait]
impl ClassDocumenter for OpenAiDocumenter {
    async fn describe_class(&self, class: &ClassRecord) -> Result<String> {
        let prompt = build_class_prompt(class);
        debug!("Requesting description for class {} ({} methods)", class.name, class.methods.len());
        self.call_openai_api(&prompt).await
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
