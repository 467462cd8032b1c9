use std::path::PathBuf;

use crate::error::{ClassdocError, Result};

pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_TITLE: &str = "Project Documentation";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// LLM provider (only "openai" is wired up)
    pub provider: String,

    /// Model name sent with every request
    pub model: String,

    /// API key used as the bearer token
    pub api_key: Option<String>,

    /// Base URL of the chat completions API
    pub base_url: String,

    /// System message preceding every prompt
    pub system_prompt: String,

    /// Maximum tokens for LLM responses
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Source code parsing configuration
    pub parsing: ParsingConfig,

    /// Output settings
    pub output: OutputConfig,

    /// LLM integration settings
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Root directory walked for source files
    pub source_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ParsingConfig {
    /// Language whose classes are documented
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// File overwritten with the rendered document
    pub output_file: PathBuf,

    /// Top-level title line of the document
    pub title: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Config {
    /// Build a configuration from the three required run values
    pub fn new(api_key: impl Into<String>, source_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            project: ProjectConfig {
                source_dir: source_dir.into(),
            },
            parsing: ParsingConfig {
                language: "python".to_string(),
            },
            output: OutputConfig {
                output_file: output_file.into(),
                title: DEFAULT_TITLE.to_string(),
            },
            llm: LlmConfig {
                api_key: Some(api_key.into()),
                ..LlmConfig::default()
            },
        }
    }

    /// Reject values that would only fail later in the run
    pub fn validate(&self) -> Result<()> {
        match self.llm.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err(ClassdocError::Config("an API key is required".to_string())),
        }

        if self.project.source_dir.as_os_str().is_empty() {
            return Err(ClassdocError::Config("a source directory is required".to_string()));
        }

        if self.output.output_file.as_os_str().is_empty() {
            return Err(ClassdocError::Config("an output file is required".to_string()));
        }

        Ok(())
    }
}
