use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid subtask count hint '{0}' (expected N or MIN-MAX, with 1 <= MIN <= MAX)")]
    CountHint(String),

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("{field} is {value}, the maximum is {max} minutes")]
    DurationTooLong {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Execution timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Environment variable {0} is not set")]
    MissingApiKey(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to parse subtasks: {0}")]
    ParseOutput(String),

    #[error("No subtasks were generated")]
    Empty,

    #[error("Subtask {0} is blank")]
    BlankEntry(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Invalid choice '{0}'")]
    InvalidMenuChoice(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("Task number {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Task description cannot be empty")]
    EmptyDescription,
}

#[derive(Error, Debug)]
pub enum AnnounceError {
    #[error("Failed to launch speech command: {0}")]
    Io(#[from] std::io::Error),

    #[error("Speech command failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}
