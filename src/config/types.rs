use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Named bundle of session and planner settings; explicit values win
    #[serde(default)]
    pub preset: Option<Preset>,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

/// The two observed deployments of the timer, expressed as configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// One uninterrupted work sleep, larger task breakdowns
    Classic,
    /// Reminder every 5 minutes, small task breakdowns
    Drill,
}

impl Preset {
    pub fn reminder_interval_minutes(self) -> Option<u64> {
        match self {
            Preset::Classic => None,
            Preset::Drill => Some(5),
        }
    }

    pub fn subtask_count_hint(self) -> &'static str {
        match self {
            Preset::Classic => "4-6",
            Preset::Drill => "2-3",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Classic => write!(f, "classic"),
            Preset::Drill => write!(f, "drill"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SessionConfig {
    #[serde(default = "default_work_duration_minutes")]
    pub work_duration_minutes: u64,

    #[serde(default = "default_break_duration_minutes")]
    pub break_duration_minutes: u64,

    /// Announce a reminder at every multiple of this inside a work interval.
    /// Unset means one uninterrupted work sleep.
    #[serde(default)]
    pub reminder_interval_minutes: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_duration_minutes: default_work_duration_minutes(),
            break_duration_minutes: default_break_duration_minutes(),
            reminder_interval_minutes: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PlannerConfig {
    /// How many subtasks to ask for, e.g. "2-3" or "4"
    #[serde(default)]
    pub subtask_count_hint: Option<String>,

    /// Show the edit/regenerate menu before starting
    #[serde(default = "default_true")]
    pub review_subtasks: bool,

    #[serde(default)]
    pub provider: Provider,

    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            subtask_count_hint: None,
            review_subtasks: true,
            provider: Provider::default(),
            system_prompt: default_system_prompt(),
            timeout_sec: default_timeout_sec(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Provider {
    #[default]
    Openai,
    ClaudeCli,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Openai => write!(f, "openai"),
            Provider::ClaudeCli => write!(f, "claude_cli"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub claude_cli: ClaudeCliConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            base_url: default_openai_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ClaudeCliConfig {
    #[serde(default = "default_claude_binary")]
    pub binary: PathBuf,

    #[serde(default = "default_claude_model")]
    pub model: String,
}

impl Default for ClaudeCliConfig {
    fn default() -> Self {
        Self {
            binary: default_claude_binary(),
            model: default_claude_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SpeechConfig {
    /// Speak announcements through the speech binary
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_speech_binary")]
    pub binary: PathBuf,

    /// Extra arguments placed before the text
    #[serde(default)]
    pub args: Vec<String>,

    /// Flag used to pass the speaking rate (espeak: -s, say: -r)
    #[serde(default = "default_rate_flag")]
    pub rate_flag: String,

    #[serde(default = "default_speech_rate")]
    pub rate: Option<u32>,

    /// Wait for speech to finish before the next timer starts
    #[serde(default = "default_true")]
    pub wait_for_speech: bool,

    /// Also print announcements to the terminal
    #[serde(default = "default_true")]
    pub print: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            binary: default_speech_binary(),
            args: Vec::new(),
            rate_flag: default_rate_flag(),
            rate: default_speech_rate(),
            wait_for_speech: true,
            print: true,
        }
    }
}

/// Parsed form of `planner.subtask_count_hint`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountHint {
    pub min: usize,
    pub max: usize,
}

impl CountHint {
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl std::fmt::Display for CountHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

impl std::str::FromStr for CountHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| s.to_string());

        let (min, max) = match s.split_once('-') {
            Some((lo, hi)) => (parse(lo)?, parse(hi)?),
            None => {
                let n = parse(s)?;
                (n, n)
            }
        };

        if min == 0 || min > max {
            return Err(s.to_string());
        }

        Ok(CountHint { min, max })
    }
}
