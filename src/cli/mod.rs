pub mod config;
pub mod menu;
pub mod plan;
pub mod start;

use crate::config::{Config, Preset, Provider};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "pomodrill.yaml";

#[derive(Parser)]
#[command(name = "pomodrill")]
#[command(
    author,
    version,
    about = "Break a task into subtasks and drill through them with spoken pomodoro timers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan subtasks for a task, then run work/break sessions for each
    Start(StartArgs),

    /// Generate and print subtasks without starting any timers
    Plan(PlanArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

/// Options shared by every command that talks to the subtask generator
#[derive(Args, Clone)]
pub struct PlannerArgs {
    /// Path to config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Apply a settings preset
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Override how many subtasks to ask for (e.g. 2-3)
    #[arg(long)]
    pub count_hint: Option<String>,

    /// Override the subtask generation provider
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,
}

impl PlannerArgs {
    /// Load the config file and apply planner overrides. Presets and
    /// validation are left to the caller so later overrides still win.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config_exists = self.config.exists();
        let mut config = Config::load_or_default(&self.config)?;
        if config_exists {
            info!("Loaded config from {:?}", self.config);
        } else {
            info!("No config found at {:?}, using defaults", self.config);
        }

        if let Some(preset) = self.preset {
            config.preset = Some(preset);
        }
        if let Some(ref hint) = self.count_hint {
            config.planner.subtask_count_hint = Some(hint.clone());
        }
        if let Some(provider) = self.provider {
            config.planner.provider = provider;
        }

        Ok(config)
    }
}

#[derive(Parser, Clone)]
pub struct StartArgs {
    /// Main task (prompted for if omitted)
    #[arg(value_name = "TASK")]
    pub task: Vec<String>,

    #[command(flatten)]
    pub planner: PlannerArgs,

    /// Override work interval length in minutes
    #[arg(long)]
    pub work_minutes: Option<u64>,

    /// Override break length in minutes
    #[arg(long)]
    pub break_minutes: Option<u64>,

    /// Remind every N minutes during work
    #[arg(long)]
    pub reminder_minutes: Option<u64>,

    /// Print announcements only, without speech
    #[arg(long)]
    pub no_speech: bool,

    /// Start sessions right after generation, skipping the edit menu
    #[arg(long)]
    pub no_review: bool,
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Main task to break down
    #[arg(value_name = "TASK", required = true)]
    pub task: Vec<String>,

    #[command(flatten)]
    pub planner: PlannerArgs,

    /// Print subtasks as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
