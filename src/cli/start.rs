//! CLI handler for the `start` subcommand
//!
//! Prompts for the main task, generates subtasks, runs the review menu and
//! then the work/break sessions.

use crate::cli::menu::{print_subtasks, review_subtasks, Console};
use crate::cli::StartArgs;
use crate::config::Config;
use crate::planner::{LlmGenerator, TaskPlanner};
use crate::provider::create_runner;
use crate::session::{create_announcer, SessionOutcome, SessionRunner, TokioClock};
use std::io;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn execute(args: StartArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let main_task = if args.task.is_empty() {
        console
            .prompt("Enter your main task: ")?
            .unwrap_or_default()
    } else {
        args.task.join(" ")
    };
    let main_task = main_task.trim().to_string();
    if main_task.is_empty() {
        anyhow::bail!("No main task provided");
    }

    let planner = build_planner(&config)?;

    println!("Generating subtasks...");
    let subtasks = planner.generate(&main_task).await?;

    let subtasks = if config.planner.review_subtasks {
        match review_subtasks(&planner, &main_task, subtasks, &mut console).await? {
            Some(list) => list,
            None => {
                println!("\nNo choice made, exiting.");
                return Ok(());
            }
        }
    } else {
        println!("\nSubtasks:");
        print_subtasks(&mut io::stdout(), &subtasks)?;
        TaskPlanner::confirm(subtasks)
    };

    let total = subtasks.len();
    println!("\nStarting Pomodoro sessions... (Ctrl-C to stop)");

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ctrl_c.cancel(),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    let runner = SessionRunner::new(
        &config.session,
        Arc::new(TokioClock),
        Arc::new(create_announcer(&config.speech)),
        cancel,
    );
    let report = runner.run(subtasks).await;

    info!(
        "Sessions ended with {:?} after {} announcements",
        report.outcome,
        report.announcements.len()
    );

    if report.outcome == SessionOutcome::Cancelled {
        println!(
            "\nStopped after {} of {} tasks.",
            report.completed_tasks, total
        );
    }

    Ok(())
}

/// Config file, then preset/planner overrides, then session overrides, then presets fill the rest
fn resolve_config(args: &StartArgs) -> anyhow::Result<Config> {
    let mut config = args.planner.load_config()?;

    if let Some(minutes) = args.work_minutes {
        config.session.work_duration_minutes = minutes;
    }
    if let Some(minutes) = args.break_minutes {
        config.session.break_duration_minutes = minutes;
    }
    if let Some(minutes) = args.reminder_minutes {
        config.session.reminder_interval_minutes = Some(minutes);
    }
    if args.no_speech {
        config.speech.enabled = false;
    }
    if args.no_review {
        config.planner.review_subtasks = false;
    }

    config.apply_preset();
    config.validate()?;

    if let Some(preset) = config.preset {
        info!("Using {} preset", preset);
    }

    Ok(config)
}

pub fn build_planner(config: &Config) -> anyhow::Result<TaskPlanner> {
    let runner = create_runner(config)?;
    let generator = LlmGenerator::new(runner, config.planner.timeout());
    Ok(TaskPlanner::new(
        Arc::new(generator),
        config.planner.system_prompt.clone(),
        config.planner.count_hint()?,
    ))
}
