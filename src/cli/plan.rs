//! CLI handler for the `plan` subcommand
//!
//! Generates subtasks for a task and prints them, without running timers.

use crate::cli::menu::print_subtasks;
use crate::cli::start::build_planner;
use crate::cli::PlanArgs;
use std::io;
use tracing::info;

pub async fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = args.planner.load_config()?;
    config.apply_preset();
    config.validate()?;

    let main_task = args.task.join(" ");
    if main_task.trim().is_empty() {
        anyhow::bail!("No main task provided");
    }

    info!(
        "Planning with {} ({})",
        config.planner.provider,
        config.planner.count_hint()?
    );

    let planner = build_planner(&config)?;
    let subtasks = planner.generate(main_task.trim()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&subtasks)?);
    } else {
        print_subtasks(&mut io::stdout(), &subtasks)?;
    }

    Ok(())
}
