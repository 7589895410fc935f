//! CLI handlers for the `init` and `schema` subcommands

use crate::cli::InitArgs;
use crate::config::Config;
use schemars::schema_for;
use std::path::PathBuf;

pub fn init(args: InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    // Write the PATH name rather than this machine's install location
    let mut config = Config::default();
    config.providers.claude_cli.binary = PathBuf::from("claude");

    let yaml = serde_yaml::to_string(&config)?;
    std::fs::write(&args.config, yaml)?;
    println!("Wrote default config to {}", args.config.display());
    Ok(())
}

pub fn schema() -> anyhow::Result<()> {
    let schema = schema_for!(Config);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}
