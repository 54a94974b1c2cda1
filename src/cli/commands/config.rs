//! packcalc config - Inspect configuration

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output;
use crate::config::Config;
use crate::error::{PackError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    config: &'a Config,
    db_path: String,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
    }
}

fn show(ctx: &AppContext) -> Result<()> {
    let db_path = ctx.config.storage.resolved_db_path()?;

    if ctx.robot_mode {
        return output::emit_robot(&output::robot_ok(ConfigReport {
            config: &ctx.config,
            db_path: db_path.display().to_string(),
        }));
    }

    let rendered = toml::to_string_pretty(&ctx.config)
        .map_err(|err| PackError::Config(format!("render config: {err}")))?;
    if let Some(path) = &ctx.config_path {
        println!("# loaded from {}", path.display());
    }
    println!("# database: {}", db_path.display());
    println!("{rendered}");
    Ok(())
}
