//! packcalc sizes - Manage the stored pack sizes

use clap::{Args, Subcommand};
use serde::Serialize;

use chrono::{DateTime, Utc};

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout};
use crate::core::save_pack_sizes;
use crate::error::Result;
use crate::storage::Database;

#[derive(Args, Debug)]
pub struct SizesArgs {
    #[command(subcommand)]
    pub command: SizesCommand,
}

#[derive(Subcommand, Debug)]
pub enum SizesCommand {
    /// Show the stored pack sizes
    List,
    /// Replace the stored pack sizes
    Set {
        /// New pack sizes
        #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
        sizes: Vec<i64>,
    },
    /// Restore the configured default sizes
    Reset,
}

#[derive(Debug, Serialize)]
struct SizesReport {
    sizes: Vec<i64>,
    last_updated: Option<DateTime<Utc>>,
}

pub fn run(ctx: &AppContext, args: &SizesArgs) -> Result<()> {
    let db = ctx.open_database()?;
    match &args.command {
        SizesCommand::List => {}
        SizesCommand::Set { sizes } => save_pack_sizes(&db, sizes)?,
        SizesCommand::Reset => save_pack_sizes(&db, &ctx.config.packs.default_sizes)?,
    }
    emit_sizes(ctx, &db)
}

fn emit_sizes(ctx: &AppContext, db: &Database) -> Result<()> {
    let report = SizesReport {
        sizes: db.list_pack_sizes()?,
        last_updated: db.last_updated()?,
    };

    if ctx.robot_mode {
        return output::emit_robot(&output::robot_ok(&report));
    }

    let mut layout = HumanLayout::for_format(ctx.output_format);
    layout.title("Pack sizes");
    if report.sizes.is_empty() {
        layout.push_line("(none)");
    }
    for size in &report.sizes {
        layout.bullet(&size.to_string());
    }
    if let Some(updated) = report.last_updated {
        layout.blank().kv("Last updated", &updated.to_rfc3339());
    }
    output::emit_human(layout);
    Ok(())
}
