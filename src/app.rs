//! Shared state for CLI commands.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::core::SolveOptions;
use crate::error::Result;
use crate::storage::Database;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let output_format = cli.output_format();
        Ok(Self {
            config,
            config_path: cli.config.clone(),
            output_format,
            robot_mode: output_format.is_machine_readable(),
        })
    }

    /// Open the configured store, installing default sizes on first use.
    pub fn open_database(&self) -> Result<Database> {
        let path = self.config.storage.resolved_db_path()?;
        debug!(path = %path.display(), "opening pack size store");
        let db = Database::open(&path)?;
        db.seed_if_empty(&self.config.packs.default_sizes)?;
        Ok(db)
    }

    #[must_use]
    pub const fn solve_options(&self) -> SolveOptions {
        self.config.packs.solve_options()
    }
}
