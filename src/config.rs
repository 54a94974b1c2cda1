use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SolveOptions;
use crate::error::{PackError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub packs: PacksConfig,
}

impl Config {
    /// Defaults, then the TOML file, then `PACKCALC_*` environment variables.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("PACKCALC_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(PackError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("packcalc/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| PackError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| PackError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.server {
            self.server.merge(patch);
        }
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
        if let Some(patch) = patch.packs {
            self.packs.merge(patch);
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("PACKCALC_HOST") {
            self.server.host = value;
        }
        if let Some(value) = env_parse(&lookup, "PACKCALC_PORT")? {
            self.server.port = value;
        }
        if let Some(value) = env_parse(&lookup, "PACKCALC_WORKERS")? {
            self.server.workers = value;
        }
        if let Some(value) = env_parse(&lookup, "PACKCALC_POLL_INTERVAL_MS")? {
            self.server.poll_interval_ms = value;
        }

        if let Some(value) = lookup("PACKCALC_DB_PATH") {
            self.storage.db_path = Some(PathBuf::from(value));
        }

        if let Some(values) = env_list(&lookup, "PACKCALC_DEFAULT_SIZES")? {
            self.packs.default_sizes = values;
        }
        if let Some(value) = env_parse(&lookup, "PACKCALC_DEFAULT_ORDER")? {
            self.packs.default_order = value;
        }
        if let Some(value) = env_parse(&lookup, "PACKCALC_MAX_TABLE_LEN")? {
            self.packs.max_table_len = value;
        }
        if let Some(value) = env_parse(&lookup, "PACKCALC_MAX_WORK")? {
            self.packs.max_work = value;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(PackError::Config("server.workers must be at least 1".to_string()));
        }
        if self.server.poll_interval_ms == 0 {
            return Err(PackError::Config(
                "server.poll_interval_ms must be at least 1".to_string(),
            ));
        }
        if let Some(size) = self.packs.default_sizes.iter().find(|&&size| size <= 0) {
            return Err(PackError::Config(format!(
                "packs.default_sizes must be positive, got {size}"
            )));
        }
        if self.packs.default_order <= 0 {
            return Err(PackError::Config(format!(
                "packs.default_order must be positive, got {}",
                self.packs.default_order
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ServerConfig {
    fn merge(&mut self, patch: ServerPatch) {
        if let Some(value) = patch.host {
            self.host = value;
        }
        if let Some(value) = patch.port {
            self.port = value;
        }
        if let Some(value) = patch.workers {
            self.workers = value;
        }
        if let Some(value) = patch.poll_interval_ms {
            self.poll_interval_ms = value;
        }
    }

    /// `host:port` for binding.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.db_path {
            self.db_path = Some(value);
        }
    }

    /// Configured database path, or `<data_dir>/packcalc/packcalc.db`.
    pub fn resolved_db_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        dirs::data_local_dir()
            .map(|dir| dir.join("packcalc/packcalc.db"))
            .ok_or_else(|| PackError::MissingConfig("storage.db_path".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacksConfig {
    #[serde(default = "default_sizes")]
    pub default_sizes: Vec<i64>,
    #[serde(default = "default_order")]
    pub default_order: i64,
    /// Exact-solver table bound; 0 disables the bound.
    #[serde(default = "default_max_table_len")]
    pub max_table_len: usize,
    /// Exact-solver step bound (table entries times sizes); 0 disables it.
    #[serde(default = "default_max_work")]
    pub max_work: u64,
}

impl Default for PacksConfig {
    fn default() -> Self {
        Self {
            default_sizes: default_sizes(),
            default_order: default_order(),
            max_table_len: default_max_table_len(),
            max_work: default_max_work(),
        }
    }
}

impl PacksConfig {
    fn merge(&mut self, patch: PacksPatch) {
        if let Some(values) = patch.default_sizes {
            self.default_sizes = values;
        }
        if let Some(value) = patch.default_order {
            self.default_order = value;
        }
        if let Some(value) = patch.max_table_len {
            self.max_table_len = value;
        }
        if let Some(value) = patch.max_work {
            self.max_work = value;
        }
    }

    #[must_use]
    pub const fn solve_options(&self) -> SolveOptions {
        let max_table_len = if self.max_table_len == 0 {
            None
        } else {
            Some(self.max_table_len)
        };
        let max_work = if self.max_work == 0 {
            None
        } else {
            Some(self.max_work)
        };
        SolveOptions::with_max_table_len(max_table_len).with_max_work(max_work)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_workers() -> usize {
    4
}

const fn default_poll_interval_ms() -> u64 {
    250
}

fn default_sizes() -> Vec<i64> {
    vec![250, 500, 1000, 2000, 5000]
}

const fn default_order() -> i64 {
    250
}

const fn default_max_table_len() -> usize {
    10_000_000
}

const fn default_max_work() -> u64 {
    200_000_000
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub server: Option<ServerPatch>,
    pub storage: Option<StoragePatch>,
    pub packs: Option<PacksPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerPatch {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PacksPatch {
    pub default_sizes: Option<Vec<i64>>,
    pub default_order: Option<i64>,
    pub max_table_len: Option<usize>,
    pub max_work: Option<u64>,
}

fn env_parse<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().map(Some).map_err(|err| {
            PackError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        None => Ok(None),
    }
}

fn env_list(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Vec<i64>>> {
    match lookup(key) {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry.parse::<i64>().map_err(|err| {
                    PackError::Config(format!("invalid {key} entry {entry}: {err}"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        None => Ok(None),
    }
}
