//! packcalc - pack size calculator.
//!
//! Given the pack sizes on hand and an ordered item count, pick whole packs
//! that ship the fewest items and, among those, the fewest packs.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod server;
pub mod storage;

pub use crate::core::{PackMap, calculate_packs};
pub use error::{PackError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
