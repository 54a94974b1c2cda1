//! Storage layer for packcalc
//!
//! Pack sizes live in SQLite for the service and CLI; an in-memory store
//! backs stateless runs and tests.

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::Database;
