//! Pack calculation core: validation, exact and heuristic solvers.

pub mod calculator;
pub mod exact;
pub mod heuristic;
pub mod provider;
pub mod solution;
pub mod validate;

pub use calculator::{Method, SolveOptions, Solved, calculate_packs, calculate_packs_with};
pub use provider::{PackSizeProvider, calculate_packs_with_provider, save_pack_sizes};
pub use solution::{PackMap, Score, Solution};
