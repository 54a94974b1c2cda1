//! Pack calculation entry points.
//!
//! Rules, in priority order:
//! 1. Only whole packs are shipped.
//! 2. Ship the fewest items that still cover the order.
//! 3. Within rule 2, ship the fewest packs.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::solution::{PackMap, Solution};
use super::{exact, heuristic, validate};
use crate::error::Result;

/// Which solver produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Exact,
    Heuristic,
}

/// Tunables for a single calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Upper bound on exact-solver table entries. Orders needing a larger
    /// table are answered by the heuristic. `None` means no bound.
    pub max_table_len: Option<usize>,
    /// Upper bound on exact-solver steps (table entries times sizes), so a
    /// long size list cannot stall a caller. `None` means no bound.
    pub max_work: Option<u64>,
}

impl SolveOptions {
    #[must_use]
    pub const fn with_max_table_len(max_table_len: Option<usize>) -> Self {
        Self {
            max_table_len,
            max_work: None,
        }
    }

    #[must_use]
    pub const fn with_max_work(mut self, max_work: Option<u64>) -> Self {
        self.max_work = max_work;
        self
    }
}

/// A calculation result with its totals and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solved {
    pub packs: PackMap,
    pub total_items: u64,
    pub total_packs: u64,
    pub method: Method,
}

impl Solved {
    fn new(solution: Solution, method: Method) -> Self {
        Self {
            packs: solution.packs,
            total_items: solution.total_items,
            total_packs: solution.total_packs,
            method,
        }
    }
}

/// Calculate how many packs of each size to ship for `order` items.
///
/// Fails with `InvalidArgument` if the order or any size is not positive.
/// The caller's slice is left untouched.
pub fn calculate_packs(sizes: &[i64], order: i64) -> Result<PackMap> {
    calculate_packs_with(sizes, order, &SolveOptions::default()).map(|solved| solved.packs)
}

/// [`calculate_packs`] with explicit options and full result details.
pub fn calculate_packs_with(sizes: &[i64], order: i64, options: &SolveOptions) -> Result<Solved> {
    validate::validate(sizes, order)?;

    let working = working_sizes(sizes);
    let order = order.unsigned_abs();

    match exact::solve(&working, order, options) {
        Ok(solution) => Ok(Solved::new(solution, Method::Exact)),
        Err(reason) => {
            if working.is_empty() {
                debug!(order, %reason, "no pack sizes, returning empty packing");
            } else {
                warn!(order, %reason, "exact solver unavailable, falling back to heuristic");
            }
            Ok(Solved::new(heuristic::solve(&working, order), Method::Heuristic))
        }
    }
}

/// Private copy of validated sizes: distinct, sorted descending.
fn working_sizes(sizes: &[i64]) -> Vec<u64> {
    let mut working: Vec<u64> = sizes.iter().map(|size| size.unsigned_abs()).collect();
    working.sort_unstable_by(|a, b| b.cmp(a));
    working.dedup();
    working
}
