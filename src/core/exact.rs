//! Exact solver: dynamic programming over achievable item counts.
//!
//! `table[i]` holds the fewest-packs way to ship exactly `i` items, if any.
//! Entries only record the last pack added and where it was added from, so
//! the table costs O(order) memory and the final mapping is rebuilt with one
//! walk back to `table[0]`.
//!
//! The table stops at `order + smallest size`: some multiple of the smallest
//! size always lands in `[order, order + smallest)`, so no larger total can be
//! the minimum.

use thiserror::Error;
use tracing::debug;

use super::calculator::SolveOptions;
use super::solution::{PackMap, Score, Solution};

/// Why the exact solver produced no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Infeasible {
    #[error("no pack sizes available")]
    NoSizes,

    #[error("table for order {order} does not fit in memory")]
    Unaddressable { order: u64 },

    #[error("table needs {required} entries, limit is {limit}")]
    TableTooLarge { required: usize, limit: usize },

    #[error("table needs {required} steps, limit is {limit}")]
    TooMuchWork { required: u64, limit: u64 },

    #[error("no feasible item count between {from} and {to}")]
    NoFeasibleCount { from: usize, to: usize },
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    size: u64,
    prev: usize,
    packs: u64,
}

/// Solve exactly. `sizes` must be distinct, positive and sorted descending.
///
/// `limits.max_table_len` caps the number of table entries and
/// `limits.max_work` caps table entries times sizes; exceeding either is
/// reported without allocating.
pub fn solve(sizes: &[u64], order: u64, limits: &SolveOptions) -> Result<Solution, Infeasible> {
    let Some(&smallest) = sizes.last() else {
        return Err(Infeasible::NoSizes);
    };

    let len = order
        .checked_add(smallest)
        .and_then(|max_items| usize::try_from(max_items).ok())
        .and_then(|max_items| max_items.checked_add(1))
        .ok_or(Infeasible::Unaddressable { order })?;
    if let Some(limit) = limits.max_table_len
        && len > limit
    {
        return Err(Infeasible::TableTooLarge {
            required: len,
            limit,
        });
    }
    let work = (len as u64).saturating_mul(sizes.len() as u64);
    if let Some(limit) = limits.max_work
        && work > limit
    {
        return Err(Infeasible::TooMuchWork {
            required: work,
            limit,
        });
    }
    // Fits: order < len.
    let order = order as usize;

    debug!(order, table_len = len, sizes = sizes.len(), "building pack table");

    let mut table: Vec<Option<Entry>> = vec![None; len];
    table[0] = Some(Entry {
        size: 0,
        prev: 0,
        packs: 0,
    });

    for items in 1..len {
        let mut best: Option<Entry> = None;
        for &size in sizes {
            if size > items as u64 {
                continue;
            }
            let prev = items - size as usize;
            let Some(base) = table[prev] else {
                continue;
            };
            let candidate = Entry {
                size,
                prev,
                packs: base.packs + 1,
            };
            let improves = best.is_none_or(|current| {
                Score::new(items as u64, candidate.packs)
                    .is_better_than(&Score::new(items as u64, current.packs))
            });
            if improves {
                best = Some(candidate);
            }
        }
        table[items] = best;
    }

    // First feasible count at or above the order is the minimal total.
    let chosen = (order..len)
        .find(|&items| table[items].is_some())
        .ok_or(Infeasible::NoFeasibleCount {
            from: order,
            to: len - 1,
        })?;

    let mut packs = PackMap::new();
    let mut cursor = chosen;
    while cursor > 0 {
        let Some(entry) = table[cursor] else {
            break;
        };
        *packs.entry(entry.size).or_insert(0) += 1;
        cursor = entry.prev;
    }

    let solution = Solution::from_packs(packs);
    debug!(
        total_items = solution.total_items,
        total_packs = solution.total_packs,
        "exact solution selected"
    );
    Ok(solution)
}
