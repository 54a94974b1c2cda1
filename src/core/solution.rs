//! Pack solutions and the ordering used to choose between them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pack size to number of packs of that size.
pub type PackMap = BTreeMap<u64, u64>;

/// The two objectives of a packing, compared lexicographically:
/// fewer items shipped first, then fewer packs.
///
/// Field order matters: the derived `Ord` compares `total_items` before
/// `total_packs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score {
    pub total_items: u64,
    pub total_packs: u64,
}

impl Score {
    #[must_use]
    pub const fn new(total_items: u64, total_packs: u64) -> Self {
        Self {
            total_items,
            total_packs,
        }
    }

    /// Score of an arbitrary pack mapping.
    #[must_use]
    pub fn of(packs: &PackMap) -> Self {
        packs
            .iter()
            .fold(Self::new(0, 0), |acc, (&size, &count)| Self {
                total_items: acc.total_items.saturating_add(size.saturating_mul(count)),
                total_packs: acc.total_packs.saturating_add(count),
            })
    }

    /// Strict "better than" test.
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }
}

/// A feasible packing with its derived totals.
///
/// Zero-count entries are never kept in `packs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub packs: PackMap,
    pub total_items: u64,
    pub total_packs: u64,
}

impl Solution {
    #[must_use]
    pub fn from_packs(mut packs: PackMap) -> Self {
        packs.retain(|_, count| *count > 0);
        let score = Score::of(&packs);
        Self {
            packs,
            total_items: score.total_items,
            total_packs: score.total_packs,
        }
    }

    #[must_use]
    pub const fn score(&self) -> Score {
        Score::new(self.total_items, self.total_packs)
    }

    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.score().is_better_than(&other.score())
    }
}
