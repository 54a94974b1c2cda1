//! Greedy fallback used when the exact table cannot be built.
//!
//! Always ships at least the order (for a non-empty size list) but is not
//! guaranteed to find the minimal total or pack count.

use tracing::debug;

use super::solution::{PackMap, Solution};

/// Greedy fill, one patch pack, then at most one merge into a larger size.
/// `sizes` must be distinct, positive and sorted descending.
#[must_use]
pub fn solve(sizes: &[u64], order: u64) -> Solution {
    let mut packs = fill(sizes, order);
    merge_once(sizes, &mut packs);
    Solution::from_packs(packs)
}

/// Take as many of each size as fit, largest first, then top up with the
/// smallest single pack that covers the shortfall.
fn fill(sizes: &[u64], order: u64) -> PackMap {
    let mut packs = PackMap::new();
    let mut sum = 0u64;

    for &size in sizes {
        if sum >= order {
            break;
        }
        let rest = order - sum;
        if size > rest {
            continue;
        }
        let count = rest / size;
        packs.insert(size, count);
        sum += count * size;
    }

    if sum < order {
        let rest = order - sum;
        if let Some(&size) = sizes.iter().rev().find(|&&size| size > rest) {
            *packs.entry(size).or_insert(0) += 1;
        }
    }

    packs
}

/// Walk sizes smallest first; the first time the running total divides evenly
/// into the next larger size with fewer packs, replace every size up to the
/// current one with that larger size and stop.
fn merge_once(sizes: &[u64], packs: &mut PackMap) {
    let mut qty = 0u64;
    let mut sum = 0u64;

    for (idx, &size) in sizes.iter().enumerate().rev() {
        let Some(&count) = packs.get(&size) else {
            continue;
        };
        qty += count;
        sum += size * count;

        let Some(&next) = idx.checked_sub(1).and_then(|i| sizes.get(i)) else {
            break;
        };
        if sum % next == 0 && sum / next < qty {
            debug!(
                from = size,
                into = next,
                packs_before = qty,
                packs_after = sum / next,
                "merging packs"
            );
            packs.retain(|&kept, _| kept > size);
            // Existing packs of `next` are not part of `sum`; add to them.
            *packs.entry(next).or_insert(0) += sum / next;
            break;
        }
    }
}
