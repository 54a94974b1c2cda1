//! Calculations backed by a pack size provider.

use tracing::{debug, info};

use super::calculator::{SolveOptions, Solved, calculate_packs_with};
use super::validate::validate_sizes;
use crate::error::Result;

/// Source and sink of the available pack sizes.
///
/// Implementations own their error reporting; errors pass through the
/// functions below unchanged.
pub trait PackSizeProvider: Send + Sync {
    /// Current pack sizes, in any order.
    fn pack_sizes(&self) -> Result<Vec<i64>>;

    /// Replace the pack sizes with `sizes`.
    fn store_pack_sizes(&self, sizes: &[i64]) -> Result<()>;
}

/// Calculate packs for `order` using the provider's sizes.
///
/// Returns the result and the sizes in ascending order for display.
pub fn calculate_packs_with_provider<P>(
    provider: &P,
    order: i64,
    options: &SolveOptions,
) -> Result<(Solved, Vec<i64>)>
where
    P: PackSizeProvider + ?Sized,
{
    let mut sizes = provider.pack_sizes()?;
    debug!(order, sizes = ?sizes, "calculating with provider sizes");

    let solved = calculate_packs_with(&sizes, order, options)?;

    sizes.sort_unstable();
    Ok((solved, sizes))
}

/// Validate and store a new set of pack sizes.
pub fn save_pack_sizes<P>(provider: &P, sizes: &[i64]) -> Result<()>
where
    P: PackSizeProvider + ?Sized,
{
    validate_sizes(sizes)?;
    provider.store_pack_sizes(sizes)?;
    info!(count = sizes.len(), "pack sizes saved");
    Ok(())
}
