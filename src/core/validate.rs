//! Input validation for pack calculations.

use crate::error::{PackError, Result};

/// Reject a non-positive order or any non-positive pack size.
///
/// The order is checked first, so it is the value reported when both are bad.
/// An empty size list is accepted.
pub fn validate(sizes: &[i64], order: i64) -> Result<()> {
    if order <= 0 {
        return Err(PackError::non_positive_order(order));
    }
    validate_sizes(sizes)
}

/// Reject any non-positive pack size, reporting the first offender.
pub fn validate_sizes(sizes: &[i64]) -> Result<()> {
    match sizes.iter().find(|&&size| size <= 0) {
        Some(&size) => Err(PackError::non_positive_size(size)),
        None => Ok(()),
    }
}
