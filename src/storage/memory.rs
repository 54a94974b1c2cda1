//! In-process pack size store

use parking_lot::RwLock;

use crate::core::PackSizeProvider;
use crate::error::Result;

/// Pack sizes held in memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sizes: RwLock<Vec<i64>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(sizes: impl Into<Vec<i64>>) -> Self {
        Self {
            sizes: RwLock::new(sizes.into()),
        }
    }
}

impl PackSizeProvider for MemoryStore {
    fn pack_sizes(&self) -> Result<Vec<i64>> {
        Ok(self.sizes.read().clone())
    }

    fn store_pack_sizes(&self, sizes: &[i64]) -> Result<()> {
        let mut stored = sizes.to_vec();
        stored.sort_unstable();
        stored.dedup();
        *self.sizes.write() = stored;
        Ok(())
    }
}
