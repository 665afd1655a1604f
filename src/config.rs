//! Configuration for fixedrec
//!
//! Store-level knobs with sensible defaults. None of them change the on-disk
//! format.

use crate::error::{FixedRecError, Result};

/// Configuration for a [`RecordStore`](crate::RecordStore) handle
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Durability
    // -------------------------------------------------------------------------
    /// When to fsync after a mutation
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Access Control
    // -------------------------------------------------------------------------
    /// Hold an exclusive advisory lock on the file for the handle's lifetime
    pub advisory_lock: bool,

    // -------------------------------------------------------------------------
    // Read Path
    // -------------------------------------------------------------------------
    /// Number of records buffered per read during scans and searches
    pub read_buffer_records: usize,
}

/// Sync strategy for mutating operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Leave flushing to the OS
    Never,

    /// fsync after every initialize/insert/delete
    EveryMutation,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sync_strategy: SyncStrategy::EveryMutation,
            advisory_lock: true,
            read_buffer_records: 64,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Reject values that would make the store unusable
    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_records == 0 {
            return Err(FixedRecError::Config(
                "read_buffer_records must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Enable or disable the exclusive advisory lock
    pub fn advisory_lock(mut self, enabled: bool) -> Self {
        self.config.advisory_lock = enabled;
        self
    }

    /// Set how many records a scan buffers per read
    pub fn read_buffer_records(mut self, count: usize) -> Self {
        self.config.read_buffer_records = count;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
