//! Positional insert and delete
//!
//! Both operations move records one slot at a time with plain seeks. Insert
//! walks from the last record down so nothing is overwritten before it has
//! been copied; delete walks upward for the same reason. A crash mid-shift can
//! leave a duplicated or missing record.

use tracing::debug;

use crate::error::{FixedRecError, Result};
use crate::record::{self, Record};

use super::{check_existing, RecordStore, RECORD_WIDTH};

impl RecordStore {
    /// Insert `record` at `position` (1..=n+1), shifting later records up
    ///
    /// Bounds and file length are validated before any byte is written.
    pub fn insert_at(&mut self, position: u64, record: &Record) -> Result<()> {
        let n = self.record_count()?;
        if position == 0 || position > n + 1 {
            return Err(FixedRecError::PositionOutOfRange {
                position,
                max: n + 1,
            });
        }

        let block = record::encode(record);

        for slot in (position..=n).rev() {
            let moved = self.read_block(slot)?;
            self.write_block(slot + 1, &moved)?;
        }
        self.write_block(position, &block)?;

        self.sync()?;
        debug!(position, shifted = n + 1 - position, "Inserted record");
        Ok(())
    }

    /// Append `record` after the last one
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let n = self.record_count()?;
        self.insert_at(n + 1, record)
    }

    /// Remove the record at `position` (1..=n), shifting later records down
    ///
    /// Returns the removed record. The file shrinks by exactly one record.
    pub fn delete_at(&mut self, position: u64) -> Result<Record> {
        let n = self.record_count()?;
        check_existing(position, n)?;

        let removed = record::decode(&self.read_block(position)?);

        for slot in position + 1..=n {
            let moved = self.read_block(slot)?;
            self.write_block(slot - 1, &moved)?;
        }
        self.file.set_len((n - 1) * RECORD_WIDTH)?;

        self.sync()?;
        debug!(position, shifted = n - position, "Deleted record");
        Ok(removed)
    }
}
