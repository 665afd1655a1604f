//! Store Module
//!
//! A flat file of concatenated fixed-size records, addressed by position.
//!
//! ## Responsibilities
//! - Validate that the file length is a multiple of the record width
//! - Stream records without loading the file ([`ScanIter`])
//! - Positional insert/delete by shifting records one slot at a time
//! - Field and comparison searches over a single streaming pass
//!
//! ## Addressing
//! ```text
//! position:   1         2         3               n
//!           ┌─────────┬─────────┬─────────┬─────┬─────────┐
//!           │ rec (43)│ rec (43)│ rec (43)│ ... │ rec (43)│
//!           └─────────┴─────────┴─────────┴─────┴─────────┘
//! offset:     0         43        86              (n-1)*43
//! ```
//!
//! Every operation re-reads the file length; nothing about the contents is
//! cached on the handle.

mod scan;
mod search;
mod shift;

pub use scan::{ScanEntry, ScanIter};
pub use search::{Match, Matches};

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, info, warn};

use crate::config::{StoreConfig, SyncStrategy};
use crate::error::{FixedRecError, Result};
use crate::record::{self, Record, RECORD_SIZE};

/// Record width as a file offset quantity
pub const RECORD_WIDTH: u64 = RECORD_SIZE as u64;

/// Handle to a fixed-record file
///
/// ## Access Model
/// Single writer, one operation at a time. Mutations take `&mut self`, so a
/// live scan or search (which borrows the handle) cannot overlap one. With
/// `advisory_lock` enabled other processes honouring the lock are kept out for
/// the handle's lifetime.
#[derive(Debug)]
pub struct RecordStore {
    /// Backing file path (scans re-open it)
    path: PathBuf,

    /// Read/write handle used for mutations
    file: File,

    config: StoreConfig,
}

impl RecordStore {
    /// Open or create a store file
    ///
    /// Existing contents are left untouched, even if the length is
    /// inconsistent; that is reported by the operations that care.
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let path = path.as_ref();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        if config.advisory_lock {
            FileExt::try_lock_exclusive(&file).map_err(|e| {
                FixedRecError::Locked(format!("{}: {}", path.display(), e))
            })?;
        }

        let len = file.metadata()?.len();
        if len % RECORD_WIDTH != 0 {
            warn!(
                path = %path.display(),
                len,
                "Store length is not a multiple of the record width"
            );
        }
        info!(path = %path.display(), records = len / RECORD_WIDTH, "Opened store");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            config,
        })
    }

    /// Truncate the file and write `records` back to back
    ///
    /// Returns the number of records written.
    pub fn initialize<'a, I>(&mut self, records: I) -> Result<u64>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        self.file.set_len(0)?;
        (&self.file).seek(SeekFrom::Start(0))?;

        let mut writer = BufWriter::new(&self.file);
        let mut count = 0u64;
        for record in records {
            writer.write_all(&record::encode(record))?;
            count += 1;
        }
        writer.flush()?;
        drop(writer);

        self.sync()?;
        info!(path = %self.path.display(), records = count, "Initialized store");
        Ok(count)
    }

    /// Number of complete records, validating the file length
    pub fn record_count(&self) -> Result<u64> {
        let len = self.file_len()?;
        if len % RECORD_WIDTH != 0 {
            warn!(len, width = RECORD_WIDTH, "Size inconsistency detected");
            return Err(FixedRecError::SizeInconsistency {
                len,
                width: RECORD_WIDTH,
            });
        }
        Ok(len / RECORD_WIDTH)
    }

    /// Read the record at a 1-based position
    pub fn get(&self, position: u64) -> Result<Record> {
        let n = self.record_count()?;
        check_existing(position, n)?;
        Ok(record::decode(&self.read_block(position)?))
    }

    /// Iterate over every record from the start of the file
    ///
    /// Each call opens a fresh read handle at offset 0. A trailing partial
    /// record ends the iteration with [`ScanEntry::Corrupt`].
    pub fn scan(&self) -> Result<ScanIter<'_>> {
        let file = File::open(&self.path)?;
        Ok(ScanIter::new(file, self.config.read_buffer_records))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn file_len(&self) -> Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn read_block(&self, position: u64) -> Result<[u8; RECORD_SIZE]> {
        let mut handle = &self.file;
        handle.seek(SeekFrom::Start(offset_of(position)))?;

        let mut block = [0u8; RECORD_SIZE];
        handle.read_exact(&mut block)?;
        Ok(block)
    }

    fn write_block(&self, position: u64, block: &[u8; RECORD_SIZE]) -> Result<()> {
        let mut handle = &self.file;
        handle.seek(SeekFrom::Start(offset_of(position)))?;
        handle.write_all(block)?;
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        if self.config.sync_strategy == SyncStrategy::EveryMutation {
            self.file.sync_all()?;
            debug!("Synced store to disk");
        }
        Ok(())
    }
}

impl Drop for RecordStore {
    fn drop(&mut self) {
        if self.config.advisory_lock {
            let _ = FileExt::unlock(&self.file);
        }
    }
}

/// Byte offset of a 1-based position
fn offset_of(position: u64) -> u64 {
    (position - 1) * RECORD_WIDTH
}

/// `position` must name an existing record in a store of `n` records
fn check_existing(position: u64, n: u64) -> Result<()> {
    if n == 0 {
        return Err(FixedRecError::EmptyStore);
    }
    if position == 0 || position > n {
        return Err(FixedRecError::PositionOutOfRange { position, max: n });
    }
    Ok(())
}
