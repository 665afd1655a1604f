//! Store scanning
//!
//! Sequential iteration over all records in file order.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::marker::PhantomData;

use tracing::warn;

use crate::error::Result;
use crate::record::{self, Record, RECORD_SIZE};

use super::RecordStore;

/// One item produced by a scan
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEntry {
    /// A complete record at a 1-based position
    Record { position: u64, record: Record },

    /// Trailing partial record; always the last item of a scan
    Corrupt { position: u64, bytes_read: usize },
}

/// Iterator over store records in position order
///
/// Borrows the store so a mutation cannot run while a scan is live.
pub struct ScanIter<'a> {
    reader: BufReader<File>,
    /// Position of the last item produced
    position: u64,
    done: bool,
    _store: PhantomData<&'a RecordStore>,
}

impl<'a> ScanIter<'a> {
    pub(super) fn new(file: File, buffer_records: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(buffer_records * RECORD_SIZE, file),
            position: 0,
            done: false,
            _store: PhantomData,
        }
    }
}

impl<'a> Iterator for ScanIter<'a> {
    type Item = Result<ScanEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut block = [0u8; RECORD_SIZE];
        let filled = match read_full(&mut self.reader, &mut block) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };

        if filled == 0 {
            self.done = true;
            return None;
        }

        self.position += 1;

        if filled < RECORD_SIZE {
            self.done = true;
            warn!(
                position = self.position,
                bytes_read = filled,
                "Truncated record at end of store"
            );
            return Some(Ok(ScanEntry::Corrupt {
                position: self.position,
                bytes_read: filled,
            }));
        }

        Some(Ok(ScanEntry::Record {
            position: self.position,
            record: record::decode(&block),
        }))
    }
}

/// Fill `buf` as far as the reader allows, returning the byte count
///
/// Unlike `read_exact`, a short read at end of file is not an error.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
