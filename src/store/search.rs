//! Store searches
//!
//! Every search is one streaming pass over [`ScanIter`] with a [`Predicate`].

use tracing::debug;

use crate::error::{FixedRecError, Result};
use crate::query::{Field, FieldFilter, Predicate};
use crate::record::Record;

use super::{RecordStore, ScanEntry, ScanIter};

/// A matching record and its 1-based position
pub type Match = (u64, Record);

/// Iterator over records satisfying a predicate, in file order
///
/// A truncated tail is reported as a final `Err(CorruptRecord)`.
pub struct Matches<'a> {
    scan: ScanIter<'a>,
    predicate: Predicate,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Result<Match>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.scan.next()? {
                Ok(ScanEntry::Record { position, record }) => {
                    if self.predicate.matches(&record) {
                        return Some(Ok((position, record)));
                    }
                }
                Ok(ScanEntry::Corrupt {
                    position,
                    bytes_read,
                }) => {
                    return Some(Err(FixedRecError::CorruptRecord {
                        position,
                        bytes_read,
                    }))
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl RecordStore {
    /// Stream records matching an arbitrary predicate
    ///
    /// Fails with `EmptyStore` when the file holds no bytes at all.
    pub fn find(&self, predicate: Predicate) -> Result<Matches<'_>> {
        if self.file_len()? == 0 {
            return Err(FixedRecError::EmptyStore);
        }
        debug!(?predicate, "Starting search");
        Ok(Matches {
            scan: self.scan()?,
            predicate,
        })
    }

    /// Records whose `field` equals `value`
    pub fn find_by_field(&self, field: Field, value: &str) -> Result<Matches<'_>> {
        self.find(Predicate::field(field, value))
    }

    /// Records matching both `field1 == value1` and `field2 == value2`
    ///
    /// The same field twice is an `InvalidQuery`.
    pub fn find_by_two_fields(
        &self,
        field1: Field,
        value1: &str,
        field2: Field,
        value2: &str,
    ) -> Result<Matches<'_>> {
        let predicate = Predicate::both(
            FieldFilter::new(field1, value1),
            FieldFilter::new(field2, value2),
        )?;
        self.find(predicate)
    }

    /// Records where `<field> <op> <literal>` holds
    ///
    /// The field is chosen by the literal's format: see
    /// [`ComparisonTarget::from_literal`](crate::query::ComparisonTarget::from_literal).
    pub fn find_by_comparison(&self, op: &str, literal: &str) -> Result<Matches<'_>> {
        let predicate = Predicate::comparison(op, literal)?;
        self.find(predicate)
    }
}
