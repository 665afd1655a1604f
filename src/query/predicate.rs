//! Search predicates

use crate::error::{FixedRecError, Result};
use crate::record::Record;

use super::{Comparison, Field, FieldFilter};

/// A condition evaluated against every decoded record during a search
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field == value`
    Field(FieldFilter),

    /// Both filters must match
    Both(FieldFilter, FieldFilter),

    /// Format-dispatched numeric comparison
    Comparison(Comparison),
}

impl Predicate {
    pub fn field(field: Field, value: impl Into<String>) -> Self {
        Predicate::Field(FieldFilter::new(field, value))
    }

    /// Two-field conjunction; the same field twice is rejected
    pub fn both(first: FieldFilter, second: FieldFilter) -> Result<Self> {
        if first.field == second.field {
            return Err(FixedRecError::InvalidQuery(format!(
                "field '{}' given twice",
                first.field
            )));
        }
        Ok(Predicate::Both(first, second))
    }

    pub fn comparison(op: &str, literal: &str) -> Result<Self> {
        Comparison::parse(op, literal).map(Predicate::Comparison)
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Field(filter) => filter.matches(record),
            Predicate::Both(a, b) => a.matches(record) && b.matches(record),
            Predicate::Comparison(cmp) => cmp.matches(record),
        }
    }
}
