//! Field selectors and equality filters

use std::fmt;
use std::str::FromStr;

use crate::error::{FixedRecError, Result};
use crate::record::Record;

/// One of the four record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Count,
    Price,
    Category,
}

impl Field {
    /// All fields in on-disk order
    pub const ALL: [Field; 4] = [Field::Name, Field::Count, Field::Price, Field::Category];

    /// Lowercase selector used in queries
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Count => "count",
            Field::Price => "price",
            Field::Category => "category",
        }
    }

    /// Compare this field of `record` against a textual value
    ///
    /// Text fields use exact equality on the decoded text. Numeric fields
    /// parse `value` first; a value that does not parse never matches.
    /// Prices are widened to `f64` and compared against an `f64` parse, so a
    /// value that is not representable as `f32` does not match its rounding.
    pub fn matches(&self, record: &Record, value: &str) -> bool {
        match self {
            Field::Name => record.name == value,
            Field::Category => record.category == value,
            Field::Count => value
                .trim()
                .parse::<i64>()
                .map_or(false, |v| i64::from(record.count) == v),
            Field::Price => value
                .trim()
                .parse::<f64>()
                .map_or(false, |v| f64::from(record.price) == v),
        }
    }
}

impl FromStr for Field {
    type Err = FixedRecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "count" => Ok(Field::Count),
            "price" => Ok(Field::Price),
            "category" => Ok(Field::Category),
            other => Err(FixedRecError::InvalidQuery(format!(
                "unknown field '{}' (expected name, count, price or category)",
                other
            ))),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `field == value` condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: Field,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.field.matches(record, &self.value)
    }
}
