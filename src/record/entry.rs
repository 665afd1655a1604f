//! Record definition
//!
//! The structured value stored in every 43-byte slot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single fixed-size entry in the store
///
/// Field values are unrestricted here; overlong text is truncated on encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Item name (at most 20 bytes on disk)
    pub name: String,

    /// Quantity
    pub count: i32,

    /// Unit price
    pub price: f32,

    /// Category label (at most 15 bytes on disk)
    pub category: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        count: i32,
        price: f32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            count,
            price,
            category: category.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.name, self.count, self.price, self.category
        )
    }
}

/// The three records a store is seeded with when no records are supplied
pub fn default_dataset() -> Vec<Record> {
    vec![
        Record::new("яблоко", 10, 3.5, "фрукт"),
        Record::new("книга", 2, 799.0, "товар"),
        Record::new("ноутбук", 1, 89999.99, "техника"),
    ]
}
