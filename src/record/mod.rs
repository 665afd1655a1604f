//! Record Module
//!
//! Defines the fixed-width record and its binary codec.
//!
//! ## Record Layout (43 bytes, no header, no delimiters)
//! ```text
//! ┌──────────────────────┬───────────┬───────────┬─────────────────┐
//! │ name (20)            │ count (4) │ price (4) │ category (15)   │
//! │ UTF-8, zero-padded   │ i32 LE    │ f32 LE    │ UTF-8, padded   │
//! └──────────────────────┴───────────┴───────────┴─────────────────┘
//!  0                      20          24          28               43
//! ```
//!
//! A store file is zero or more of these blocks back to back, so its length is
//! always a multiple of [`RECORD_SIZE`].

mod codec;
mod entry;

pub use codec::{decode, encode, truncate_utf8};
pub use entry::{default_dataset, Record};

/// Width of the `name` field in bytes
pub const NAME_WIDTH: usize = 20;

/// Width of the `count` field in bytes
pub const COUNT_WIDTH: usize = 4;

/// Width of the `price` field in bytes
pub const PRICE_WIDTH: usize = 4;

/// Width of the `category` field in bytes
pub const CATEGORY_WIDTH: usize = 15;

/// Total width of one encoded record
pub const RECORD_SIZE: usize = NAME_WIDTH + COUNT_WIDTH + PRICE_WIDTH + CATEGORY_WIDTH;
