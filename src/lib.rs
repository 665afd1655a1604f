//! # fixedrec
//!
//! A fixed-record-length binary file store with:
//! - A constant 43-byte record layout, no header or delimiters
//! - Positional insert/delete by in-place record shifting
//! - Size-consistency validation before any mutation
//! - Streaming scans and searches that flag truncated tails
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Caller                               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    RecordStore                               │
//! │   scan / insert_at / delete_at / find_by_* (offset seeks)    │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  Record Codec   │                │     Query       │
//!   │ (encode/decode) │                │  (predicates)   │
//!   └────────┬────────┘                └─────────────────┘
//!            │
//!            ▼
//!   ┌─────────────────┐
//!   │  Flat file of   │
//!   │ 43-byte records │
//!   └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod query;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FixedRecError, Result};
pub use config::{StoreConfig, SyncStrategy};
pub use record::{Record, RECORD_SIZE};
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fixedrec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
