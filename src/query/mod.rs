//! Query Module
//!
//! Record predicates used by the store's search operations.
//!
//! ## Responsibilities
//! - Parse field selectors (`name`, `count`, `price`, `category`)
//! - Field-appropriate equality between a record and a textual value
//! - Comparison queries whose target field is chosen by the literal's format

mod comparison;
mod field;
mod predicate;

pub use comparison::{CompareOp, Comparison, ComparisonTarget, FRACTIONAL_SEPARATOR};
pub use field::{Field, FieldFilter};
pub use predicate::Predicate;
