//! Comparison queries
//!
//! A comparison never names its field. The literal's lexical form decides:
//! a literal containing [`FRACTIONAL_SEPARATOR`] targets `price` (parsed as
//! `f64`), anything else targets `count` (parsed as an integer of any size).
//! This rule is part of the query language and must not be "fixed" here;
//! callers wanting an explicit field should use [`Field`] filters instead.
//!
//! Stored values are widened before comparing: `i32` counts to `i64`, `f32`
//! prices to `f64`.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{FixedRecError, Result};
use crate::record::Record;

use super::Field;

/// Character whose presence routes a literal to the `price` field
pub const FRACTIONAL_SEPARATOR: char = '.';

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Greater,
    Less,
    Equal,
}

impl CompareOp {
    /// Evaluate `lhs <op> rhs`
    pub fn holds<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            CompareOp::Greater => lhs > rhs,
            CompareOp::Less => lhs < rhs,
            CompareOp::Equal => lhs == rhs,
        }
    }
}

impl FromStr for CompareOp {
    type Err = FixedRecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            ">" => Ok(CompareOp::Greater),
            "<" => Ok(CompareOp::Less),
            "=" => Ok(CompareOp::Equal),
            other => Err(FixedRecError::InvalidQuery(format!(
                "unknown operator '{}' (expected >, < or =)",
                other
            ))),
        }
    }
}

/// The field and parsed operand selected by a comparison literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonTarget {
    /// Integer operand; literals beyond `i64` saturate, which keeps every
    /// comparison against an `i32` count correct
    Count(i64),
    Price(f64),
}

impl ComparisonTarget {
    /// Format-driven field dispatch
    ///
    /// `"5"` compares against `count`, `"5.0"` against `price`.
    pub fn from_literal(literal: &str) -> Result<Self> {
        let literal = literal.trim();

        if literal.contains(FRACTIONAL_SEPARATOR) {
            return literal
                .parse::<f64>()
                .map(ComparisonTarget::Price)
                .map_err(|_| {
                    FixedRecError::InvalidQuery(format!("'{}' is not a valid price", literal))
                });
        }

        match literal.parse::<i64>() {
            Ok(v) => Ok(ComparisonTarget::Count(v)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(ComparisonTarget::Count(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(ComparisonTarget::Count(i64::MIN)),
                _ => Err(FixedRecError::InvalidQuery(format!(
                    "'{}' is not a valid count",
                    literal
                ))),
            },
        }
    }

    /// Field this target compares against
    pub fn field(&self) -> Field {
        match self {
            ComparisonTarget::Count(_) => Field::Count,
            ComparisonTarget::Price(_) => Field::Price,
        }
    }
}

/// `<field chosen by literal> <op> <literal>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub op: CompareOp,
    pub target: ComparisonTarget,
}

impl Comparison {
    /// Parse an operator and literal, rejecting either if malformed
    pub fn parse(op: &str, literal: &str) -> Result<Self> {
        Ok(Self {
            op: op.parse()?,
            target: ComparisonTarget::from_literal(literal)?,
        })
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self.target {
            ComparisonTarget::Count(v) => self.op.holds(i64::from(record.count), v),
            ComparisonTarget::Price(v) => self.op.holds(f64::from(record.price), v),
        }
    }
}
