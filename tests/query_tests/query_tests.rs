//! Tests for query predicates
//!
//! These tests verify:
//! - Field selector parsing
//! - Field-appropriate equality (text vs integer vs float)
//! - Format-driven comparison dispatch
//! - Rejection of malformed operators, literals and duplicate fields

use fixedrec::query::{
    CompareOp, Comparison, ComparisonTarget, Field, FieldFilter, Predicate,
};
use fixedrec::{FixedRecError, Record};

fn apple() -> Record {
    Record::new("apple", 10, 3.5, "fruit")
}

// =============================================================================
// Field Parsing Tests
// =============================================================================

#[test]
fn test_parse_fields() {
    assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
    assert_eq!("COUNT".parse::<Field>().unwrap(), Field::Count);
    assert_eq!(" price ".parse::<Field>().unwrap(), Field::Price);
    assert_eq!("category".parse::<Field>().unwrap(), Field::Category);
}

#[test]
fn test_parse_unknown_field() {
    let err = "colour".parse::<Field>().unwrap_err();
    assert!(matches!(err, FixedRecError::InvalidQuery(_)));
}

#[test]
fn test_field_display_round_trips() {
    for field in Field::ALL {
        assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
    }
}

// =============================================================================
// Field Equality Tests
// =============================================================================

#[test]
fn test_text_fields_exact_match() {
    let r = apple();
    assert!(Field::Name.matches(&r, "apple"));
    assert!(!Field::Name.matches(&r, "Apple"));
    assert!(!Field::Name.matches(&r, "appl"));
    assert!(Field::Category.matches(&r, "fruit"));
}

#[test]
fn test_count_match_parses_integer() {
    let r = apple();
    assert!(Field::Count.matches(&r, "10"));
    assert!(!Field::Count.matches(&r, "11"));
    assert!(!Field::Count.matches(&r, "ten"));
    assert!(!Field::Count.matches(&r, "10.0"));
    assert!(!Field::Count.matches(&r, "99999999999"));
}

#[test]
fn test_price_match_parses_float() {
    let r = apple();
    assert!(Field::Price.matches(&r, "3.5"));
    assert!(Field::Price.matches(&r, "3.50"));
    assert!(!Field::Price.matches(&r, "3.4"));
    assert!(!Field::Price.matches(&r, "cheap"));
}

// =============================================================================
// Comparison Tests
// =============================================================================

#[test]
fn test_integer_literal_targets_count() {
    assert_eq!(
        ComparisonTarget::from_literal("5").unwrap(),
        ComparisonTarget::Count(5)
    );
    assert_eq!(ComparisonTarget::from_literal("-3").unwrap().field(), Field::Count);
}

#[test]
fn test_fractional_literal_targets_price() {
    assert_eq!(
        ComparisonTarget::from_literal("5.0").unwrap(),
        ComparisonTarget::Price(5.0)
    );
    assert_eq!(ComparisonTarget::from_literal("5.").unwrap().field(), Field::Price);
}

#[test]
fn test_literal_beyond_i32_is_still_a_count() {
    assert_eq!(
        ComparisonTarget::from_literal("99999999999").unwrap(),
        ComparisonTarget::Count(99_999_999_999)
    );
    assert_eq!(
        ComparisonTarget::from_literal("-99999999999999999999999").unwrap().field(),
        Field::Count
    );
}

#[test]
fn test_price_compared_in_f64() {
    let r = Record::new("pen", 1, 3.1, "office");

    // 3.1f32 widens to 3.0999999046..., which is below the f64 literal 3.1
    assert!(Comparison::parse("<", "3.1").unwrap().matches(&r));
    assert!(!Comparison::parse("=", "3.1").unwrap().matches(&r));
    assert!(!Field::Price.matches(&r, "3.1"));
    assert!(Field::Price.matches(&r, &f64::from(3.1f32).to_string()));
}

#[test]
fn test_malformed_literals_rejected() {
    for literal in ["abc", "1.2.3", "", "5,0"] {
        let err = ComparisonTarget::from_literal(literal).unwrap_err();
        assert!(matches!(err, FixedRecError::InvalidQuery(_)), "{literal}");
    }
}

#[test]
fn test_parse_operators() {
    assert_eq!(">".parse::<CompareOp>().unwrap(), CompareOp::Greater);
    assert_eq!("<".parse::<CompareOp>().unwrap(), CompareOp::Less);
    assert_eq!("=".parse::<CompareOp>().unwrap(), CompareOp::Equal);
    assert!(matches!(
        ">=".parse::<CompareOp>(),
        Err(FixedRecError::InvalidQuery(_))
    ));
}

#[test]
fn test_comparison_matches() {
    let r = apple();
    assert!(Comparison::parse(">", "5").unwrap().matches(&r));
    assert!(!Comparison::parse("<", "5").unwrap().matches(&r));
    assert!(Comparison::parse("=", "10").unwrap().matches(&r));
    assert!(Comparison::parse("<", "5.0").unwrap().matches(&r));
    assert!(Comparison::parse("=", "3.5").unwrap().matches(&r));
    assert!(!Comparison::parse(">", "3.5").unwrap().matches(&r));
}

// =============================================================================
// Predicate Tests
// =============================================================================

#[test]
fn test_predicate_both_requires_distinct_fields() {
    let err = Predicate::both(
        FieldFilter::new(Field::Name, "a"),
        FieldFilter::new(Field::Name, "b"),
    )
    .unwrap_err();
    assert!(matches!(err, FixedRecError::InvalidQuery(_)));
}

#[test]
fn test_predicate_both_is_conjunction() {
    let r = apple();
    let hit = Predicate::both(
        FieldFilter::new(Field::Name, "apple"),
        FieldFilter::new(Field::Count, "10"),
    )
    .unwrap();
    let miss = Predicate::both(
        FieldFilter::new(Field::Name, "apple"),
        FieldFilter::new(Field::Count, "2"),
    )
    .unwrap();

    assert!(hit.matches(&r));
    assert!(!miss.matches(&r));
}
