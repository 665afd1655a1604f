//! Tests for the record codec
//!
//! These tests verify:
//! - Exact 43-byte layout and field offsets
//! - Round trip for values that fit
//! - UTF-8-safe truncation of overlong text (lossy round trip)
//! - Invalid UTF-8 dropped on decode, including byte-cut characters
//! - The built-in default dataset

use fixedrec::record::{
    decode, default_dataset, encode, truncate_utf8, CATEGORY_WIDTH, NAME_WIDTH, RECORD_SIZE,
};
use fixedrec::Record;

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_record_size_is_43() {
    assert_eq!(RECORD_SIZE, 43);
}

#[test]
fn test_encode_field_offsets() {
    let record = Record::new("apple", 10, 3.5, "fruit");
    let block = encode(&record);

    assert_eq!(&block[0..5], b"apple");
    assert!(block[5..20].iter().all(|&b| b == 0));
    assert_eq!(&block[20..24], &10i32.to_le_bytes());
    assert_eq!(&block[24..28], &3.5f32.to_le_bytes());
    assert_eq!(&block[28..33], b"fruit");
    assert!(block[33..43].iter().all(|&b| b == 0));
}

#[test]
fn test_encode_negative_count_little_endian() {
    let block = encode(&Record::new("x", -2, -0.25, "y"));
    assert_eq!(&block[20..24], &[0xFE, 0xFF, 0xFF, 0xFF]);
    assert_eq!(&block[24..28], &(-0.25f32).to_le_bytes());
}

#[test]
fn test_encode_empty_text_is_all_zero() {
    let block = encode(&Record::new("", 0, 0.0, ""));
    assert_eq!(block, [0u8; RECORD_SIZE]);
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_round_trip_fitting_values() {
    let records = [
        Record::new("apple", 10, 3.5, "fruit"),
        Record::new("book", 2, 799.0, "goods"),
        Record::new("", i32::MIN, f32::MAX, ""),
        Record::new("exactly-twenty-bytes", i32::MAX, -1.5, "fifteen-bytes!!"),
        Record::new("café", 7, 0.1, "naïve"),
    ];

    for record in &records {
        assert_eq!(&decode(&encode(record)), record);
    }
}

#[test]
fn test_round_trip_preserves_interior_zero() {
    let record = Record::new("a\0b", 1, 1.0, "c");
    assert_eq!(decode(&encode(&record)), record);
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_long_name_is_truncated() {
    let record = Record::new("a-very-long-product-name-indeed", 1, 2.0, "misc");
    let decoded = decode(&encode(&record));

    assert_eq!(decoded.name, "a-very-long-product-");
    assert_eq!(decoded.name.len(), NAME_WIDTH);
    assert_eq!(decoded.count, 1);
    assert_eq!(decoded.category, "misc");
}

#[test]
fn test_long_category_is_truncated() {
    let record = Record::new("pen", 1, 2.0, "office-supplies-and-more");
    let decoded = decode(&encode(&record));

    assert_eq!(decoded.category, "office-supplies");
    assert_eq!(decoded.category.len(), CATEGORY_WIDTH);
}

#[test]
fn test_truncation_respects_char_boundary() {
    // 19 ASCII bytes then a 2-byte character that would straddle byte 20
    let name = format!("{}é", "a".repeat(19));
    let decoded = decode(&encode(&Record::new(name, 0, 0.0, "")));

    assert_eq!(decoded.name, "a".repeat(19));
}

#[test]
fn test_truncation_multibyte_only() {
    let name = "é".repeat(11); // 22 bytes
    let decoded = decode(&encode(&Record::new(name, 0, 0.0, "")));

    assert_eq!(decoded.name, "é".repeat(10));
}

#[test]
fn test_truncate_utf8_short_text_unchanged() {
    assert_eq!(truncate_utf8("abc", 20), "abc");
    assert_eq!(truncate_utf8("日本語", 7), "日本");
    assert_eq!(truncate_utf8("日本語", 2), "");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_drops_invalid_utf8() {
    let mut block = encode(&Record::new("", 3, 1.0, "ok"));
    block[0] = 0xFF;
    block[1] = b'a';

    let decoded = decode(&block);
    assert_eq!(decoded.name, "a");
    assert_eq!(decoded.count, 3);
    assert_eq!(decoded.category, "ok");
}

#[test]
fn test_decode_byte_cut_multibyte_text() {
    // A byte-level writer cuts "a" + "б" * 10 (21 bytes) at byte 20, leaving
    // the first half of the last character in the field.
    let full = format!("a{}", "б".repeat(10));
    let mut block = encode(&Record::new("", 1, 1.0, "товар"));
    block[..NAME_WIDTH].copy_from_slice(&full.as_bytes()[..NAME_WIDTH]);

    let decoded = decode(&block);
    assert_eq!(decoded.name, format!("a{}", "б".repeat(9)));
    assert_eq!(decoded.category, "товар");
}

#[test]
fn test_default_dataset_fits_widths() {
    let dataset = default_dataset();

    assert_eq!(dataset.len(), 3);
    for record in &dataset {
        assert_eq!(&decode(&encode(record)), record);
    }
    assert_eq!(dataset[2].name, "ноутбук");
    assert_eq!(dataset[2].price, 89999.99f32);
}
