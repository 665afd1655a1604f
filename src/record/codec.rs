//! Record codec
//!
//! Converts between [`Record`] values and their exact 43-byte representation.
//! Numeric fields are little-endian regardless of the host platform.

use bytes::{Buf, BufMut, BytesMut};

use super::{Record, CATEGORY_WIDTH, NAME_WIDTH, RECORD_SIZE};

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record into its fixed-width block
///
/// Text longer than its field is cut at the last UTF-8 character boundary that
/// fits; shorter text is right-padded with zero bytes. Never fails.
pub fn encode(record: &Record) -> [u8; RECORD_SIZE] {
    let mut buf = BytesMut::with_capacity(RECORD_SIZE);

    put_text(&mut buf, &record.name, NAME_WIDTH);
    buf.put_i32_le(record.count);
    buf.put_f32_le(record.price);
    put_text(&mut buf, &record.category, CATEGORY_WIDTH);

    debug_assert_eq!(buf.len(), RECORD_SIZE);

    let mut block = [0u8; RECORD_SIZE];
    block.copy_from_slice(&buf);
    block
}

/// Write `text` into exactly `width` bytes
fn put_text(buf: &mut BytesMut, text: &str, width: usize) {
    let bytes = truncate_utf8(text, width).as_bytes();
    buf.put_slice(bytes);
    buf.put_bytes(0, width - bytes.len());
}

/// Longest prefix of `text` that fits in `width` bytes without splitting a character
pub fn truncate_utf8(text: &str, width: usize) -> &str {
    if text.len() <= width {
        return text;
    }

    let mut end = width;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a fixed-width block into a record
///
/// Invalid UTF-8 sequences are dropped rather than rejected, then trailing zero
/// characters are stripped from both text fields. Files whose text was cut
/// mid-character by a byte-level writer therefore decode to the whole
/// characters that precede the cut.
pub fn decode(block: &[u8; RECORD_SIZE]) -> Record {
    let mut buf: &[u8] = block;

    let name = take_text(&mut buf, NAME_WIDTH);
    let count = buf.get_i32_le();
    let price = buf.get_f32_le();
    let category = take_text(&mut buf, CATEGORY_WIDTH);

    Record {
        name,
        count,
        price,
        category,
    }
}

/// Consume `width` bytes and decode them as zero-padded text
fn take_text(buf: &mut &[u8], width: usize) -> String {
    let (field, rest) = buf.split_at(width);
    *buf = rest;

    let mut text = String::with_capacity(width);
    for chunk in field.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    let len = text.trim_end_matches('\0').len();
    text.truncate(len);
    text
}
