//! Typed field encoders and the student wire format.
//!
//! Wire format (bit-exact, fixed key order, no whitespace):
//! ```text
//! {"nombre":"<first>","apellido":"<last>","documento":<id>}
//! ```
//! Text fields render as `"key":"value"`, the numeric field as
//! `"key":<digits>` with ordinary base-10 digits and no quotes. Values
//! are copied verbatim — see the crate docs for the escaping limitation.

use padron_core::Student;

use crate::cursor::WriteCursor;
use crate::error::EncodeError;

/// Key of the first-name field.
const KEY_FIRST_NAME: &str = "nombre";
/// Key of the last-name field.
const KEY_LAST_NAME: &str = "apellido";
/// Key of the document-number field.
const KEY_DOCUMENT: &str = "documento";

/// u32::MAX has ten decimal digits.
const MAX_U32_DIGITS: usize = 10;

/// Encode a text field as `"key":"value"`.
///
/// The value is copied verbatim between the quotes, without escaping.
pub fn encode_text_field(
    cursor: &mut WriteCursor<'_>,
    key: &str,
    value: &str,
) -> Result<(), EncodeError> {
    cursor.put_byte(b'"')?;
    cursor.put_str(key)?;
    cursor.put_bytes(b"\":\"")?;
    cursor.put_str(value)?;
    cursor.put_byte(b'"')
}

/// Encode an unsigned field as `"key":<digits>`.
pub fn encode_u32_field(
    cursor: &mut WriteCursor<'_>,
    key: &str,
    value: u32,
) -> Result<(), EncodeError> {
    cursor.put_byte(b'"')?;
    cursor.put_str(key)?;
    cursor.put_bytes(b"\":")?;
    let mut digits = [0u8; MAX_U32_DIGITS];
    cursor.put_bytes(u32_decimal(value, &mut digits))
}

/// Render `value` as base-10 digits into `out`, returning the used tail.
///
/// No leading zeros beyond the natural representation, no separators,
/// no heap allocation.
fn u32_decimal(value: u32, out: &mut [u8; MAX_U32_DIGITS]) -> &[u8] {
    let mut v = value;
    let mut pos = out.len();
    loop {
        pos -= 1;
        out[pos] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    &out[pos..]
}

/// Decimal digit count of `value`.
fn u32_decimal_len(value: u32) -> usize {
    let mut v = value / 10;
    let mut len = 1;
    while v != 0 {
        len += 1;
        v /= 10;
    }
    len
}

/// Serialize `student` into `buf`, returning the exact byte count
/// written.
///
/// Buffers shorter than two bytes (the braces) are rejected before any
/// write. A buffer whose length equals [`serialized_len`] succeeds; one
/// byte shorter fails at whichever field first cannot fit. On failure
/// the buffer may hold a partial prefix up to the failure point — only
/// the returned `Result` is authoritative.
pub fn serialize_student(student: &Student, buf: &mut [u8]) -> Result<usize, EncodeError> {
    if buf.len() < 2 {
        return Err(EncodeError::BufferTooSmall {
            needed: 2,
            remaining: buf.len(),
        });
    }

    let mut cursor = WriteCursor::new(buf);
    cursor.put_byte(b'{')?;
    encode_text_field(&mut cursor, KEY_FIRST_NAME, student.first_name())?;
    cursor.put_byte(b',')?;
    encode_text_field(&mut cursor, KEY_LAST_NAME, student.last_name())?;
    cursor.put_byte(b',')?;
    encode_u32_field(&mut cursor, KEY_DOCUMENT, student.document())?;
    cursor.put_byte(b'}')?;
    Ok(cursor.written())
}

/// Exact output length of [`serialize_student`] for `student`, without
/// writing anything.
pub fn serialized_len(student: &Student) -> usize {
    // "key":"value" costs key + value + 5; "key":digits costs key + 3 + digits.
    let text_field = |key: &str, value: &str| key.len() + value.len() + 5;
    2 + text_field(KEY_FIRST_NAME, student.first_name())
        + 1
        + text_field(KEY_LAST_NAME, student.last_name())
        + 1
        + (KEY_DOCUMENT.len() + 3 + u32_decimal_len(student.document()))
}
