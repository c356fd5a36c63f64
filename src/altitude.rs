//! Scan for the `/A=nnnnnn` altitude token that may appear anywhere in the
//! comment following a position.

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::bytes::parse_bytes;
use crate::DecodeError;

lazy_static! {
    static ref ALTITUDE: Regex = Regex::new(r"/A=([0-9]{6})").unwrap();
}

/// Looks for an altitude token in `b[cursor..]` and returns it in feet.
///
/// When several tokens are present the last one wins. Running the cursor past
/// the end of the buffer is the only failure; an empty tail has no altitude.
pub fn scan(b: &[u8], cursor: usize) -> Result<Option<u32>, DecodeError> {
    let tail = b.get(cursor..).ok_or(DecodeError::CursorOutOfBounds {
        cursor,
        len: b.len(),
    })?;

    let altitude = ALTITUDE
        .captures_iter(tail)
        .last()
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_bytes(m.as_bytes()));

    Ok(altitude)
}
