use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bytes::parse_bytes;
use crate::DecodeError;

/// On-air timestamps carry no year, and only the `MDHM` form carries a month.
/// The variant records which encoding was used, since the same six digits
/// mean different things depending on the indicator byte.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Timestamp {
    /// Day of month, Hour and Minute in UTC
    DDHHMM(u8, u8, u8),
    /// Hour, Minute and Second in UTC
    HHMMSS(u8, u8, u8),
    /// Day of month, Hour and Minute in the sender's local time
    LocalDDHHMM(u8, u8, u8),
    /// Month, Day of month, Hour and Minute in UTC, used by positionless
    /// weather reports
    MDHM(u8, u8, u8, u8),
}

impl Timestamp {
    /// Width of the indicator-terminated encodings.
    pub const WIDTH: usize = 7;

    /// Decodes six digits plus a format indicator at `cursor`, returning the
    /// timestamp and the cursor just past the indicator.
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let field = fixed_field(b, cursor, Self::WIDTH)?;
        let end = cursor + Self::WIDTH;

        let err = || DecodeError::InvalidTimestamp(field.to_owned());

        let one = parse_digits(&field[0..2]).ok_or_else(err)?;
        let two = parse_digits(&field[2..4]).ok_or_else(err)?;
        let three = parse_digits(&field[4..6]).ok_or_else(err)?;

        let timestamp = match field[6] {
            b'z' => Timestamp::DDHHMM(one, two, three),
            b'h' => Timestamp::HHMMSS(one, two, three),
            b'/' => Timestamp::LocalDDHHMM(one, two, three),
            _ => return Err(err()),
        };

        Ok((timestamp, end))
    }

    /// Decodes the eight digit month/day/hour/minute form at `cursor`.
    pub fn decode_mdhm(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let field = fixed_field(b, cursor, 8)?;
        let end = cursor + 8;

        let err = || DecodeError::InvalidTimestamp(field.to_owned());

        let mut values = [0; 4];
        for (value, digits) in values.iter_mut().zip(field.chunks(2)) {
            *value = parse_digits(digits).ok_or_else(err)?;
        }

        let [month, day, hour, minute] = values;

        Ok((Timestamp::MDHM(month, day, hour, minute), end))
    }
}

fn fixed_field(b: &[u8], cursor: usize, width: usize) -> Result<&[u8], DecodeError> {
    let tail = b.get(cursor..).unwrap_or(&[]);
    tail.get(..width).ok_or_else(|| DecodeError::InvalidTimestamp(tail.to_owned()))
}

// Stricter than `parse_bytes`, which would accept a leading `+`.
fn parse_digits(b: &[u8]) -> Option<u8> {
    if !b.iter().all(u8::is_ascii_digit) {
        return None;
    }

    parse_bytes(b)
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::DDHHMM(d, h, m) => write!(f, "{:02}{:02}{:02}z", d, h, m),
            Self::HHMMSS(h, m, s) => write!(f, "{:02}{:02}{:02}h", h, m, s),
            Self::LocalDDHHMM(d, h, m) => write!(f, "{:02}{:02}{:02}/", d, h, m),
            Self::MDHM(mo, d, h, m) => write!(f, "{:02}{:02}{:02}{:02}", mo, d, h, m),
        }
    }
}
