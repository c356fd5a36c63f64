//! Weather reports: single letter tags each followed by a fixed number of
//! digits, e.g. `c220s004g005t077r000p000P000h50b09900`.
//!
//! A field whose digits are all `.` or all spaces was not reported and stays
//! `None`.

use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bytes::parse_bytes;
use crate::DecodeError;

// Tag and digit count of every recognized field.
const FIELDS: [(u8, usize); 11] = [
    (b'c', 3),
    (b's', 3),
    (b'g', 3),
    (b't', 3),
    (b'r', 3),
    (b'p', 3),
    (b'P', 3),
    (b'h', 2),
    (b'b', 5),
    (b'L', 3),
    (b'l', 3),
];

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Weather {
    /// Degrees
    pub wind_direction: Option<u16>,
    /// Sustained one minute wind speed in mph
    pub wind_speed: Option<u16>,
    /// Peak wind speed of the last five minutes in mph
    pub wind_gust: Option<u16>,
    /// Degrees Fahrenheit
    pub temperature: Option<i16>,
    /// Hundredths of an inch
    pub rain_1h: Option<u16>,
    pub rain_24h: Option<u16>,
    pub rain_since_midnight: Option<u16>,
    /// Percent, an on-air `00` means 100%
    pub humidity: Option<u8>,
    /// Tenths of millibars
    pub pressure: Option<u32>,
    /// Watts per square metre
    pub luminosity: Option<u16>,
}

impl Weather {
    /// Decodes weather fields starting at `cursor` and returns the cursor
    /// past the last field consumed.
    ///
    /// Decoding stops quietly at the first unknown tag, repeated tag, or
    /// field that doesn't parse, leaving the rest as comment. A weather block
    /// after a position may begin with a `DDD/SSS` wind direction and speed.
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        if cursor > b.len() {
            return Err(DecodeError::CursorOutOfBounds {
                cursor,
                len: b.len(),
            });
        }

        let mut weather = Weather::default();
        let mut cursor = cursor;
        let mut seen = [false; FIELDS.len()];

        if let Some(wind) = b.get(cursor..cursor + 7) {
            if wind[3] == b'/' {
                if let (Some(direction), Some(speed)) =
                    (parse_field(&wind[..3]), parse_field(&wind[4..]))
                {
                    if weather.store(b'c', direction) && weather.store(b's', speed) {
                        seen[0] = true;
                        seen[1] = true;
                        cursor += 7;
                    } else {
                        weather = Weather::default();
                    }
                }
            }
        }

        loop {
            let Some(&tag) = b.get(cursor) else { break };
            let Some(index) = FIELDS.iter().position(|(t, _)| *t == tag) else { break };

            if seen[index] {
                break;
            }

            let width = FIELDS[index].1;
            let Some(raw) = b.get(cursor + 1..cursor + 1 + width) else { break };
            let Some(value) = parse_field(raw) else { break };

            if !weather.store(tag, value) {
                break;
            }

            seen[index] = true;
            cursor += 1 + width;
        }

        Ok((weather, cursor))
    }

    fn store(&mut self, tag: u8, value: Option<i32>) -> bool {
        match tag {
            b'c' => store(&mut self.wind_direction, value),
            b's' => store(&mut self.wind_speed, value),
            b'g' => store(&mut self.wind_gust, value),
            b't' => store(&mut self.temperature, value),
            b'r' => store(&mut self.rain_1h, value),
            b'p' => store(&mut self.rain_24h, value),
            b'P' => store(&mut self.rain_since_midnight, value),
            b'h' => store(&mut self.humidity, value.map(|h| if h == 0 { 100 } else { h })),
            b'b' => store(&mut self.pressure, value),
            b'L' => store(&mut self.luminosity, value),
            b'l' => store(&mut self.luminosity, value.map(|l| l + 1000)),
            _ => false,
        }
    }
}

fn store<T: TryFrom<i32>>(slot: &mut Option<T>, value: Option<i32>) -> bool {
    match value.map(T::try_from) {
        None => true,
        Some(Ok(v)) => {
            *slot = Some(v);
            true
        }
        Some(Err(_)) => false,
    }
}

// `Some(None)` for a not-reported field, `None` when the bytes are garbage.
fn parse_field(b: &[u8]) -> Option<Option<i32>> {
    if b.iter().all(|&c| c == b'.') || b.iter().all(|&c| c == b' ') {
        return Some(None);
    }

    let digits = b.strip_prefix(b"-").unwrap_or(b);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    parse_bytes(b).map(Some)
}
