use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bytes::parse_bytes;
use crate::DecodeError;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directivity {
    Omni,
    DirectionDegrees(u16),
}

impl TryFrom<u8> for Directivity {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Omni),
            1..=8 => Ok(Self::DirectionDegrees(45 * u16::from(value))),
            _ => Err(()),
        }
    }
}

/// The fixed seven byte data extension that may follow an uncompressed
/// position.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extension {
    // course/speed for stations, direction/speed for objects and wind
    DirectionSpeed {
        direction_degrees: u16,
        speed_knots: u16,
    },
    PowerHeightGainDirectivity {
        power_watts: u16,
        antenna_height_feet: u32,
        antenna_gain_db: u8,
        antenna_directivity: Directivity,
    },
    RadioRange {
        radio_range_miles: u16,
    },
    DFStrengthHeightGainDirectivity {
        s_points: u8,
        antenna_height_feet: u32,
        antenna_gain_db: u8,
        antenna_directivity: Directivity,
    },
    AreaObjectDescriptor {
        r#type: u8,
        color: u8,
    },
}

impl Extension {
    pub const WIDTH: usize = 7;

    /// Decodes an extension at `cursor`, returning it with the cursor just
    /// past its seven bytes.
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let tail = b.get(cursor..).unwrap_or(&[]);
        let bytes = tail
            .get(..Self::WIDTH)
            .ok_or_else(|| DecodeError::InvalidExtension(tail.to_vec()))?;
        let end = cursor + Self::WIDTH;

        let err = || DecodeError::InvalidExtension(bytes.to_vec());

        let ext = match &bytes[..3] {
            b"RNG" => Self::RadioRange {
                radio_range_miles: parse_digits(&bytes[3..]).ok_or_else(err)?,
            },
            b"PHG" => {
                let (power, height, gain, directivity) = decode_hgd(&bytes[3..]).ok_or_else(err)?;

                Self::PowerHeightGainDirectivity {
                    power_watts: u16::from(power).pow(2),
                    antenna_height_feet: height,
                    antenna_gain_db: gain,
                    antenna_directivity: directivity,
                }
            }
            b"DFS" => {
                let (s_points, height, gain, directivity) =
                    decode_hgd(&bytes[3..]).ok_or_else(err)?;

                Self::DFStrengthHeightGainDirectivity {
                    s_points,
                    antenna_height_feet: height,
                    antenna_gain_db: gain,
                    antenna_directivity: directivity,
                }
            }
            // Tyy/Cxx
            [b'T', _, _] if bytes[3] == b'/' && bytes[4] == b'C' => Self::AreaObjectDescriptor {
                r#type: parse_digits(&bytes[1..3]).ok_or_else(err)?,
                color: parse_digits(&bytes[5..]).ok_or_else(err)?,
            },
            _ if bytes[3] == b'/' => Self::DirectionSpeed {
                direction_degrees: parse_digits(&bytes[..3]).ok_or_else(err)?,
                speed_knots: parse_digits(&bytes[4..]).ok_or_else(err)?,
            },
            _ => return Err(err()),
        };

        Ok((ext, end))
    }
}

fn parse_digits<T: std::str::FromStr>(b: &[u8]) -> Option<T> {
    if !b.iter().all(u8::is_ascii_digit) {
        return None;
    }

    parse_bytes(b)
}

// Shared tail of PHG and DFS: a leading digit, then height, gain and
// directivity codes. The height code may be any byte from '0' upwards so
// that balloons and aircraft can report heights above 5120 feet.
fn decode_hgd(b: &[u8]) -> Option<(u8, u32, u8, Directivity)> {
    let lead = (b[0] as char).to_digit(10)? as u8;
    let height_code = b[1].checked_sub(b'0')?;
    let gain = (b[2] as char).to_digit(10)? as u8;
    let directivity = Directivity::try_from((b[3] as char).to_digit(10)? as u8).ok()?;

    let height = 2u32.checked_pow(u32::from(height_code))?.checked_mul(10)?;

    Some((lead, height, gain, directivity))
}
