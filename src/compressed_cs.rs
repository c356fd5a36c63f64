//! The three bytes following the symbol code of a compressed position:
//! course/speed (or radio range, or altitude) and the compression type byte.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::base91;
use crate::DecodeError;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum GpsFix {
    Old,
    Current,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum NmeaSource {
    Other,
    Gll,
    Gga,
    Rmc,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Origin {
    Compressed,
    TncBText,
    Software,
    Tbd,
    Kpc3,
    Pico,
    Other,
    Digipeater,
}

/// The `T` byte, a base-91 digit whose low six bits are flags.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct CompressionType {
    pub gps_fix: GpsFix,
    pub nmea_source: NmeaSource,
    pub origin: Origin,
}

impl From<u8> for CompressionType {
    fn from(t: u8) -> Self {
        let gps_fix = if t & 0b10_0000 != 0 {
            GpsFix::Current
        } else {
            GpsFix::Old
        };

        let nmea_source = match (t >> 3) & 0b11 {
            0 => NmeaSource::Other,
            1 => NmeaSource::Gll,
            2 => NmeaSource::Gga,
            _ => NmeaSource::Rmc,
        };

        let origin = match t & 0b111 {
            0 => Origin::Compressed,
            1 => Origin::TncBText,
            2 => Origin::Software,
            3 => Origin::Tbd,
            4 => Origin::Kpc3,
            5 => Origin::Pico,
            6 => Origin::Other,
            _ => Origin::Digipeater,
        };

        Self {
            gps_fix,
            nmea_source,
            origin,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum CompressedCs {
    CourseSpeed(CourseSpeed),
    RadioRange(RadioRange),
    Altitude(CompressedAltitude),
}

impl CompressedCs {
    /// Decodes the `c`, `s` and `T` bytes. Returns `None` when `c` is a
    /// space, meaning the sender supplied no course/speed data.
    pub(crate) fn decode(
        c: u8,
        s: u8,
        t: u8,
    ) -> Result<Option<(Self, CompressionType)>, DecodeError> {
        if c == b' ' {
            return Ok(None);
        }

        let err = || DecodeError::InvalidCs([c, s]);
        let c_val = base91::digit_from_ascii(c).ok_or_else(err)?;
        let s_val = base91::digit_from_ascii(s).ok_or_else(err)?;
        let t = CompressionType::from(base91::digit_from_ascii(t).ok_or_else(err)?);

        let cs = if t.nmea_source == NmeaSource::Gga {
            Self::Altitude(CompressedAltitude {
                altitude_feet: 1.002_f64.powi(i32::from(c_val) * 91 + i32::from(s_val)),
            })
        } else {
            match c_val {
                0..=89 => Self::CourseSpeed(CourseSpeed {
                    course_degrees: u16::from(c_val) * 4,
                    speed_knots: 1.08_f64.powi(i32::from(s_val)) - 1.0,
                }),
                90 => Self::RadioRange(RadioRange {
                    range_miles: 2.0 * 1.08_f64.powi(i32::from(s_val)),
                }),
                _ => return Err(err()),
            }
        };

        Ok(Some((cs, t)))
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CourseSpeed {
    course_degrees: u16,
    speed_knots: f64,
}

impl CourseSpeed {
    pub fn course_degrees(&self) -> u16 {
        self.course_degrees
    }

    pub fn speed_knots(&self) -> f64 {
        self.speed_knots
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct RadioRange {
    range_miles: f64,
}

impl RadioRange {
    pub fn range_miles(&self) -> f64 {
        self.range_miles
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CompressedAltitude {
    altitude_feet: f64,
}

impl CompressedAltitude {
    pub fn altitude_feet(&self) -> f64 {
        self.altitude_feet
    }
}
