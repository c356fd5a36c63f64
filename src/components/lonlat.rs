use std::ops::{Deref, RangeInclusive};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::base91;
use crate::bytes::parse_bytes;
use crate::DecodeError;

/// Compressed latitude units per degree.
const COMPRESSED_LAT_SCALE: f64 = 380926.0;
/// Compressed longitude units per degree.
const COMPRESSED_LON_SCALE: f64 = 190463.0;

/// Position ambiguity: how many trailing digits of the textual latitude were
/// replaced by spaces.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Default)]
pub enum Precision {
    TenDegree,
    OneDegree,
    TenMinute,
    OneMinute,
    TenthMinute,
    #[default]
    HundredthMinute,
}

impl Precision {
    /// Returns the width of the precision in degrees.
    /// For example, `Precision::OneDegree` would return 1.0.
    pub fn width(&self) -> f64 {
        match self {
            Precision::HundredthMinute => 1.0 / 6000.0,
            Precision::TenthMinute => 1.0 / 600.0,
            Precision::OneMinute => 1.0 / 60.0,
            Precision::TenMinute => 1.0 / 6.0,
            Precision::OneDegree => 1.0,
            Precision::TenDegree => 10.0,
        }
    }

    /// Blanked digits read as zero, so `edge` is the corner of the box
    /// nearest the equator or prime meridian. The box extends away from zero.
    pub(crate) fn range(&self, edge: f64) -> RangeInclusive<f64> {
        let width = self.width();

        if edge.is_sign_negative() {
            (edge - width)..=edge
        } else {
            edge..=(edge + width)
        }
    }

    /// Number of blanked digits.
    pub fn num_digits(&self) -> u8 {
        match self {
            Precision::HundredthMinute => 0,
            Precision::TenthMinute => 1,
            Precision::OneMinute => 2,
            Precision::TenMinute => 3,
            Precision::OneDegree => 4,
            Precision::TenDegree => 5,
        }
    }

    pub(crate) fn from_num_digits(digits: u8) -> Option<Self> {
        let res = match digits {
            0 => Precision::HundredthMinute,
            1 => Precision::TenthMinute,
            2 => Precision::OneMinute,
            3 => Precision::TenMinute,
            4 => Precision::OneDegree,
            5 => Precision::TenDegree,
            _ => return None,
        };

        Some(res)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
pub struct Latitude(f64);

impl Deref for Latitude {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Latitude {
    /// Creates a new `Latitude`.
    /// Returns `None` if the given value is not a valid latitude.
    pub fn new(value: f64) -> Option<Self> {
        if !(-90.0..=90.0).contains(&value) {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Creates a new `Latitude` from degrees, minutes, and hundredths of a minute,
    /// as well as direction
    pub fn from_dmh(deg: u32, min: u32, hundredths: u32, north: bool) -> Option<Self> {
        let value = f64::from(deg) + f64::from(min) / 60. + f64::from(hundredths) / 6_000.;
        let value = if north { value } else { -value };

        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Parses `ddmm.hhN`. Trailing digits may be blanked with spaces to
    /// express ambiguity, which is returned as the `Precision`.
    pub(crate) fn parse_uncompressed(b: &[u8]) -> Result<(Self, Precision), DecodeError> {
        let err = || DecodeError::InvalidLatitude(b.to_owned());

        if b.len() != 8 || b[4] != b'.' {
            return Err(err());
        }

        let north = match b[7] {
            b'N' => true,
            b'S' => false,
            _ => return Err(err()),
        };

        // Once we encounter a space, the remainder must be spaces
        let (deg, deg_spaces) = parse_digit_pair(&[b[0], b[1]], false).ok_or_else(err)?;
        let (min, min_spaces) = parse_digit_pair(&[b[2], b[3]], deg_spaces > 0).ok_or_else(err)?;
        let (hundredths, frac_spaces) =
            parse_digit_pair(&[b[5], b[6]], min_spaces > 0).ok_or_else(err)?;

        let precision =
            Precision::from_num_digits(deg_spaces + min_spaces + frac_spaces).ok_or_else(err)?;

        if min >= 60 {
            return Err(err());
        }

        let lat = Self::from_dmh(deg, min, hundredths, north).ok_or_else(err)?;

        Ok((lat, precision))
    }

    pub(crate) fn parse_compressed(b: &[u8]) -> Result<Self, DecodeError> {
        let err = || DecodeError::InvalidLatitude(b.to_owned());

        if b.len() != 4 {
            return Err(err());
        }

        let units = base91::decode_ascii(b).ok_or_else(err)?;

        Self::new(90.0 - f64::from(units) / COMPRESSED_LAT_SCALE).ok_or_else(err)
    }

    pub(crate) fn encode_compressed(&self) -> [u8; 4] {
        let mut out = [0; 4];
        let units = ((90.0 - self.0) * COMPRESSED_LAT_SCALE).round();
        base91::encode_ascii(units as u32, &mut out);
        out
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
pub struct Longitude(f64);

impl Deref for Longitude {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Longitude {
    /// Creates a new `Longitude`.
    /// Returns `None` if the given value is not a valid longitude
    pub fn new(value: f64) -> Option<Self> {
        if !(-180.0..=180.0).contains(&value) {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn from_dmh(deg: u32, min: u32, hundredths: u32, east: bool) -> Option<Self> {
        let value = f64::from(deg) + f64::from(min) / 60. + f64::from(hundredths) / 6_000.;
        let value = if east { value } else { -value };

        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Parses `dddmm.hhE`. The latitude's precision decides how many
    /// trailing digits are ignored, whatever they contain.
    pub(crate) fn parse_uncompressed(b: &[u8], precision: Precision) -> Result<Self, DecodeError> {
        let err = || DecodeError::InvalidLongitude(b.to_owned());

        if b.len() != 9 || b[5] != b'.' {
            return Err(err());
        }

        let east = match b[8] {
            b'E' => true,
            b'W' => false,
            _ => return Err(err()),
        };

        let mut digits = [0; 7];
        digits[0..5].copy_from_slice(&b[0..5]);
        digits[5..7].copy_from_slice(&b[6..8]);

        let keep = 7 - usize::from(precision.num_digits());
        for d in &mut digits[keep..] {
            *d = b'0';
        }

        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(err());
        }

        let deg = parse_bytes::<u32>(&digits[0..3]).ok_or_else(err)?;
        let min = parse_bytes::<u32>(&digits[3..5]).ok_or_else(err)?;
        let hundredths = parse_bytes::<u32>(&digits[5..7]).ok_or_else(err)?;

        if min >= 60 {
            return Err(err());
        }

        Self::from_dmh(deg, min, hundredths, east).ok_or_else(err)
    }

    pub(crate) fn parse_compressed(b: &[u8]) -> Result<Self, DecodeError> {
        let err = || DecodeError::InvalidLongitude(b.to_owned());

        if b.len() != 4 {
            return Err(err());
        }

        let units = base91::decode_ascii(b).ok_or_else(err)?;

        Self::new(f64::from(units) / COMPRESSED_LON_SCALE - 180.0).ok_or_else(err)
    }

    pub(crate) fn encode_compressed(&self) -> [u8; 4] {
        let mut out = [0; 4];
        let units = ((180.0 + self.0) * COMPRESSED_LON_SCALE).round();
        base91::encode_ascii(units as u32, &mut out);
        out
    }
}

// if only_spaces is true, requires that b is only spaces
// returns the parsed value as well as the number of spaces we found
fn parse_digit_pair(b: &[u8; 2], only_spaces: bool) -> Option<(u32, u8)> {
    match (b[0], b[1]) {
        (b' ', b' ') => Some((0, 2)),
        _ if only_spaces => None,
        (d, b' ') if d.is_ascii_digit() => Some((u32::from(d - b'0') * 10, 1)),
        (d1, d2) if d1.is_ascii_digit() && d2.is_ascii_digit() => {
            Some((u32::from(d1 - b'0') * 10 + u32::from(d2 - b'0'), 0))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_digits() {
        for i in 0..6 {
            assert_eq!(i, Precision::from_num_digits(i).unwrap().num_digits());
        }
        assert_eq!(Precision::from_num_digits(6), None);
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(None, Latitude::new(90.1));
        assert_eq!(None, Latitude::new(-90.1));
        assert_eq!(None, Latitude::new(f64::NAN));
        assert_eq!(None, Longitude::new(180.1));
        assert_eq!(None, Longitude::new(-180.1));
    }

    #[test]
    fn digit_pairs() {
        assert_eq!(Some((12, 0)), parse_digit_pair(b"12", false));
        assert_eq!(Some((10, 1)), parse_digit_pair(b"1 ", false));
        assert_eq!(Some((0, 2)), parse_digit_pair(b"  ", false));
        assert_eq!(None, parse_digit_pair(b" 2", false));
        assert_eq!(None, parse_digit_pair(b"+2", false));

        assert_eq!(None, parse_digit_pair(b"12", true));
        assert_eq!(None, parse_digit_pair(b"1 ", true));
        assert_eq!(Some((0, 2)), parse_digit_pair(b"  ", true));
    }

    #[test]
    fn uncompressed_latitude() {
        let (lat, precision) = Latitude::parse_uncompressed(b"4903.50N").unwrap();
        assert_relative_eq!(*lat, 49.05833333333333);
        assert_eq!(precision, Precision::HundredthMinute);

        let (lat, _) = Latitude::parse_uncompressed(b"4903.50S").unwrap();
        assert_relative_eq!(*lat, -49.05833333333333);

        let (lat, precision) = Latitude::parse_uncompressed(b"4903.  S").unwrap();
        assert_relative_eq!(*lat, -49.05);
        assert_eq!(precision, Precision::OneMinute);

        let (lat, precision) = Latitude::parse_uncompressed(b"4   .  S").unwrap();
        assert_relative_eq!(*lat, -40.0);
        assert_eq!(precision, Precision::TenDegree);

        let (lat, _) = Latitude::parse_uncompressed(b"0000.00S").unwrap();
        assert_relative_eq!(*lat, 0.0);
    }

    #[test]
    fn invalid_uncompressed_latitude() {
        for b in [
            &b"    .  S"[..],
            &b"49 3.50N"[..],
            &b"490 .50N"[..],
            &b"4903.50W"[..],
            &b"9903.50N"[..],
            &b"4963.50N"[..],
            &b"49O3.50N"[..],
            &b"4903,50N"[..],
            &b"4903.50"[..],
        ] {
            assert_eq!(
                Latitude::parse_uncompressed(b),
                Err(DecodeError::InvalidLatitude(b.to_vec()))
            );
        }
    }

    #[test]
    fn uncompressed_longitude() {
        assert_relative_eq!(
            *Longitude::parse_uncompressed(b"12903.50E", Precision::default()).unwrap(),
            129.05833333333333
        );
        assert_relative_eq!(
            *Longitude::parse_uncompressed(b"04903.50W", Precision::default()).unwrap(),
            -49.05833333333333
        );
        // blanked digits are ignored whatever they hold
        assert_relative_eq!(
            *Longitude::parse_uncompressed(b"07201.ZZW", Precision::OneMinute).unwrap(),
            -72.01666666666667
        );
        assert_eq!(
            Longitude::parse_uncompressed(b"04903.50N", Precision::default()),
            Err(DecodeError::InvalidLongitude(b"04903.50N".to_vec()))
        );
        assert_eq!(
            Longitude::parse_uncompressed(b"18903.50E", Precision::default()),
            Err(DecodeError::InvalidLongitude(b"18903.50E".to_vec()))
        );
        assert_eq!(
            Longitude::parse_uncompressed(b"0720l.75W", Precision::default()),
            Err(DecodeError::InvalidLongitude(b"0720l.75W".to_vec()))
        );
    }

    #[test]
    fn compressed() {
        assert_relative_eq!(*Latitude::parse_compressed(b"5L!!").unwrap(), 49.5);
        assert_relative_eq!(
            *Longitude::parse_compressed(b"<*e7").unwrap(),
            -72.75000393777269
        );
        assert_eq!(
            Latitude::parse_compressed(b"5L !"),
            Err(DecodeError::InvalidLatitude(b"5L !".to_vec()))
        );
        // decodes to a latitude south of the pole
        assert_eq!(
            Latitude::parse_compressed(b"{{{{"),
            Err(DecodeError::InvalidLatitude(b"{{{{".to_vec()))
        );
    }

    #[test]
    fn compressed_encoding() {
        assert_eq!(&Latitude::new(49.5).unwrap().encode_compressed(), b"5L!!");
        assert_eq!(
            &Longitude::new(-72.75000393777269).unwrap().encode_compressed(),
            b"<*e7"
        );
    }
}
