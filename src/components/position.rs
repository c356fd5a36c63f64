use std::io::{self, Write};
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::extensions::Extension;
use super::lonlat::{Latitude, Longitude, Precision};
use crate::compressed_cs::{CompressedCs, CompressionType};
use crate::symbol::{SymbolTable, WEATHER_STATION};
use crate::DecodeError;

const UNCOMPRESSED_WIDTH: usize = 19;
const COMPRESSED_WIDTH: usize = 13;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Debug, Clone)]
pub enum Cst {
    CompressedSome {
        cs: CompressedCs,
        t: CompressionType,
    },
    CompressedNone,
    Uncompressed,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Position {
    /// Blanked digits are read as zero, so with ambiguity this is the edge of
    /// the box nearest the equator. See [`Position::latitude_bounding`].
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub precision: Precision,
    pub symbol_table: SymbolTable,
    pub symbol_code: char,
    /// Feet, from a `/A=nnnnnn` token in the comment.
    pub altitude: Option<u32>,
    pub cst: Cst,
}

impl Position {
    /// Range the actual latitude lies in, given the `precision` the sender
    /// chose.
    pub fn latitude_bounding(&self) -> RangeInclusive<f64> {
        self.precision.range(self.latitude.value())
    }

    /// Range the actual longitude lies in. Longitude digits are blanked
    /// along with the latitude's.
    pub fn longitude_bounding(&self) -> RangeInclusive<f64> {
        self.precision.range(self.longitude.value())
    }

    /// Number of digits the sender blanked, if any.
    pub fn ambiguity(&self) -> Option<u8> {
        match self.precision.num_digits() {
            0 => None,
            n => Some(n),
        }
    }

    pub fn is_weather_station(&self) -> bool {
        self.symbol_code == WEATHER_STATION
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self.cst, Cst::Uncompressed)
    }

    /// Decodes the fixed width position block starting at `cursor` and
    /// returns the cursor just past it.
    ///
    /// All position representations interleave the symbol table and code,
    /// so both are decoded here. A leading digit selects the uncompressed
    /// `ddmm.hhN/dddmm.hhW$` layout, a symbol table byte the compressed one.
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let first = *b.get(cursor).ok_or(DecodeError::CursorOutOfBounds {
            cursor,
            len: b.len(),
        })?;

        if first.is_ascii_digit() {
            Self::decode_uncompressed(b, cursor)
        } else if SymbolTable::is_compressed_table(first) {
            Self::decode_compressed(b, cursor)
        } else {
            Err(DecodeError::UnsupportedPositionFormat(b[cursor..].to_owned()))
        }
    }

    /// Like [`Position::decode`], but also consumes a data extension if one
    /// directly follows an uncompressed position.
    pub fn decode_with_extension(
        b: &[u8],
        cursor: usize,
    ) -> Result<(Self, Option<Extension>, usize), DecodeError> {
        let (position, cursor) = Self::decode(b, cursor)?;
        let (extension, cursor) = position.decode_extension(b, cursor);

        Ok((position, extension, cursor))
    }

    /// Data extensions only ever follow uncompressed positions. Bytes that
    /// aren't an extension are left alone.
    pub(crate) fn decode_extension(&self, b: &[u8], cursor: usize) -> (Option<Extension>, usize) {
        if self.is_compressed() {
            return (None, cursor);
        }

        match Extension::decode(b, cursor) {
            Ok((extension, next)) => (Some(extension), next),
            Err(_) => (None, cursor),
        }
    }

    fn decode_uncompressed(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let tail = &b[cursor..];
        let block = tail
            .get(..UNCOMPRESSED_WIDTH)
            .ok_or_else(|| DecodeError::InvalidPosition(tail.to_owned()))?;
        let end = cursor + UNCOMPRESSED_WIDTH;

        let (latitude, precision) = Latitude::parse_uncompressed(&block[0..8])?;
        let symbol_table = SymbolTable::decode_uncompressed(block[8])?;
        let longitude = Longitude::parse_uncompressed(&block[9..18], precision)?;
        let symbol_code = decode_symbol_code(block[18], block)?;

        let position = Self {
            latitude,
            longitude,
            precision,
            symbol_table,
            symbol_code,
            altitude: None,
            cst: Cst::Uncompressed,
        };

        Ok((position, end))
    }

    fn decode_compressed(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let tail = &b[cursor..];
        let block = tail
            .get(..COMPRESSED_WIDTH)
            .ok_or_else(|| DecodeError::InvalidPosition(tail.to_owned()))?;
        let end = cursor + COMPRESSED_WIDTH;

        let symbol_table = SymbolTable::decode_compressed(block[0])?;
        let latitude = Latitude::parse_compressed(&block[1..5])?;
        let longitude = Longitude::parse_compressed(&block[5..9])?;
        let symbol_code = decode_symbol_code(block[9], block)?;

        let cst = match CompressedCs::decode(block[10], block[11], block[12])? {
            Some((cs, t)) => Cst::CompressedSome { cs, t },
            None => Cst::CompressedNone,
        };

        let position = Self {
            latitude,
            longitude,
            precision: Precision::default(),
            symbol_table,
            symbol_code,
            altitude: None,
            cst,
        };

        Ok((position, end))
    }

    /// Writes the 13 byte compressed form. Course/speed is always written as
    /// blank.
    pub fn encode_compressed<W: Write>(&self, buf: &mut W) -> io::Result<()> {
        buf.write_all(&[self.symbol_table.as_compressed_byte()])?;
        buf.write_all(&self.latitude.encode_compressed())?;
        buf.write_all(&self.longitude.encode_compressed())?;
        write!(buf, "{} sT", self.symbol_code)
    }
}

fn decode_symbol_code(code: u8, block: &[u8]) -> Result<char, DecodeError> {
    if code.is_ascii_graphic() {
        Ok(code as char)
    } else {
        Err(DecodeError::InvalidPosition(block.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compressed_cs::{GpsFix, NmeaSource, Origin};

    #[test]
    fn uncompressed() {
        let (position, end) = Position::decode(b"!4903.50N/07201.75W-Test", 1).unwrap();

        assert_relative_eq!(*position.latitude, 49.05833333333333);
        assert_relative_eq!(*position.longitude, -72.02916666666667);
        assert_eq!(position.symbol_table, SymbolTable::Primary);
        assert_eq!(position.symbol_code, '-');
        assert_eq!(position.altitude, None);
        assert_eq!(position.ambiguity(), None);
        assert_eq!(position.cst, Cst::Uncompressed);
        assert!(!position.is_compressed());
        assert_eq!(end, 20);
    }

    #[test]
    fn uncompressed_with_ambiguity() {
        let (position, _) = Position::decode(b"4903.5 N/07201.75W-", 0).unwrap();

        assert_relative_eq!(*position.latitude, 49.05833333333333);
        assert_relative_eq!(*position.longitude, -72.02833333333334);
        assert_eq!(position.precision, Precision::TenthMinute);
        assert_eq!(position.ambiguity(), Some(1));

        let lat = position.latitude_bounding();
        assert_abs_diff_eq!(*lat.start(), 49.05833333333333, epsilon = 1e-9);
        assert_abs_diff_eq!(*lat.end(), 49.06, epsilon = 1e-9);

        let lon = position.longitude_bounding();
        assert_abs_diff_eq!(*lon.start(), -72.03, epsilon = 1e-9);
        assert_abs_diff_eq!(*lon.end(), -72.02833333333334, epsilon = 1e-9);
    }

    #[test]
    fn ambiguity_box_extends_away_from_zero() {
        let (position, _) = Position::decode(b"4903.  N/07201.  W-", 0).unwrap();
        assert_eq!(position.precision, Precision::OneMinute);

        let lat = position.latitude_bounding();
        assert_abs_diff_eq!(*lat.start(), 49.05, epsilon = 1e-9);
        assert_abs_diff_eq!(*lat.end(), 49.06666666666667, epsilon = 1e-9);
        assert!(lat.contains(&49.06));

        let lon = position.longitude_bounding();
        assert_abs_diff_eq!(*lon.start(), -72.03333333333333, epsilon = 1e-9);
        assert_abs_diff_eq!(*lon.end(), -72.01666666666667, epsilon = 1e-9);
        assert!(lon.contains(&-72.025));

        let (position, _) = Position::decode(b"3350.  S/15112.  E-", 0).unwrap();
        let lat = position.latitude_bounding();
        assert_abs_diff_eq!(*lat.start(), -33.85, epsilon = 1e-9);
        assert_abs_diff_eq!(*lat.end(), -33.833333333333336, epsilon = 1e-9);
        assert!(lat.contains(&-33.84));
    }

    #[test]
    fn uncompressed_overlay() {
        let (position, _) = Position::decode(br"4821.61N\01224.49E^", 0).unwrap();
        assert_eq!(position.symbol_table, SymbolTable::Alternate);

        let (position, _) = Position::decode(b"4821.61NS01224.49E#", 0).unwrap();
        assert_eq!(position.symbol_table, SymbolTable::Overlay('S'));
    }

    #[test]
    fn uncompressed_errors() {
        assert_eq!(
            Position::decode(b"4903.50N/07201.75W", 0),
            Err(DecodeError::InvalidPosition(b"4903.50N/07201.75W".to_vec()))
        );
        assert_eq!(
            Position::decode(b"4903.50N*07201.75W-", 0),
            Err(DecodeError::InvalidSymbolTable('*'))
        );
        assert_eq!(
            Position::decode(b"49x3.50N/07201.75W-", 0),
            Err(DecodeError::InvalidLatitude(b"49x3.50N".to_vec()))
        );
    }

    #[test]
    fn opportunistic_extension() {
        let b = b"4903.50N/07201.75W>088/036Moving";
        let (_, extension, end) = Position::decode_with_extension(b, 0).unwrap();
        assert_eq!(
            extension,
            Some(Extension::DirectionSpeed {
                direction_degrees: 88,
                speed_knots: 36
            })
        );
        assert_eq!(&b[end..], b"Moving");

        let b = b"4903.50N/07201.75W>Test";
        let (_, extension, end) = Position::decode_with_extension(b, 0).unwrap();
        assert_eq!(extension, None);
        assert_eq!(end, 19);

        let b = b"/5L!!<*e7>088/036";
        let (_, extension, end) = Position::decode_with_extension(b, 0).unwrap();
        assert_eq!(extension, None);
        assert_eq!(end, 13);
    }

    #[test]
    fn compressed_without_course() {
        let (position, end) = Position::decode(b"!/ABCD#$%^- >C", 1).unwrap();

        assert_relative_eq!(*position.latitude, 25.97004667573229);
        assert_relative_eq!(*position.longitude, -171.95429033460567);
        assert_eq!(position.symbol_table, SymbolTable::Primary);
        assert_eq!(position.symbol_code, '-');
        assert_eq!(position.cst, Cst::CompressedNone);
        assert_eq!(end, 14);
    }

    #[test]
    fn compressed_with_course() {
        let (position, _) = Position::decode(b"/ABCD#$%^-X>DHello", 0).unwrap();

        match position.cst {
            Cst::CompressedSome {
                cs: CompressedCs::CourseSpeed(cs),
                t,
            } => {
                assert_eq!(cs.course_degrees(), 220);
                assert_eq!(
                    t,
                    CompressionType {
                        gps_fix: GpsFix::Current,
                        nmea_source: NmeaSource::Other,
                        origin: Origin::Tbd,
                    }
                );
            }
            other => panic!("Unexpected {:?}", other),
        }
    }

    #[test]
    fn compressed_numeric_overlay() {
        let (position, _) = Position::decode(b"a5L!!<*e7> sT", 0).unwrap();

        assert_eq!(position.symbol_table, SymbolTable::Overlay('0'));
        assert_relative_eq!(*position.latitude, 49.5);
        assert_relative_eq!(*position.longitude, -72.75000393777269);
        assert_eq!(position.symbol_code, '>');
    }

    #[test]
    fn compressed_errors() {
        assert_eq!(
            Position::decode(b"/5L!!<*e7>", 0),
            Err(DecodeError::InvalidPosition(b"/5L!!<*e7>".to_vec()))
        );
        assert_eq!(
            Position::decode(b"/5L !<*e7> sT", 0),
            Err(DecodeError::InvalidLatitude(b"5L !".to_vec()))
        );
    }

    #[test]
    fn unsupported_layout() {
        assert_eq!(
            Position::decode(b"$GPRMC,", 0),
            Err(DecodeError::UnsupportedPositionFormat(b"$GPRMC,".to_vec()))
        );
        assert_eq!(
            Position::decode(b"!", 1),
            Err(DecodeError::CursorOutOfBounds { cursor: 1, len: 1 })
        );
    }

    #[test]
    fn compressed_round_trip() {
        let mut lat = -89.9;
        while lat <= 89.9 {
            let mut lon = -179.9;
            while lon <= 179.9 {
                let position = Position {
                    latitude: Latitude::new(lat).unwrap(),
                    longitude: Longitude::new(lon).unwrap(),
                    precision: Precision::default(),
                    symbol_table: SymbolTable::Overlay('3'),
                    symbol_code: '>',
                    altitude: None,
                    cst: Cst::CompressedNone,
                };

                let mut buf = vec![];
                position.encode_compressed(&mut buf).unwrap();
                let (decoded, end) = Position::decode(&buf, 0).unwrap();

                assert_eq!(end, 13);
                assert_abs_diff_eq!(*decoded.latitude, lat, epsilon = 0.0005);
                assert_abs_diff_eq!(*decoded.longitude, lon, epsilon = 0.0005);
                assert_eq!(decoded.symbol_table, position.symbol_table);
                assert_eq!(decoded.symbol_code, '>');

                lon += 13.7;
            }
            lat += 7.3;
        }
    }
}
