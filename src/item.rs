//! Any APRS station can manually report the position of an APRS entity (e.g.
//! another station or a weather phenomenon). This is intended for situations
//! where the entity is not capable of reporting its own position.
//! Item Reports specify an Item’s position, but cannot have a timestamp. While
//! Item reports may also include course/speed or other Extended Data, they are
//! really intended for inanimate things that are occasionally posted on a map
//! (e.g. marathon checkpoints or first-aid posts). Otherwise they are handled in
//! the same way as Object Reports.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::altitude;
use crate::components::{Extension, Position};
use crate::DecodeError;

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 9;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub name: Vec<u8>,
    pub live: bool,
    pub position: Position,
    pub extension: Option<Extension>,
    pub comment: Vec<u8>,
}

impl Item {
    /// Decodes an item whose name starts at `cursor`, returning the cursor
    /// past the position (and extension, if any).
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let rest = b.get(cursor..).unwrap_or(&[]);

        // items are odd, name is 3..9 in length and ends at the first '!'
        // (live) or '_' (killed)
        let name_len = rest
            .iter()
            .take(MAX_NAME_LEN + 1)
            .skip(MIN_NAME_LEN)
            .position(|c| [b'!', b'_'].contains(c))
            .map(|i| i + MIN_NAME_LEN)
            .ok_or_else(|| {
                DecodeError::InvalidItemName(rest[..rest.len().min(MAX_NAME_LEN + 1)].to_vec())
            })?;

        let name = &rest[..name_len];
        let live = rest[name_len] == b'!';

        let (mut position, extension, end) =
            Position::decode_with_extension(b, cursor + name_len + 1)?;
        position.altitude = altitude::scan(b, end)?;

        let item = Self {
            name: name.to_vec(),
            live,
            position,
            extension,
            comment: b[end..].to_vec(),
        };

        Ok((item, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Cst;

    #[test]
    fn parse_uncompressed_item() {
        let b = b")AID #2!4903.50N/07201.75WA";
        let (item, end) = Item::decode(b, 1).unwrap();

        assert_eq!(item.name, b"AID #2");
        assert!(item.live);
        assert_eq!(item.position.symbol_code, 'A');
        assert_eq!(item.position.cst, Cst::Uncompressed);
        assert_relative_eq!(*item.position.latitude, 49.05833333333333);
        assert_relative_eq!(*item.position.longitude, -72.02916666666667);
        assert_eq!(item.comment, b"");
        assert_eq!(end, b.len());
    }

    #[test]
    fn parse_killed_item_with_comment() {
        let (item, _) = Item::decode(b")FIRST_4903.50N/07201.75WA088/036First aid", 1).unwrap();

        assert_eq!(item.name, b"FIRST");
        assert!(!item.live);
        assert_eq!(
            item.extension,
            Some(Extension::DirectionSpeed {
                direction_degrees: 88,
                speed_knots: 36
            })
        );
        assert_eq!(item.comment, b"First aid");
    }

    #[test]
    fn parse_compressed_item() {
        let (item, _) = Item::decode(b")MOBIL!\\5L!!<*e7OS]S/A=001000", 1).unwrap();

        assert_eq!(item.name, b"MOBIL");
        assert!(item.live);
        assert_eq!(item.position.symbol_code, 'O');
        assert_eq!(item.position.altitude, Some(1000));
        assert_eq!(item.comment, b"/A=001000");
    }

    #[test]
    fn invalid_names() {
        assert_eq!(
            Item::decode(b")AB!4903.50N/07201.75WA", 1),
            Err(DecodeError::InvalidItemName(b"AB!4903.50".to_vec()))
        );
        assert_eq!(
            Item::decode(b")ABCDEFGHIJ!4903.50N/07201.75WA", 1),
            Err(DecodeError::InvalidItemName(b"ABCDEFGHIJ".to_vec()))
        );
        assert_eq!(
            Item::decode(b")AB", 1),
            Err(DecodeError::InvalidItemName(b"AB".to_vec()))
        );
    }
}
