//! Any APRS station can manually report the position of an APRS entity (e.g.
//! another station or a weather phenomenon). This is intended for situations
//! where the entity is not capable of reporting its own position.
//! Object Reports specify an Object’s position, can have an optional timestamp,
//! and can include course/speed information or other Extended Data. Object
//! Reports are intended primarily for plotting the positions of moving objects
//! (e.g. spacecraft, storms, marathon runners without trackers).

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::altitude;
use crate::bytes::trim_spaces_end;
use crate::components::{Extension, Position};
use crate::{DecodeError, Timestamp};

const NAME_WIDTH: usize = 9;

/// Shortest body that can hold an object with an uncompressed position.
pub const MIN_BODY_LEN: usize = 30;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub name: Vec<u8>,
    pub live: bool,
    pub timestamp: Option<Timestamp>,
    pub position: Option<Position>,
    pub extension: Option<Extension>,
    pub comment: Vec<u8>,
    /// Set instead of the fields above when the body was too short to hold
    /// an object.
    pub fault: Option<String>,
}

impl Object {
    pub(crate) fn faulted(reason: String) -> Self {
        Self {
            name: b"null".to_vec(),
            live: false,
            timestamp: None,
            position: None,
            extension: None,
            comment: vec![],
            fault: Some(reason),
        }
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Decodes an object whose name starts at `cursor`. The returned cursor
    /// points past the fixed fields; everything from there on is the comment.
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        // format for uncompressed is
        // N Bytes      Description/Value
        // -----------------------------
        // [9]          (object name, space-padded)
        // [1]          (object live =  '*' dead = '_')
        // [7]          (timestamp)
        // [19]         (position)
        // [7/0]        (extended data)
        // [0-36/0-43]  (comment)
        //
        // the compressed format swaps the position for 13 bytes and carries
        // no extended data

        let tail = b.get(cursor..).unwrap_or(&[]);
        let name = tail
            .get(..NAME_WIDTH)
            .ok_or_else(|| DecodeError::InvalidObjectName(tail.to_vec()))?;
        let name_end = cursor + NAME_WIDTH;

        let live = match b.get(name_end) {
            Some(b'*') => true,
            Some(_) => false,
            None => return Err(DecodeError::InvalidObjectName(name.to_vec())),
        };

        let (timestamp, cursor) = Timestamp::decode(b, name_end + 1)?;
        let (mut position, extension, cursor) = Position::decode_with_extension(b, cursor)?;
        position.altitude = altitude::scan(b, cursor)?;

        let object = Self {
            name: trim_spaces_end(name).to_vec(),
            live,
            timestamp: Some(timestamp),
            position: Some(position),
            extension,
            comment: b[cursor..].to_vec(),
            fault: None,
        };

        Ok((object, cursor))
    }
}
