use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::DecodeError;

/// Symbol code of a weather station, in either table.
pub const WEATHER_STATION: char = '_';

/// The symbol table identifier that precedes (uncompressed) or leads
/// (compressed) the symbol code.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SymbolTable {
    /// `/`
    Primary,
    /// `\`
    Alternate,
    /// The alternate table with an overlay character `0-9` or `A-Z`.
    Overlay(char),
}

impl SymbolTable {
    /// Table identifier as written in the textual position format.
    pub fn decode_uncompressed(b: u8) -> Result<Self, DecodeError> {
        match b {
            b'/' => Ok(Self::Primary),
            b'\\' => Ok(Self::Alternate),
            b'0'..=b'9' | b'A'..=b'Z' => Ok(Self::Overlay(b as char)),
            _ => Err(DecodeError::InvalidSymbolTable(b as char)),
        }
    }

    /// Table identifier as written in the compressed position format, where
    /// numeric overlays are sent as `a-j` so they can't be mistaken for the
    /// first digit of an uncompressed latitude.
    pub fn decode_compressed(b: u8) -> Result<Self, DecodeError> {
        match b {
            b'/' => Ok(Self::Primary),
            b'\\' => Ok(Self::Alternate),
            b'A'..=b'Z' => Ok(Self::Overlay(b as char)),
            b'a'..=b'j' => Ok(Self::Overlay((b - b'a' + b'0') as char)),
            _ => Err(DecodeError::InvalidSymbolTable(b as char)),
        }
    }

    pub(crate) fn is_compressed_table(b: u8) -> bool {
        Self::decode_compressed(b).is_ok()
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Primary => '/',
            Self::Alternate => '\\',
            Self::Overlay(c) => *c,
        }
    }

    pub(crate) fn as_compressed_byte(&self) -> u8 {
        match self {
            Self::Overlay(c) if c.is_ascii_digit() => *c as u8 - b'0' + b'a',
            other => other.as_char() as u8,
        }
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
