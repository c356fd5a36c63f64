//! [APRS] packet decoder for [Rust]
//!
//! [APRS]: http://www.aprs.org/
//! [Rust]: https://www.rust-lang.org/
//!
//! # Usage
//!
//! ```rust
//! let packet = aprs_decoder::parse_text(
//!     r"ICA3D17F2>APRS,qAS,dl4mea:/074849h4821.61N\01224.49E^322/103/A=003054",
//! )
//! .unwrap();
//!
//! let position = packet.information.position().unwrap();
//! assert_eq!(position.altitude, Some(3054));
//! assert!(!packet.is_faulted());
//! ```
//!
//! Malformed content does not fail the parse. The packet comes back with
//! [`AprsPacket::fault`] set and a fault element in its information field;
//! only a missing header, a bad AX.25 address field or an empty body are
//! errors.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod altitude;
mod base91;
mod body;
mod bytes;
mod callsign;
pub mod components;
mod compressed_cs;
mod data_type;
mod error;
mod information;
mod item;
mod message;
mod object;
mod packet;
mod symbol;
mod timestamp;
mod via;
mod weather;

pub use body::decode_body;
pub use callsign::{AddressFlags, Callsign};
pub use components::{Cst, Directivity, Extension, Latitude, Longitude, Position, Precision};
pub use compressed_cs::{
    CompressedAltitude, CompressedCs, CompressionType, CourseSpeed, GpsFix, NmeaSource, Origin,
    RadioRange,
};
pub use data_type::DataType;
pub use error::{AprsError, DecodeError};
pub use information::{Fault, InformationElement, InformationField, InformationKind};
pub use item::Item;
pub use message::{Message, MessageKind};
pub use object::Object;
pub use packet::{AprsPacket, MAX_DIGIPEATERS};
pub use symbol::{SymbolTable, WEATHER_STATION};
pub use timestamp::Timestamp;
pub use via::{QConstruct, Via};
pub use weather::Weather;

/// Parses a TNC2 formatted line, `SOURCE>DEST,VIA,VIA:body`.
pub fn parse_text(line: &str) -> Result<AprsPacket, AprsError> {
    AprsPacket::decode_textual(line.as_bytes())
}

/// Parses a raw AX.25 UI frame.
pub fn parse_frame(frame: &[u8]) -> Result<AprsPacket, AprsError> {
    AprsPacket::decode_ax25(frame)
}
