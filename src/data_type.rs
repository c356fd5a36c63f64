#[cfg(feature = "serde")]
use serde::Serialize;

/// The data type identifier, the first byte of every packet body.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `!` and `=` without a timestamp, `/` and `@` with one. `=` and `@`
    /// announce that the station can handle messages.
    Position { timestamped: bool, messaging: bool },
    /// `` ` `` and `'`
    MicE,
    /// `$`, raw NMEA sentences or Ultimeter weather data
    RawGps,
    /// `:`
    Message,
    /// `;`
    Object,
    /// `)`
    Item,
    /// `>`
    Status,
    /// `<`
    StationCapabilities,
    /// `?`
    Query,
    /// `{`
    UserDefined,
    /// `}`
    ThirdParty,
    /// `T`
    Telemetry,
    /// `#` and `*`
    PeetBrosWeather,
    /// `_`
    PositionlessWeather,
    /// `A-S`, `U-Z` and `0-9`, shared with non-APRS traffic
    Reserved(u8),
    Unknown(u8),
}

impl From<u8> for DataType {
    fn from(b: u8) -> Self {
        match b {
            b'!' => Self::Position {
                timestamped: false,
                messaging: false,
            },
            b'=' => Self::Position {
                timestamped: false,
                messaging: true,
            },
            b'/' => Self::Position {
                timestamped: true,
                messaging: false,
            },
            b'@' => Self::Position {
                timestamped: true,
                messaging: true,
            },
            b'`' | b'\'' => Self::MicE,
            b'$' => Self::RawGps,
            b':' => Self::Message,
            b';' => Self::Object,
            b')' => Self::Item,
            b'>' => Self::Status,
            b'<' => Self::StationCapabilities,
            b'?' => Self::Query,
            b'{' => Self::UserDefined,
            b'}' => Self::ThirdParty,
            b'T' => Self::Telemetry,
            b'#' | b'*' => Self::PeetBrosWeather,
            b'_' => Self::PositionlessWeather,
            b'A'..=b'S' | b'U'..=b'Z' | b'0'..=b'9' => Self::Reserved(b),
            _ => Self::Unknown(b),
        }
    }
}
