/// Structural failures: no payload can be located, so no packet is built.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum AprsError {
    #[error("Invalid Packet: {0:?}")]
    InvalidPacket(Vec<u8>),
    #[error("Empty Callsign: {0}")]
    EmptyCallsign(String),
    #[error("Empty Callsign SSID: {0}")]
    EmptySSID(String),
    #[error("Invalid Address Field: {0:?}")]
    InvalidAddress(Vec<u8>),
    #[error("Truncated Frame: {0:?}")]
    TruncatedFrame(Vec<u8>),
    #[error("Too Many Digipeaters: {0}")]
    TooManyDigipeaters(usize),
    #[error("Invalid Control/PID: {control:#04x}/{pid:#04x}")]
    InvalidControlPid { control: u8, pid: u8 },
    #[error("Empty Payload")]
    EmptyPayload,
}

/// Content faults raised by the information field sub-decoders.
///
/// These never reach the caller of [`crate::decode_body`]; the dispatcher
/// turns them into a [`crate::Fault`] on the packet instead.
#[derive(Debug, Eq, PartialEq, Clone, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid Timestamp: {0:?}")]
    InvalidTimestamp(Vec<u8>),
    #[error("Unsupported Position Format: {0:?}")]
    UnsupportedPositionFormat(Vec<u8>),
    #[error("Invalid Position: {0:?}")]
    InvalidPosition(Vec<u8>),
    #[error("Invalid Latitude: {0:?}")]
    InvalidLatitude(Vec<u8>),
    #[error("Invalid Longitude: {0:?}")]
    InvalidLongitude(Vec<u8>),
    #[error("Invalid Symbol Table: {0:?}")]
    InvalidSymbolTable(char),
    #[error("Invalid Compressed Course/Speed: {0:?}")]
    InvalidCs([u8; 2]),
    #[error("Invalid Extension: {0:?}")]
    InvalidExtension(Vec<u8>),
    #[error("Invalid Message Destination: {0:?}")]
    InvalidMessageDestination(Vec<u8>),
    #[error("Invalid Object Name: {0:?}")]
    InvalidObjectName(Vec<u8>),
    #[error("Invalid Item Name: {0:?}")]
    InvalidItemName(Vec<u8>),
    #[error("Cursor {cursor} is past the end of the {len} byte body")]
    CursorOutOfBounds { cursor: usize, len: usize },
}
