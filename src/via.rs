#[cfg(feature = "serde")]
use serde::Serialize;

use crate::callsign::AddressFlags;
use crate::{AprsError, Callsign};

/// A single entry of the digipeater path.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Via {
    /// A digipeater callsign and whether it has already repeated the packet.
    Callsign(Callsign, bool),
    QConstruct(QConstruct),
}

impl Via {
    pub fn decode_textual(bytes: &[u8]) -> Option<Self> {
        if let Some(q) = QConstruct::decode_textual(bytes) {
            return Some(Self::QConstruct(q));
        }

        if let Some((c, repeated)) = Callsign::decode_textual(bytes) {
            return Some(Self::Callsign(c, repeated));
        }

        None
    }

    /// Decodes the comma separated path of a TNC2 header, e.g.
    /// `WIDE1-1*,WIDE2-1,qAR,DL4MEA`.
    pub fn decode_textual_list(bytes: &[u8]) -> Result<Vec<Self>, AprsError> {
        if bytes.is_empty() {
            return Ok(vec![]);
        }

        bytes
            .split(|b| *b == b',')
            .map(|v| Self::decode_textual(v).ok_or_else(|| AprsError::InvalidPacket(v.to_owned())))
            .collect()
    }

    /// Decodes one 7 byte AX.25 repeater address. The flags tell the caller
    /// whether more address fields follow.
    pub fn decode_ax25(bytes: &[u8]) -> Result<(Self, AddressFlags), AprsError> {
        let (call, flags) = Callsign::decode_ax25(bytes)?;

        Ok((Self::Callsign(call, flags.repeated), flags))
    }

    pub fn callsign(&self) -> Option<(&Callsign, bool)> {
        match self {
            Self::Callsign(c, repeated) => Some((c, *repeated)),
            Self::QConstruct(_) => None,
        }
    }

    pub fn is_repeated(&self) -> bool {
        matches!(self, Self::Callsign(_, true))
    }
}

// Can't be encoded/decoded as ax.25
// These should never go on the air
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum QConstruct {
    AC,
    AX,
    AU,
    Ao,
    AO,
    AS,
    Ar,
    AR,
    AZ,
    AI,
}

impl QConstruct {
    pub fn decode_textual(bytes: &[u8]) -> Option<Self> {
        let q = match bytes {
            b"qAC" => QConstruct::AC,
            b"qAX" => QConstruct::AX,
            b"qAU" => QConstruct::AU,
            b"qAo" => QConstruct::Ao,
            b"qAO" => QConstruct::AO,
            b"qAS" => QConstruct::AS,
            b"qAr" => QConstruct::Ar,
            b"qAR" => QConstruct::AR,
            b"qAZ" => QConstruct::AZ,
            b"qAI" => QConstruct::AI,
            _ => return None,
        };

        Some(q)
    }

    pub fn as_textual(&self) -> &'static str {
        match self {
            QConstruct::AC => "qAC",
            QConstruct::AX => "qAX",
            QConstruct::AU => "qAU",
            QConstruct::Ao => "qAo",
            QConstruct::AO => "qAO",
            QConstruct::AS => "qAS",
            QConstruct::Ar => "qAr",
            QConstruct::AR => "qAR",
            QConstruct::AZ => "qAZ",
            QConstruct::AI => "qAI",
        }
    }
}
