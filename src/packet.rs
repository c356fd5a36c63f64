#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::trace;

use crate::{decode_body, AprsError, Callsign, DataType, InformationField, Via};

/// AX.25 allows at most eight repeaters in the address field.
pub const MAX_DIGIPEATERS: usize = 8;

const ADDRESS_LEN: usize = 7;
const CONTROL_UI: u8 = 0x03;
const PID_NO_LAYER3: u8 = 0xF0;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct AprsPacket {
    pub from: Callsign,
    pub to: Callsign,
    pub via: Vec<Via>,
    pub data_type: DataType,
    /// The raw body, starting with the data type identifier.
    pub body: Vec<u8>,
    /// The TNC2 line this packet was parsed from. `None` for binary frames.
    pub original: Option<String>,
    pub information: InformationField,
    /// Why decoding the body stopped early, if it did.
    pub fault: Option<String>,
}

impl AprsPacket {
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Decodes a TNC2 line, `SOURCE>DEST,VIA,VIA:body`. Source and
    /// destination are normalized to uppercase; path entries are kept as sent.
    pub fn decode_textual(s: &[u8]) -> Result<Self, AprsError> {
        let from_delimiter = s
            .iter()
            .position(|x| *x == b'>')
            .ok_or_else(|| AprsError::InvalidPacket(s.to_owned()))?;
        let (from, rest) = s.split_at(from_delimiter);
        let rest = &rest[1..];

        let header_delimiter = rest
            .iter()
            .position(|x| *x == b':')
            .ok_or_else(|| AprsError::InvalidPacket(s.to_owned()))?;
        let (to_and_via, body) = rest.split_at(header_delimiter);
        let body = &body[1..];

        let (to, via) = match to_and_via.iter().position(|x| *x == b',') {
            Some(i) => (&to_and_via[..i], &to_and_via[i + 1..]),
            None => (to_and_via, &[][..]),
        };

        let from = parse_callsign(from)?;
        let to = parse_callsign(to)?;
        let via = Via::decode_textual_list(via)?;

        let mut packet = decode_body(from, to, via, body)?;
        packet.original = Some(String::from_utf8_lossy(s).into_owned());

        Ok(packet)
    }

    /// Decodes an AX.25 UI frame with the flags and FCS already removed.
    pub fn decode_ax25(frame: &[u8]) -> Result<Self, AprsError> {
        let address = |offset: usize| {
            frame
                .get(offset..offset + ADDRESS_LEN)
                .ok_or_else(|| AprsError::TruncatedFrame(frame.to_owned()))
        };

        let (to, _) = Callsign::decode_ax25(address(0)?)?;
        let (from, flags) = Callsign::decode_ax25(address(ADDRESS_LEN)?)?;
        trace!(%from, %to, "decoded frame addresses");

        let mut via = vec![];
        let mut last = flags.last;
        let mut offset = 2 * ADDRESS_LEN;

        while !last {
            if via.len() == MAX_DIGIPEATERS {
                return Err(AprsError::TooManyDigipeaters(via.len() + 1));
            }

            let (v, flags) = Via::decode_ax25(address(offset)?)?;
            trace!(via = ?v, last = flags.last, "decoded repeater address");

            via.push(v);
            last = flags.last;
            offset += ADDRESS_LEN;
        }

        let (control, pid) = match frame.get(offset..offset + 2) {
            Some(&[control, pid]) => (control, pid),
            _ => return Err(AprsError::TruncatedFrame(frame.to_owned())),
        };

        if control != CONTROL_UI || pid != PID_NO_LAYER3 {
            return Err(AprsError::InvalidControlPid { control, pid });
        }

        decode_body(from, to, via, &frame[offset + 2..])
    }
}

fn parse_callsign(b: &[u8]) -> Result<Callsign, AprsError> {
    let s = std::str::from_utf8(b).map_err(|_| AprsError::InvalidPacket(b.to_owned()))?;
    let callsign: Callsign = s.parse()?;

    Ok(callsign.to_uppercase())
}
