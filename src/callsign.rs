use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::AprsError;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Callsign {
    pub call: String,
    pub ssid: Option<String>,
}

/// Flag bits carried in the last byte of an AX.25 address field.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct AddressFlags {
    /// Bit 0: this is the final address field before the control byte.
    pub last: bool,
    /// Bit 7: the "H" bit, set once a digipeater has repeated the frame.
    pub repeated: bool,
}

impl Callsign {
    pub fn new<T: Into<String>>(call: T, ssid: Option<T>) -> Callsign {
        Callsign {
            call: call.into(),
            ssid: ssid.map(|ssid| ssid.into()),
        }
    }

    pub fn new_no_ssid<T: Into<String>>(call: T) -> Callsign {
        Callsign {
            call: call.into(),
            ssid: None,
        }
    }

    pub fn call(&self) -> &str {
        &self.call
    }

    pub fn ssid(&self) -> Option<&str> {
        self.ssid.as_deref()
    }

    pub(crate) fn to_uppercase(&self) -> Callsign {
        Callsign {
            call: self.call.to_ascii_uppercase(),
            ssid: self.ssid.as_ref().map(|s| s.to_ascii_uppercase()),
        }
    }

    /// Decodes a textual path entry. A trailing `*` marks the entry as
    /// repeated and is not part of the callsign.
    pub fn decode_textual(b: &[u8]) -> Option<(Self, bool)> {
        let (b, repeated) = match b.strip_suffix(b"*") {
            Some(rest) => (rest, true),
            None => (b, false),
        };

        let s = std::str::from_utf8(b).ok()?;
        let callsign = s.parse().ok()?;

        Some((callsign, repeated))
    }

    /// Decodes a 7 byte AX.25 address field: six left-shifted ASCII
    /// characters, space padded, followed by the SSID byte.
    pub fn decode_ax25(b: &[u8]) -> Result<(Self, AddressFlags), AprsError> {
        if b.len() != 7 {
            return Err(AprsError::InvalidAddress(b.to_owned()));
        }

        let call: String = b[..6]
            .iter()
            .map(|c| (c >> 1) as char)
            .collect::<String>()
            .trim_end()
            .to_owned();

        if call.is_empty() {
            return Err(AprsError::EmptyCallsign(String::new()));
        }

        let ssid = (b[6] >> 1) & 0x0F;
        let flags = AddressFlags {
            last: b[6] & 0x01 != 0,
            repeated: b[6] & 0x80 != 0,
        };

        let ssid = match ssid {
            0 => None,
            n => Some(n.to_string()),
        };

        Ok((Callsign { call, ssid }, flags))
    }
}

impl FromStr for Callsign {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        if s.is_empty() {
            return Err(AprsError::EmptyCallsign(s.to_owned()));
        }

        let (call, ssid) = match s.split_once('-') {
            None => return Ok(Callsign::new(s, None)),
            Some(parts) => parts,
        };

        if call.is_empty() {
            return Err(AprsError::EmptyCallsign(s.to_owned()));
        }

        if ssid.is_empty() {
            return Err(AprsError::EmptySSID(s.to_owned()));
        }

        Ok(Callsign::new(call, Some(ssid)))
    }
}

impl Display for Callsign {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.ssid {
            Some(ssid) => write!(f, "{}-{}", self.call, ssid),
            None => write!(f, "{}", self.call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // AX.25 wire form of a callsign: each character shifted left by one
    fn address(call: &str, ssid_byte: u8) -> Vec<u8> {
        let mut b: Vec<u8> = format!("{:<6}", call).bytes().map(|c| c << 1).collect();
        b.push(ssid_byte);
        b
    }

    #[test]
    fn parse_callsign() {
        assert_eq!("ABCDEF".parse(), Ok(Callsign::new("ABCDEF", None)));
    }

    #[test]
    fn parse_with_ssid() {
        assert_eq!("ABCDEF-42".parse(), Ok(Callsign::new("ABCDEF", Some("42"))));
    }

    #[test]
    fn empty_callsign() {
        assert_eq!(
            "-42".parse::<Callsign>(),
            Err(AprsError::EmptyCallsign("-42".to_owned()))
        );
        assert_eq!(
            "".parse::<Callsign>(),
            Err(AprsError::EmptyCallsign("".to_owned()))
        );
    }

    #[test]
    fn empty_ssid() {
        assert_eq!(
            "ABCDEF-".parse::<Callsign>(),
            Err(AprsError::EmptySSID("ABCDEF-".to_owned()))
        );
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Callsign::new("N0CALL", Some("7")).to_string(), "N0CALL-7");
        assert_eq!(Callsign::new_no_ssid("WIDE2").to_string(), "WIDE2");
    }

    #[test]
    fn textual_repeated_marker() {
        assert_eq!(
            Callsign::decode_textual(b"WIDE1-1*"),
            Some((Callsign::new("WIDE1", Some("1")), true))
        );
        assert_eq!(
            Callsign::decode_textual(b"DL4MEA"),
            Some((Callsign::new_no_ssid("DL4MEA"), false))
        );
        assert_eq!(Callsign::decode_textual(b"*"), None);
    }

    #[test]
    fn ax25_address_with_ssid() {
        let b = address("N0CALL", 0b0110_1110);
        let (call, flags) = Callsign::decode_ax25(&b).unwrap();

        assert_eq!(call, Callsign::new("N0CALL", Some("7")));
        assert!(!flags.last);
        assert!(!flags.repeated);
    }

    #[test]
    fn ax25_address_padding_and_flags() {
        let b = address("WIDE2", 0b1110_0101);
        let (call, flags) = Callsign::decode_ax25(&b).unwrap();

        assert_eq!(call, Callsign::new("WIDE2", Some("2")));
        assert!(flags.last);
        assert!(flags.repeated);
    }

    #[test]
    fn ax25_address_without_ssid() {
        let b = address("APRS", 0b0110_0000);
        let (call, _) = Callsign::decode_ax25(&b).unwrap();

        assert_eq!(call, Callsign::new_no_ssid("APRS"));
    }

    #[test]
    fn ax25_address_errors() {
        assert_eq!(
            Callsign::decode_ax25(&[0x82, 0xa0]),
            Err(AprsError::InvalidAddress(vec![0x82, 0xa0]))
        );
        assert_eq!(
            Callsign::decode_ax25(&address("", 0x60)),
            Err(AprsError::EmptyCallsign(String::new()))
        );
    }
}
