//! Addressed messages, acknowledgements, rejections and bulletins.
//!
//! `:ADDRESSEE:text{id`, where the addressee is space padded to nine bytes.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bytes::trim_spaces_end;
use crate::DecodeError;

const ADDRESSEE_WIDTH: usize = 9;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Message,
    /// `ack` followed by the number of the message being acknowledged
    Ack,
    /// `rej` followed by the number of the message being rejected
    Reject,
    /// Addressed to `BLNn` or `BLNgroup`
    Bulletin,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub addressee: Vec<u8>,
    pub text: Vec<u8>,
    /// Message number. For acks and rejects this is the number being
    /// answered.
    pub id: Option<Vec<u8>>,
    pub kind: MessageKind,
}

impl Message {
    /// Decodes a message whose addressee starts at `cursor`. Messages run to
    /// the end of the body, so the returned cursor is always `b.len()`.
    pub fn decode(b: &[u8], cursor: usize) -> Result<(Self, usize), DecodeError> {
        let rest = b.get(cursor..).unwrap_or(&[]);

        let addressee = match rest.get(..ADDRESSEE_WIDTH) {
            Some(a) if rest.get(ADDRESSEE_WIDTH) == Some(&b':') => trim_spaces_end(a).to_vec(),
            // Dest must be padded with spaces to 9 characters long
            _ => {
                let end = rest.iter().position(|&c| c == b':').unwrap_or(rest.len());
                return Err(DecodeError::InvalidMessageDestination(rest[..end].to_vec()));
            }
        };

        let body = &rest[ADDRESSEE_WIDTH + 1..];

        let (kind, text, id) = if let Some(id) = body.strip_prefix(b"ack") {
            (MessageKind::Ack, body, Some(id.to_vec()))
        } else if let Some(id) = body.strip_prefix(b"rej") {
            (MessageKind::Reject, body, Some(id.to_vec()))
        } else {
            let mut splitter = body.splitn(2, |&c| c == b'{');
            let text = splitter.next().unwrap_or(&[]);
            let id = splitter.next().map(|x| x.to_vec());

            let kind = if addressee.starts_with(b"BLN") {
                MessageKind::Bulletin
            } else {
                MessageKind::Message
            };

            (kind, text, id)
        };

        let message = Self {
            addressee,
            text: text.to_vec(),
            id,
            kind,
        };

        Ok((message, b.len()))
    }
}
