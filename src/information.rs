#[cfg(feature = "serde")]
use serde::Serialize;

use crate::components::{Extension, Position};
use crate::{Item, Message, Object, Timestamp, Weather};

/// Which kind of element an [`InformationElement`] holds.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InformationKind {
    Timestamp,
    Position,
    Weather,
    Message,
    Object,
    Item,
    Fault,
}

/// Marker left in the information field when a sub-decoder gave up.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    pub reason: String,
    /// Where in the body decoding stopped.
    pub cursor: usize,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum InformationElement {
    Timestamp(Timestamp),
    Position(Position),
    Weather(Weather),
    Message(Message),
    Object(Object),
    Item(Item),
    Fault(Fault),
}

impl InformationElement {
    pub fn kind(&self) -> InformationKind {
        match self {
            Self::Timestamp(_) => InformationKind::Timestamp,
            Self::Position(_) => InformationKind::Position,
            Self::Weather(_) => InformationKind::Weather,
            Self::Message(_) => InformationKind::Message,
            Self::Object(_) => InformationKind::Object,
            Self::Item(_) => InformationKind::Item,
            Self::Fault(_) => InformationKind::Fault,
        }
    }
}

/// Everything decoded from a packet body, in the order it was decoded.
///
/// Empty when the data type is recognized but carries nothing this crate
/// decodes (status reports, queries, telemetry and so on).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InformationField {
    elements: Vec<InformationElement>,
    comment: Vec<u8>,
    extension: Option<Extension>,
    messaging_supported: bool,
}

impl InformationField {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[InformationElement] {
        &self.elements
    }

    /// First element of the given kind.
    pub fn get(&self, kind: InformationKind) -> Option<&InformationElement> {
        self.elements.iter().find(|e| e.kind() == kind)
    }

    pub fn contains(&self, kind: InformationKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Timestamp(t) => Some(t),
            _ => None,
        })
    }

    pub fn position(&self) -> Option<&Position> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Position(p) => Some(p),
            _ => None,
        })
    }

    pub fn weather(&self) -> Option<&Weather> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Weather(w) => Some(w),
            _ => None,
        })
    }

    pub fn message(&self) -> Option<&Message> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Message(m) => Some(m),
            _ => None,
        })
    }

    pub fn object(&self) -> Option<&Object> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Object(o) => Some(o),
            _ => None,
        })
    }

    pub fn item(&self) -> Option<&Item> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Item(i) => Some(i),
            _ => None,
        })
    }

    pub fn fault(&self) -> Option<&Fault> {
        self.elements.iter().find_map(|e| match e {
            InformationElement::Fault(f) => Some(f),
            _ => None,
        })
    }

    /// Free text following the decoded fields.
    pub fn comment(&self) -> &[u8] {
        &self.comment
    }

    /// Data extension following an uncompressed position.
    pub fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }

    /// Whether the sending station can send and receive messages.
    pub fn messaging_supported(&self) -> bool {
        self.messaging_supported
    }

    pub(crate) fn push(&mut self, element: InformationElement) {
        debug_assert!(
            !matches!(
                element.kind(),
                InformationKind::Timestamp | InformationKind::Position
            ) || !self.contains(element.kind()),
            "duplicate {:?}",
            element.kind()
        );

        self.elements.push(element);
    }

    pub(crate) fn set_comment(&mut self, comment: &[u8]) {
        self.comment = comment.to_vec();
    }

    pub(crate) fn set_extension(&mut self, extension: Option<Extension>) {
        self.extension = extension;
    }

    pub(crate) fn set_messaging_supported(&mut self, supported: bool) {
        self.messaging_supported = supported;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut info = InformationField::default();
        assert!(info.is_empty());

        info.push(InformationElement::Timestamp(Timestamp::HHMMSS(1, 2, 3)));
        info.push(InformationElement::Weather(Weather::default()));
        info.push(InformationElement::Fault(Fault {
            reason: "bad".to_owned(),
            cursor: 8,
        }));

        let kinds: Vec<_> = info.elements().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                InformationKind::Timestamp,
                InformationKind::Weather,
                InformationKind::Fault
            ]
        );

        assert_eq!(info.timestamp(), Some(&Timestamp::HHMMSS(1, 2, 3)));
        assert_eq!(info.weather(), Some(&Weather::default()));
        assert_eq!(info.fault().map(|f| f.cursor), Some(8));
        assert!(!info.contains(InformationKind::Position));
        assert_eq!(info.position(), None);
    }

    #[test]
    fn weather_may_repeat() {
        let mut info = InformationField::default();

        info.push(InformationElement::Weather(Weather::default()));
        info.push(InformationElement::Weather(Weather::default()));

        assert_eq!(info.elements().len(), 2);
    }

    #[test]
    #[should_panic(expected = "duplicate Timestamp")]
    #[cfg(debug_assertions)]
    fn single_timestamp() {
        let mut info = InformationField::default();

        info.push(InformationElement::Timestamp(Timestamp::HHMMSS(1, 2, 3)));
        info.push(InformationElement::Timestamp(Timestamp::HHMMSS(1, 2, 3)));
    }
}
