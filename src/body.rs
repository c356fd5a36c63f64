//! Dispatch on the data type identifier and run the sub-decoders it calls
//! for. Content that fails to decode never aborts the packet; it leaves a
//! fault behind instead.

use tracing::{debug, trace};

use crate::bytes::strip_terminator;
use crate::components::Position;
use crate::information::{Fault, InformationElement, InformationField};
use crate::{altitude, object};
use crate::{AprsError, AprsPacket, Callsign, DataType, DecodeError, Via};
use crate::{Item, Message, Object, Timestamp, Weather};

/// Bodies this long or shorter are only a telemetry header.
const TELEMETRY_MIN_LEN: usize = 18;
/// A `!` position this long or shorter can't have weather data after it.
const POSITION_WEATHER_MIN_LEN: usize = 20;

enum Outcome {
    /// Recognized, but nothing in it is decoded.
    Undecoded,
    Decoded(InformationField),
    Faulted(InformationField, String),
}

type Step<T> = Result<T, (DecodeError, usize)>;

trait At<T> {
    /// Remembers where a failed sub-decoder started.
    fn at(self, cursor: usize) -> Step<T>;
}

impl<T> At<T> for Result<T, DecodeError> {
    fn at(self, cursor: usize) -> Step<T> {
        self.map_err(|e| (e, cursor))
    }
}

/// Builds a packet around an already separated body.
///
/// Only an empty body is an error. Malformed content is reported through
/// [`AprsPacket::fault`] and a fault element in the information field.
pub fn decode_body(
    from: Callsign,
    to: Callsign,
    via: Vec<Via>,
    body: &[u8],
) -> Result<AprsPacket, AprsError> {
    let data_type = DataType::from(*body.first().ok_or(AprsError::EmptyPayload)?);

    trace!(?data_type, len = body.len(), "dispatching body");

    let (information, fault) = match decode_information(data_type, strip_terminator(body)) {
        Outcome::Undecoded => {
            debug!(?data_type, "data type not decoded");
            (InformationField::default(), None)
        }
        Outcome::Decoded(information) => (information, None),
        Outcome::Faulted(information, reason) => (information, Some(reason)),
    };

    Ok(AprsPacket {
        from,
        to,
        via,
        data_type,
        body: body.to_vec(),
        original: None,
        information,
        fault,
    })
}

fn decode_information(data_type: DataType, b: &[u8]) -> Outcome {
    match data_type {
        DataType::Position {
            timestamped: true,
            messaging,
        } => run(messaging, |info| decode_timestamped_position(b, info)),
        DataType::Position {
            timestamped: false,
            messaging,
        } => run(messaging, |info| decode_position(b, info)),
        DataType::RawGps if b.starts_with(b"$ULTW") => Outcome::Undecoded,
        DataType::MicE | DataType::RawGps => run(false, |_| {
            Err((DecodeError::UnsupportedPositionFormat(b.to_vec()), 1))
        }),
        DataType::Message => run(false, |info| {
            let (message, _) = Message::decode(b, 1).at(1)?;
            info.push(InformationElement::Message(message));
            Ok(())
        }),
        DataType::Object => decode_object(b),
        DataType::Item => run(false, |info| {
            let (item, _) = Item::decode(b, 1).at(1)?;
            info.set_comment(&item.comment);
            info.set_extension(item.extension.clone());
            info.push(InformationElement::Item(item));
            Ok(())
        }),
        DataType::PositionlessWeather | DataType::PeetBrosWeather => {
            run(false, |info| decode_weather(b, info))
        }
        DataType::Telemetry => {
            if b.len() > TELEMETRY_MIN_LEN {
                trace!("telemetry not decoded");
            }
            Outcome::Undecoded
        }
        DataType::Status
        | DataType::StationCapabilities
        | DataType::Query
        | DataType::UserDefined
        | DataType::ThirdParty
        | DataType::Reserved(_)
        | DataType::Unknown(_) => Outcome::Undecoded,
    }
}

/// Runs a decoder against a fresh information field. A decoder failure is
/// recorded as a fault element, keeping whatever was decoded before it.
fn run<F>(messaging: bool, decode: F) -> Outcome
where
    F: FnOnce(&mut InformationField) -> Step<()>,
{
    let mut info = InformationField::default();
    info.set_messaging_supported(messaging);

    match decode(&mut info) {
        Ok(()) => Outcome::Decoded(info),
        Err((e, cursor)) => {
            let reason = e.to_string();
            debug!(%reason, cursor, "content fault");

            info.push(InformationElement::Fault(Fault {
                reason: reason.clone(),
                cursor,
            }));
            Outcome::Faulted(info, reason)
        }
    }
}

fn decode_timestamped_position(b: &[u8], info: &mut InformationField) -> Step<()> {
    let (timestamp, cursor) = Timestamp::decode(b, 1).at(1)?;
    info.push(InformationElement::Timestamp(timestamp));

    let (position, cursor) = Position::decode(b, cursor).at(cursor)?;

    if position.is_weather_station() {
        return push_weather_station(b, cursor, position, info);
    }

    push_position(b, cursor, position, info)
}

fn decode_position(b: &[u8], info: &mut InformationField) -> Step<()> {
    let (position, cursor) = Position::decode(b, 1).at(1)?;

    if cursor == b.len() {
        info.push(InformationElement::Position(position));
        return Ok(());
    }

    if position.is_weather_station() && b.len() > POSITION_WEATHER_MIN_LEN {
        return push_weather_station(b, cursor, position, info);
    }

    push_position(b, cursor, position, info)
}

fn push_weather_station(
    b: &[u8],
    cursor: usize,
    position: Position,
    info: &mut InformationField,
) -> Step<()> {
    let (weather, end) = Weather::decode(b, cursor).at(cursor)?;

    info.push(InformationElement::Position(position));
    info.push(InformationElement::Weather(weather));
    info.set_comment(&b[end..]);

    Ok(())
}

// Anything not consumed by a data extension is comment, which may hold an
// altitude.
fn push_position(
    b: &[u8],
    cursor: usize,
    mut position: Position,
    info: &mut InformationField,
) -> Step<()> {
    let (extension, cursor) = position.decode_extension(b, cursor);

    // A failed scan still keeps the position ahead of the fault.
    let altitude = altitude::scan(b, cursor);
    if let Ok(found) = altitude {
        position.altitude = found;
    }

    info.set_extension(extension);
    info.set_comment(b.get(cursor..).unwrap_or(&[]));
    info.push(InformationElement::Position(position));

    altitude.map(|_| ()).at(cursor)
}

fn decode_object(b: &[u8]) -> Outcome {
    if b.len() < object::MIN_BODY_LEN {
        let reason = format!("Object body too short ({} bytes) for a valid object", b.len());
        debug!(%reason, "content fault");

        let mut info = InformationField::default();
        info.push(InformationElement::Object(Object::faulted(reason.clone())));
        return Outcome::Faulted(info, reason);
    }

    run(false, |info| {
        let (object, _) = Object::decode(b, 1).at(1)?;
        info.set_comment(&object.comment);
        info.set_extension(object.extension.clone());
        info.push(InformationElement::Object(object));
        Ok(())
    })
}

// Positionless reports may start with a month/day/hour/minute timestamp.
fn decode_weather(b: &[u8], info: &mut InformationField) -> Step<()> {
    let cursor = match Timestamp::decode_mdhm(b, 1) {
        Ok((timestamp, cursor)) => {
            info.push(InformationElement::Timestamp(timestamp));
            cursor
        }
        Err(_) => 1,
    };

    let (weather, end) = Weather::decode(b, cursor).at(cursor)?;
    info.push(InformationElement::Weather(weather));
    info.set_comment(&b[end..]);

    Ok(())
}
