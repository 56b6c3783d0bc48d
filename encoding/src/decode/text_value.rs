//! Decoders of textual values and of the few binary values
//! which are rendered as text (attribute tags, unknown bytes).

use crate::decode::{BadValueLengthSnafu, Result, ValueOverflowSnafu};
use crate::text::{decode_text, split_values, trim_padding};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmtree_core::header::VR;
use dcmtree_core::value::{parse_date, parse_datetime, parse_time, Value};
use snafu::{ensure, OptionExt};

/// Average number of days in a month.
const DAYS_PER_MONTH: f64 = 30.436875;
/// Average number of days in a year.
const DAYS_PER_YEAR: f64 = 365.2425;

fn trimmed(bytes: &[u8]) -> String {
    let text = decode_text(bytes);
    trim_padding(&text).to_owned()
}

/// One string, or a list of strings if the text holds backslash delimiters.
fn one_or_many(text: String) -> Value {
    if text.contains('\\') {
        Value::Strs(split_values(&text).map(str::to_owned).collect())
    } else {
        Value::Str(text)
    }
}

/// Text which may hold multiple values (AE, CS, DS, IS, LO, PN, SH, UC, UI).
pub(crate) fn split_text(bytes: &[u8]) -> Result<Option<Value>> {
    Ok(Some(one_or_many(trimmed(bytes))))
}

/// Free text, in which a backslash is literal content (LT, ST, UT, UR).
pub(crate) fn free_text(bytes: &[u8]) -> Result<Option<Value>> {
    Ok(Some(Value::Str(trimmed(bytes))))
}

/// A single date (DA).
pub(crate) fn date(bytes: &[u8]) -> Result<Option<Value>> {
    let text = trimmed(bytes);
    Ok(Some(match parse_date(&text) {
        Some(date) => Value::Date(date),
        None => {
            tracing::warn!("Could not parse date `{}`, keeping it as text", text);
            one_or_many(text)
        }
    }))
}

/// Multiple dates (DA).
pub(crate) fn dates(bytes: &[u8]) -> Result<Option<Value>> {
    let text = trimmed(bytes);
    let parsed: Option<Vec<_>> = split_values(&text).map(parse_date).collect();
    Ok(Some(match parsed {
        Some(dates) => Value::Dates(dates),
        None => {
            tracing::warn!("Could not parse dates `{}`, keeping them as text", text);
            one_or_many(text)
        }
    }))
}

/// A time of day (TM).
pub(crate) fn time(bytes: &[u8]) -> Result<Option<Value>> {
    let text = trimmed(bytes);
    if text.contains('\\') {
        return Ok(Some(one_or_many(text)));
    }
    Ok(Some(match parse_time(&text) {
        Some(time) => Value::Time(time),
        None => {
            tracing::warn!("Could not parse time `{}`, keeping it as text", text);
            Value::Str(text)
        }
    }))
}

/// A date and time (DT).
pub(crate) fn datetime(bytes: &[u8]) -> Result<Option<Value>> {
    let text = trimmed(bytes);
    if text.contains('\\') {
        return Ok(Some(one_or_many(text)));
    }
    Ok(Some(match parse_datetime(&text) {
        Some(datetime) => Value::DateTime(datetime),
        None => {
            tracing::warn!("Could not parse date-time `{}`, keeping it as text", text);
            Value::Str(text)
        }
    }))
}

/// An age string (AS): `nnnX`, where X is one of
/// D (days), W (weeks), M (months) and Y (years).
/// The age is decoded into a number of days.
pub(crate) fn age(bytes: &[u8]) -> Result<Option<Value>> {
    let text = trimmed(bytes);
    let digits_end = text
        .rfind(|c: char| c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    let Ok(count) = text[..digits_end].parse::<u16>() else {
        tracing::warn!("Cannot parse age string `{}`", text);
        return Ok(None);
    };

    let overflow = || ValueOverflowSnafu {
        vr: VR::AS,
        value: text.clone(),
    };
    let in_days = |factor: f64| -> Result<u16> {
        let days = (factor * f64::from(count)).round_ties_even();
        ensure!(days <= f64::from(u16::MAX), overflow());
        Ok(days as u16)
    };

    let days = match text.chars().last() {
        Some('D' | 'd') => count,
        Some('W' | 'w') => count.checked_mul(7).with_context(|| overflow())?,
        Some('M' | 'm') => in_days(DAYS_PER_MONTH)?,
        Some('Y' | 'y') => in_days(DAYS_PER_YEAR)?,
        _ => {
            tracing::warn!("Missing age unit in `{}`, assuming days", text);
            count
        }
    };
    tracing::debug!("Parsed age `{}` as {} days", text, days);
    Ok(Some(Value::U16(days)))
}

/// An attribute tag (AT), rendered as `(g,e)` in unpadded hexadecimal.
pub(crate) fn tag_reference(bytes: &[u8]) -> Result<Option<Value>> {
    ensure!(
        bytes.len() == 4,
        BadValueLengthSnafu {
            vr: VR::AT,
            len: bytes.len(),
            size: 4_usize
        }
    );
    let group = LittleEndian::read_u16(&bytes[0..2]);
    let element = LittleEndian::read_u16(&bytes[2..4]);
    Ok(Some(Value::Str(format!("({:x},{:x})", group, element))))
}

/// Any value of unknown representation, rendered
/// as one two-digit hexadecimal string per byte.
pub(crate) fn hex_bytes(bytes: &[u8]) -> Result<Option<Value>> {
    let mut strings: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    Ok(match strings.len() {
        0 => None,
        1 => strings.pop().map(Value::Str),
        _ => Some(Value::Strs(strings)),
    })
}
