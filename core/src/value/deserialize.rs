//! Parsing of DICOM date and time strings into calendar types.
//!
//! Incomplete values (a date-time without seconds, a time without minutes)
//! are completed with the lowest value of the missing components.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::borrow::Cow;

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn number(text: Option<&str>) -> Option<u32> {
    text.filter(|t| all_digits(t)).and_then(|t| t.parse().ok())
}

/// Decode a DICOM date (DA): `YYYYMMDD`,
/// or the legacy form `YYYY.MM.DD`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let (y, m, d) = match text.len() {
        8 => (text.get(0..4), text.get(4..6), text.get(6..8)),
        10 if text.as_bytes()[4] == b'.' && text.as_bytes()[7] == b'.' => {
            (text.get(0..4), text.get(5..7), text.get(8..10))
        }
        _ => return None,
    };
    NaiveDate::from_ymd_opt(number(y)? as i32, number(m)?, number(d)?)
}

/// Decode a DICOM time (TM): `HH[MM[SS[.F{1,6}]]]`,
/// or the legacy form `HH:MM:SS.frac`.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    let text: Cow<str> = if text.contains(':') {
        text.replace(':', "").into()
    } else {
        text.into()
    };
    let (hms, fraction) = match text.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (text.as_ref(), None),
    };
    if !matches!(hms.len(), 2 | 4 | 6) || !all_digits(hms) {
        return None;
    }
    let hour = number(hms.get(0..2))?;
    let minute = number(hms.get(2..4)).unwrap_or(0);
    let second = number(hms.get(4..6)).unwrap_or(0);
    let micro = match fraction {
        None | Some("") => 0,
        Some(f) if f.len() <= 6 && all_digits(f) => {
            f.parse::<u32>().ok()? * 10u32.pow(6 - f.len() as u32)
        }
        Some(_) => return None,
    };
    if second == 60 {
        // leap second
        NaiveTime::from_hms_micro_opt(hour, minute, 59, 1_000_000 + micro)
    } else {
        NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
    }
}

/// Decode a DICOM date-time (DT): `YYYY[MM[DD[HH[MM[SS[.F{1,6}]]]]]][&ZZXX]`.
///
/// A trailing UTC offset is ignored.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    let text = match text.get(4..).and_then(|rest| rest.find(['+', '-'])) {
        Some(i) => &text[..i + 4],
        None => text,
    };
    if text.len() < 4 {
        return None;
    }
    let date_len = text.len().min(8);
    if !text.is_char_boundary(date_len) {
        return None;
    }
    let (date_part, time_part) = text.split_at(date_len);
    if !all_digits(date_part) || date_part.len() % 2 != 0 {
        return None;
    }
    let year = number(date_part.get(0..4))? as i32;
    let month = number(date_part.get(4..6)).unwrap_or(1);
    let day = number(date_part.get(6..8)).unwrap_or(1);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = if time_part.is_empty() {
        NaiveTime::from_hms_opt(0, 0, 0)?
    } else {
        parse_time(time_part)?
    };
    Some(date.and_time(time))
}
