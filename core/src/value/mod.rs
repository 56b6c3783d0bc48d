//! Generic values, as decoded from data elements.
//!
//! A [`Value`] holds either a single item or a list of items of one kind.
//! Numbers encoded as text (IS, DS) are kept as strings by the decoder
//! and only converted on request, through the `to_*` methods.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use itertools::Itertools;
use num_traits::NumCast;
use snafu::{Backtrace, OptionExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub mod deserialize;

pub use self::deserialize::{parse_date, parse_datetime, parse_time};

/// An error type for a failed conversion of a value
/// into another type.
#[derive(Debug, Snafu)]
#[snafu(display("Could not convert {} value `{}` into {}", original, value, requested))]
pub struct ConvertValueError {
    /// the kind of the original value
    original: &'static str,
    /// the original value, rendered as text
    value: String,
    /// the requested type
    requested: &'static str,
    backtrace: Backtrace,
}

/// A decoded element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single string
    Str(String),
    /// A list of strings
    Strs(Vec<String>),
    /// A signed 16-bit integer
    I16(i16),
    /// A signed 32-bit integer
    I32(i32),
    /// A signed 64-bit integer
    I64(i64),
    /// An unsigned 16-bit integer
    U16(u16),
    /// An unsigned 32-bit integer
    U32(u32),
    /// An unsigned 64-bit integer
    U64(u64),
    /// A single precision floating point number
    F32(f32),
    /// A double precision floating point number
    F64(f64),
    /// A list of integers
    Ints(Vec<i64>),
    /// A list of floating point numbers
    Floats(Vec<f64>),
    /// A calendar date
    Date(NaiveDate),
    /// A list of calendar dates
    Dates(Vec<NaiveDate>),
    /// A time of day
    Time(NaiveTime),
    /// A date and time of day
    DateTime(NaiveDateTime),
}

impl Value {
    /// A short name of the kind of value held.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Strs(_) => "string list",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Ints(_) => "integer list",
            Value::Floats(_) => "float list",
            Value::Date(_) => "date",
            Value::Dates(_) => "date list",
            Value::Time(_) => "time",
            Value::DateTime(_) => "date-time",
        }
    }

    /// The number of items in the value.
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Strs(v) => v.len(),
            Value::Ints(v) => v.len(),
            Value::Floats(v) => v.len(),
            Value::Dates(v) => v.len(),
            _ => 1,
        }
    }

    /// Whether the value holds a list.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Value::Strs(_) | Value::Ints(_) | Value::Floats(_) | Value::Dates(_)
        )
    }

    fn fail<T>(&self, requested: &'static str) -> Result<T, ConvertValueError> {
        ConvertValueSnafu {
            original: self.type_name(),
            value: self.to_string(),
            requested,
        }
        .fail()
    }

    /// Retrieve the value as a single string.
    /// Lists are joined with backslashes, as they would be encoded.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Retrieve every item of the value as a string.
    pub fn to_multi_str(&self) -> Vec<String> {
        match self {
            Value::Str(s) => vec![s.clone()],
            Value::Strs(v) => v.clone(),
            Value::Ints(v) => v.iter().map(ToString::to_string).collect(),
            Value::Floats(v) => v.iter().map(ToString::to_string).collect(),
            Value::Dates(v) => v.iter().map(|d| d.format("%Y%m%d").to_string()).collect(),
            other => vec![other.to_string()],
        }
    }

    /// Convert a single valued number, or a number in text form,
    /// into an integer of type `T`.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        let out = match self {
            Value::I16(v) => <T as NumCast>::from(*v),
            Value::I32(v) => <T as NumCast>::from(*v),
            Value::I64(v) => <T as NumCast>::from(*v),
            Value::U16(v) => <T as NumCast>::from(*v),
            Value::U32(v) => <T as NumCast>::from(*v),
            Value::U64(v) => <T as NumCast>::from(*v),
            Value::F32(v) => <T as NumCast>::from(*v),
            Value::F64(v) => <T as NumCast>::from(*v),
            Value::Str(s) => {
                let s = s.trim();
                s.parse::<T>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(<T as NumCast>::from))
            }
            _ => None,
        };
        out.map_or_else(|| self.fail(std::any::type_name::<T>()), Ok)
    }

    /// Convert every item of a numeric value into an integer of type `T`.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        match self {
            Value::Ints(v) => v
                .iter()
                .map(|x| <T as NumCast>::from(*x))
                .collect::<Option<Vec<_>>>()
                .map_or_else(|| self.fail("integer list"), Ok),
            Value::Floats(v) => v
                .iter()
                .map(|x| <T as NumCast>::from(*x))
                .collect::<Option<Vec<_>>>()
                .map_or_else(|| self.fail("integer list"), Ok),
            Value::Strs(v) => v
                .iter()
                .map(|s| Value::Str(s.clone()).to_int::<T>())
                .collect(),
            single => Ok(vec![single.to_int()?]),
        }
    }

    /// Convert a single valued number, or a number in text form,
    /// into a double precision float.
    pub fn to_f64(&self) -> Result<f64, ConvertValueError> {
        match self {
            Value::F32(v) => Ok(<f64 as From<f32>>::from(*v)),
            Value::F64(v) => Ok(*v),
            Value::Str(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .map_or_else(|| self.fail("f64"), Ok),
            other => other.to_int::<f64>(),
        }
    }

    /// Convert every item of a numeric value into a double precision float.
    pub fn to_multi_f64(&self) -> Result<Vec<f64>, ConvertValueError> {
        match self {
            Value::Floats(v) => Ok(v.clone()),
            Value::Ints(v) => Ok(v.iter().map(|x| *x as f64).collect()),
            Value::Strs(v) => v.iter().map(|s| Value::Str(s.clone()).to_f64()).collect(),
            single => Ok(vec![single.to_f64()?]),
        }
    }

    /// Retrieve the value as a date,
    /// parsing it if it is still in text form.
    pub fn to_date(&self) -> Result<NaiveDate, ConvertValueError> {
        match self {
            Value::Date(d) => Ok(*d),
            Value::DateTime(dt) => Ok(dt.date()),
            Value::Str(s) => parse_date(s).map_or_else(|| self.fail("date"), Ok),
            other => other.fail("date"),
        }
    }

    /// Retrieve the value as a time of day,
    /// parsing it if it is still in text form.
    pub fn to_time(&self) -> Result<NaiveTime, ConvertValueError> {
        match self {
            Value::Time(t) => Ok(*t),
            Value::DateTime(dt) => Ok(dt.time()),
            Value::Str(s) => parse_time(s).map_or_else(|| self.fail("time"), Ok),
            other => other.fail("time"),
        }
    }

    /// Retrieve the value as a date-time,
    /// parsing it if it is still in text form.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, ConvertValueError> {
        match self {
            Value::DateTime(dt) => Ok(*dt),
            Value::Str(s) => parse_datetime(s).map_or_else(|| self.fail("date-time"), Ok),
            other => other.fail("date-time"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Strs(v) => write!(f, "{}", v.iter().join("\\")),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Ints(v) => write!(f, "{}", v.iter().join("\\")),
            Value::Floats(v) => write!(f, "{}", v.iter().join("\\")),
            Value::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Value::Dates(v) => write!(f, "{}", v.iter().map(|d| d.format("%Y%m%d")).join("\\")),
            Value::Time(t) => write!(f, "{}", t.format("%H%M%S%.f")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y%m%d%H%M%S%.f")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

/// Shortcut for turning a list of items into a list value.
pub fn strs<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Strs(items.into_iter().map(Into::into).collect())
}
