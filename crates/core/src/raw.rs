//! Raw values: the untyped payload adapters move in and out of primitive value objects.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::ScalarKind;
use crate::error::{ValueObjectError, ValueObjectResult};

/// Runtime-tagged scalar payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
    Decimal(Decimal),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    DateTimeOffset(DateTime<FixedOffset>),
    Time(NaiveTime),
    #[serde(with = "duration_text")]
    Duration(TimeDelta),
    Uuid(Uuid),
    /// Variant name of an enumeration.
    Enum(String),
}

impl RawValue {
    /// Scalar kind carried, `None` for `Null`.
    pub fn kind(&self) -> Option<ScalarKind> {
        Some(match self {
            RawValue::Null => return None,
            RawValue::Bool(_) => ScalarKind::Bool,
            RawValue::I8(_) => ScalarKind::I8,
            RawValue::I16(_) => ScalarKind::I16,
            RawValue::I32(_) => ScalarKind::I32,
            RawValue::I64(_) => ScalarKind::I64,
            RawValue::I128(_) => ScalarKind::I128,
            RawValue::Isize(_) => ScalarKind::Isize,
            RawValue::U8(_) => ScalarKind::U8,
            RawValue::U16(_) => ScalarKind::U16,
            RawValue::U32(_) => ScalarKind::U32,
            RawValue::U64(_) => ScalarKind::U64,
            RawValue::U128(_) => ScalarKind::U128,
            RawValue::Usize(_) => ScalarKind::Usize,
            RawValue::F32(_) => ScalarKind::F32,
            RawValue::F64(_) => ScalarKind::F64,
            RawValue::Char(_) => ScalarKind::Char,
            RawValue::String(_) => ScalarKind::String,
            RawValue::Decimal(_) => ScalarKind::Decimal,
            RawValue::Date(_) => ScalarKind::Date,
            RawValue::DateTime(_) => ScalarKind::DateTime,
            RawValue::DateTimeOffset(_) => ScalarKind::DateTimeOffset,
            RawValue::Time(_) => ScalarKind::Time,
            RawValue::Duration(_) => ScalarKind::Duration,
            RawValue::Uuid(_) => ScalarKind::Uuid,
            RawValue::Enum(_) => ScalarKind::Enumeration,
        })
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().map_or("null", ScalarKind::name)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Parses `input` as a value of `kind`.
    ///
    /// Enumerations are not checked against a variant list here; the enum's own
    /// [`RawConvert`] does that.
    pub fn parse(kind: ScalarKind, input: &str) -> ValueObjectResult<Self> {
        fn parsed<T>(kind: ScalarKind, input: &str) -> ValueObjectResult<T>
        where
            T: FromStr,
            T::Err: fmt::Display,
        {
            input
                .trim()
                .parse::<T>()
                .map_err(|e| ValueObjectError::parse(kind.name(), input, e))
        }

        Ok(match kind {
            ScalarKind::Bool => RawValue::Bool(parsed(kind, input)?),
            ScalarKind::I8 => RawValue::I8(parsed(kind, input)?),
            ScalarKind::I16 => RawValue::I16(parsed(kind, input)?),
            ScalarKind::I32 => RawValue::I32(parsed(kind, input)?),
            ScalarKind::I64 => RawValue::I64(parsed(kind, input)?),
            ScalarKind::I128 => RawValue::I128(parsed(kind, input)?),
            ScalarKind::Isize => RawValue::Isize(parsed(kind, input)?),
            ScalarKind::U8 => RawValue::U8(parsed(kind, input)?),
            ScalarKind::U16 => RawValue::U16(parsed(kind, input)?),
            ScalarKind::U32 => RawValue::U32(parsed(kind, input)?),
            ScalarKind::U64 => RawValue::U64(parsed(kind, input)?),
            ScalarKind::U128 => RawValue::U128(parsed(kind, input)?),
            ScalarKind::Usize => RawValue::Usize(parsed(kind, input)?),
            ScalarKind::F32 => RawValue::F32(parsed(kind, input)?),
            ScalarKind::F64 => RawValue::F64(parsed(kind, input)?),
            ScalarKind::Char => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => RawValue::Char(c),
                    _ => {
                        return Err(ValueObjectError::parse(
                            kind.name(),
                            input,
                            "expected exactly one character",
                        ));
                    }
                }
            }
            // Strings are taken verbatim, whitespace included.
            ScalarKind::String => RawValue::String(input.to_string()),
            ScalarKind::Decimal => RawValue::Decimal(parsed(kind, input)?),
            ScalarKind::Date => RawValue::Date(parsed(kind, input)?),
            ScalarKind::DateTime => RawValue::DateTime(parsed(kind, input)?),
            ScalarKind::DateTimeOffset => RawValue::DateTimeOffset(parsed(kind, input)?),
            ScalarKind::Time => RawValue::Time(parsed(kind, input)?),
            ScalarKind::Duration => RawValue::Duration(
                duration_text::parse(input.trim())
                    .map_err(|e| ValueObjectError::parse(kind.name(), input, e))?,
            ),
            ScalarKind::Uuid => RawValue::Uuid(parsed(kind, input)?),
            ScalarKind::Enumeration => RawValue::Enum(input.trim().to_string()),
        })
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => Ok(()),
            RawValue::Bool(v) => fmt::Display::fmt(v, f),
            RawValue::I8(v) => fmt::Display::fmt(v, f),
            RawValue::I16(v) => fmt::Display::fmt(v, f),
            RawValue::I32(v) => fmt::Display::fmt(v, f),
            RawValue::I64(v) => fmt::Display::fmt(v, f),
            RawValue::I128(v) => fmt::Display::fmt(v, f),
            RawValue::Isize(v) => fmt::Display::fmt(v, f),
            RawValue::U8(v) => fmt::Display::fmt(v, f),
            RawValue::U16(v) => fmt::Display::fmt(v, f),
            RawValue::U32(v) => fmt::Display::fmt(v, f),
            RawValue::U64(v) => fmt::Display::fmt(v, f),
            RawValue::U128(v) => fmt::Display::fmt(v, f),
            RawValue::Usize(v) => fmt::Display::fmt(v, f),
            RawValue::F32(v) => fmt::Display::fmt(v, f),
            RawValue::F64(v) => fmt::Display::fmt(v, f),
            RawValue::Char(v) => fmt::Display::fmt(v, f),
            RawValue::String(v) => f.write_str(v),
            RawValue::Decimal(v) => fmt::Display::fmt(v, f),
            RawValue::Date(v) => fmt::Display::fmt(v, f),
            RawValue::DateTime(v) => f.write_str(&v.to_rfc3339()),
            RawValue::DateTimeOffset(v) => f.write_str(&v.to_rfc3339()),
            RawValue::Time(v) => fmt::Display::fmt(v, f),
            RawValue::Duration(v) => f.write_str(&duration_text::format(v)),
            RawValue::Uuid(v) => fmt::Display::fmt(v, f),
            RawValue::Enum(v) => f.write_str(v),
        }
    }
}

/// Conversion between a wrapped scalar and its [`RawValue`].
pub trait RawConvert: Sized {
    fn into_raw(self) -> RawValue;

    /// Hands the raw value back when its variant does not fit `Self`.
    fn try_from_raw(raw: RawValue) -> Result<Self, RawValue>;

    /// Parses the textual form produced by [`RawValue`]'s `Display`.
    fn parse_raw(input: &str) -> ValueObjectResult<Self>;
}

impl<T: RawConvert> RawConvert for Option<T> {
    fn into_raw(self) -> RawValue {
        self.map_or(RawValue::Null, RawConvert::into_raw)
    }

    fn try_from_raw(raw: RawValue) -> Result<Self, RawValue> {
        match raw {
            RawValue::Null => Ok(None),
            raw => T::try_from_raw(raw).map(Some),
        }
    }

    fn parse_raw(input: &str) -> ValueObjectResult<Self> {
        if input.is_empty() {
            return Ok(None);
        }
        T::parse_raw(input).map(Some)
    }
}

/// Durations as `[-]H:MM:SS[.fffffffff]`.
pub(crate) mod duration_text {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &TimeDelta) -> String {
        let negative = *value < TimeDelta::zero();
        let magnitude = value.abs();
        let total = magnitude.num_seconds();
        let nanos = magnitude.subsec_nanos();

        let mut out = format!(
            "{}{}:{:02}:{:02}",
            if negative { "-" } else { "" },
            total / 3600,
            (total / 60) % 60,
            total % 60
        );
        if nanos != 0 {
            out.push_str(&format!(".{nanos:09}"));
        }
        out
    }

    pub fn parse(input: &str) -> Result<TimeDelta, String> {
        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (clock, fraction) = match body.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (body, None),
        };

        let parts: Vec<&str> = clock.split(':').collect();
        if parts.len() != 3 {
            return Err("expected H:MM:SS".to_string());
        }
        let number = |s: &str| s.parse::<i64>().map_err(|e| e.to_string());
        let (hours, minutes, seconds) = (number(parts[0])?, number(parts[1])?, number(parts[2])?);
        if !(0..60).contains(&minutes) || !(0..60).contains(&seconds) || hours < 0 {
            return Err("minutes and seconds must be within 0..60".to_string());
        }

        let nanos = match fraction {
            Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
                format!("{f:0<9}").parse::<i64>().map_err(|e| e.to_string())?
            }
            Some(_) => return Err("fraction must be 1 to 9 digits".to_string()),
            None => 0,
        };

        let magnitude = hours
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minutes * 60 + seconds))
            .and_then(TimeDelta::try_seconds)
            .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
            .ok_or_else(|| "duration out of range".to_string())?;

        Ok(if negative { -magnitude } else { magnitude })
    }

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}
