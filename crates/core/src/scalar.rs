//! The scalar allow-list: types a primitive value object may wrap.
//!
//! Every scalar describes itself, acts as an equality component and converts
//! to and from its [`RawValue`] variant.

use core::fmt;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::component::{ComponentValue, fold_u64, fold_u128, str_hash};
use crate::descriptor::{Describe, ScalarKind, TypeDescriptor};
use crate::error::{ValueObjectError, ValueObjectResult};
use crate::raw::{RawConvert, RawValue, duration_text};

macro_rules! impl_scalar {
    (@describe_raw $t:ty, $kind:ident) => {
        impl Describe for $t {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::scalar::<$t>(ScalarKind::$kind)
            }
        }

        impl RawConvert for $t {
            fn into_raw(self) -> RawValue {
                RawValue::$kind(self)
            }

            fn try_from_raw(raw: RawValue) -> Result<Self, RawValue> {
                match raw {
                    RawValue::$kind(value) => Ok(value),
                    other => Err(other),
                }
            }

            fn parse_raw(input: &str) -> ValueObjectResult<Self> {
                RawValue::parse(ScalarKind::$kind, input).and_then(|raw| {
                    Self::try_from_raw(raw).map_err(|raw| {
                        ValueObjectError::parse(
                            ScalarKind::$kind.name(),
                            input,
                            format!("unexpected {} value", raw.kind_name()),
                        )
                    })
                })
            }
        }
    };
    ($t:ty, $kind:ident, |$v:ident| $hash:expr) => {
        impl_scalar!(@describe_raw $t, $kind);

        impl ComponentValue for $t {
            fn component_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn component_hash(&self) -> Option<i32> {
                let $v = self;
                Some($hash)
            }

            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

impl_scalar!(bool, Bool, |v| i32::from(*v));
impl_scalar!(i8, I8, |v| i32::from(*v));
impl_scalar!(i16, I16, |v| i32::from(*v));
impl_scalar!(i32, I32, |v| *v);
impl_scalar!(i64, I64, |v| fold_u64(*v as u64));
impl_scalar!(i128, I128, |v| fold_u128(*v as u128));
impl_scalar!(isize, Isize, |v| fold_u64(*v as i64 as u64));
impl_scalar!(u8, U8, |v| i32::from(*v));
impl_scalar!(u16, U16, |v| i32::from(*v));
impl_scalar!(u32, U32, |v| *v as i32);
impl_scalar!(u64, U64, |v| fold_u64(*v));
impl_scalar!(u128, U128, |v| fold_u128(*v));
impl_scalar!(usize, Usize, |v| fold_u64(*v as u64));
impl_scalar!(char, Char, |v| u32::from(*v) as i32);
impl_scalar!(String, String, |v| str_hash(v));
impl_scalar!(NaiveDate, Date, |v| v.num_days_from_ce());
impl_scalar!(NaiveTime, Time, |v| {
    (v.num_seconds_from_midnight() as i32) ^ (v.nanosecond() as i32)
});
impl_scalar!(Uuid, Uuid, |v| fold_u128(v.as_u128()));

// Instants compare by point in time, so they hash by it as well.
impl_scalar!(DateTime<Utc>, DateTime, |v| instant_hash(v.timestamp(), v.timestamp_subsec_nanos()));
impl_scalar!(DateTime<FixedOffset>, DateTimeOffset, |v| {
    instant_hash(v.timestamp(), v.timestamp_subsec_nanos())
});

fn instant_hash(seconds: i64, nanos: u32) -> i32 {
    fold_u64(seconds as u64) ^ nanos as i32
}

impl_scalar!(@describe_raw Decimal, Decimal);

impl ComponentValue for Decimal {
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    // 1.0 == 1.00, so hash the normalized form.
    fn component_hash(&self) -> Option<i32> {
        let n = self.normalize();
        Some(fold_u128(n.mantissa() as u128) ^ n.scale() as i32)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl_scalar!(@describe_raw TimeDelta, Duration);

impl ComponentValue for TimeDelta {
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn component_hash(&self) -> Option<i32> {
        Some(fold_u64(self.num_seconds() as u64) ^ self.subsec_nanos())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&duration_text::format(self))
    }
}

macro_rules! impl_float {
    ($t:ty, $kind:ident) => {
        impl_scalar!(@describe_raw $t, $kind);

        // NaN equals NaN; 0.0 equals -0.0.
        impl ComponentValue for $t {
            fn component_eq(&self, other: &Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }

            fn component_hash(&self) -> Option<i32> {
                let canonical = if *self == 0.0 {
                    0.0
                } else if self.is_nan() {
                    <$t>::NAN
                } else {
                    *self
                };
                Some(fold_u64(canonical.to_bits() as u64))
            }

            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

impl_float!(f32, F32);
impl_float!(f64, F64);
