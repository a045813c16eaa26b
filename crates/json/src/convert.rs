//! Mapping between [`RawValue`] and JSON.
//!
//! Booleans and numbers map to their JSON counterparts. 128-bit integers that
//! do not fit 64 bits, and non-finite floats, are written as strings. Every
//! other scalar is written as its text form. Reading accepts either form for
//! numbers.

use serde_json::{Number, Value};
use valuekit_core::{RawValue, ScalarKind, TypeDescriptor, ValueObjectError};

use crate::error::{JsonAdapterError, JsonResult};

pub fn raw_to_json(raw: &RawValue) -> Value {
    match raw {
        RawValue::Null => Value::Null,
        RawValue::Bool(v) => Value::Bool(*v),
        RawValue::I8(v) => Value::from(*v),
        RawValue::I16(v) => Value::from(*v),
        RawValue::I32(v) => Value::from(*v),
        RawValue::I64(v) => Value::from(*v),
        RawValue::Isize(v) => Value::from(*v),
        RawValue::U8(v) => Value::from(*v),
        RawValue::U16(v) => Value::from(*v),
        RawValue::U32(v) => Value::from(*v),
        RawValue::U64(v) => Value::from(*v),
        RawValue::Usize(v) => Value::from(*v),
        RawValue::I128(v) => i64::try_from(*v).map_or_else(|_| Value::String(v.to_string()), Value::from),
        RawValue::U128(v) => u64::try_from(*v).map_or_else(|_| Value::String(v.to_string()), Value::from),
        RawValue::F32(v) => float_to_json(f64::from(*v)),
        RawValue::F64(v) => float_to_json(*v),
        other => Value::String(other.to_string()),
    }
}

fn float_to_json(value: f64) -> Value {
    Number::from_f64(value).map_or_else(|| Value::String(value.to_string()), Value::Number)
}

/// Reads `json` as a raw value for the wrapped type `wrapped`.
///
/// JSON `null` always reads as [`RawValue::Null`]; the caller's null policy
/// decides what that means.
pub fn json_to_raw(wrapped: &TypeDescriptor, json: &Value) -> JsonResult<RawValue> {
    if json.is_null() {
        return Ok(RawValue::Null);
    }

    let kind = wrapped.unwrap_optional().scalar_kind().ok_or_else(|| {
        ValueObjectError::configuration(wrapped.name(), wrapped.name(), "not a scalar type")
    })?;
    let unexpected = |expected: &str| JsonAdapterError::unexpected_json(wrapped.name(), expected, json);

    match (kind, json) {
        (ScalarKind::Bool, Value::Bool(v)) => Ok(RawValue::Bool(*v)),
        (ScalarKind::Bool, _) => Err(unexpected("boolean")),
        (kind, Value::Number(n)) if is_integer(kind) => integer_from_number(kind, n)
            .ok_or_else(|| unexpected(&format!("{kind} number"))),
        (ScalarKind::F32, Value::Number(n)) => n
            .as_f64()
            .map(|v| RawValue::F32(v as f32))
            .ok_or_else(|| unexpected("number")),
        (ScalarKind::F64, Value::Number(n)) => n
            .as_f64()
            .map(RawValue::F64)
            .ok_or_else(|| unexpected("number")),
        (kind, Value::String(text)) => Ok(RawValue::parse(kind, text)?),
        (kind, _) if is_integer(kind) || matches!(kind, ScalarKind::F32 | ScalarKind::F64) => {
            Err(unexpected("number or string"))
        }
        (_, _) => Err(unexpected("string")),
    }
}

fn is_integer(kind: ScalarKind) -> bool {
    matches!(
        kind,
        ScalarKind::I8
            | ScalarKind::I16
            | ScalarKind::I32
            | ScalarKind::I64
            | ScalarKind::I128
            | ScalarKind::Isize
            | ScalarKind::U8
            | ScalarKind::U16
            | ScalarKind::U32
            | ScalarKind::U64
            | ScalarKind::U128
            | ScalarKind::Usize
    )
}

/// `None` when the number is fractional or out of range for `kind`.
fn integer_from_number(kind: ScalarKind, n: &Number) -> Option<RawValue> {
    if let Some(v) = n.as_i64() {
        return signed(kind, v);
    }
    n.as_u64().and_then(|v| unsigned(kind, v))
}

fn signed(kind: ScalarKind, v: i64) -> Option<RawValue> {
    Some(match kind {
        ScalarKind::I8 => RawValue::I8(v.try_into().ok()?),
        ScalarKind::I16 => RawValue::I16(v.try_into().ok()?),
        ScalarKind::I32 => RawValue::I32(v.try_into().ok()?),
        ScalarKind::I64 => RawValue::I64(v),
        ScalarKind::I128 => RawValue::I128(i128::from(v)),
        ScalarKind::Isize => RawValue::Isize(v.try_into().ok()?),
        ScalarKind::U8 => RawValue::U8(v.try_into().ok()?),
        ScalarKind::U16 => RawValue::U16(v.try_into().ok()?),
        ScalarKind::U32 => RawValue::U32(v.try_into().ok()?),
        ScalarKind::U64 => RawValue::U64(v.try_into().ok()?),
        ScalarKind::U128 => RawValue::U128(v.try_into().ok()?),
        ScalarKind::Usize => RawValue::Usize(v.try_into().ok()?),
        _ => return None,
    })
}

fn unsigned(kind: ScalarKind, v: u64) -> Option<RawValue> {
    Some(match kind {
        ScalarKind::U64 => RawValue::U64(v),
        ScalarKind::U128 => RawValue::U128(u128::from(v)),
        ScalarKind::Usize => RawValue::Usize(v.try_into().ok()?),
        ScalarKind::I128 => RawValue::I128(i128::from(v)),
        // Anything narrower already fit in i64.
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use valuekit_core::Describe;

    #[test]
    fn numbers_stay_numbers() {
        assert_eq!(raw_to_json(&RawValue::I32(-4)), json!(-4));
        assert_eq!(raw_to_json(&RawValue::U64(u64::MAX)), json!(u64::MAX));
        assert_eq!(raw_to_json(&RawValue::F64(0.5)), json!(0.5));
        assert_eq!(raw_to_json(&RawValue::I128(7)), json!(7));
    }

    #[test]
    fn oversized_and_non_finite_values_become_strings() {
        assert_eq!(
            raw_to_json(&RawValue::U128(u128::MAX)),
            json!(u128::MAX.to_string())
        );
        assert_eq!(raw_to_json(&RawValue::F64(f64::NAN)), json!("NaN"));
    }

    #[test]
    fn reads_numbers_into_the_exact_width() {
        assert_eq!(json_to_raw(&u8::descriptor(), &json!(200)).unwrap(), RawValue::U8(200));
        assert!(json_to_raw(&u8::descriptor(), &json!(300)).is_err());
        assert!(json_to_raw(&i32::descriptor(), &json!(1.5)).is_err());
        assert_eq!(
            json_to_raw(&u128::descriptor(), &json!(u128::MAX.to_string())).unwrap(),
            RawValue::U128(u128::MAX)
        );
    }

    #[test]
    fn null_is_raw_null_even_for_non_optional_types() {
        assert_eq!(json_to_raw(&i32::descriptor(), &json!(null)).unwrap(), RawValue::Null);
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let err = json_to_raw(&bool::descriptor(), &json!("true")).unwrap_err();
        assert!(matches!(err, JsonAdapterError::UnexpectedJson { .. }));

        let err = json_to_raw(&String::descriptor(), &json!(5)).unwrap_err();
        assert!(matches!(err, JsonAdapterError::UnexpectedJson { .. }));
    }

    #[test]
    fn text_scalars_parse_from_strings() {
        assert_eq!(
            json_to_raw(&String::descriptor(), &json!(" padded ")).unwrap(),
            RawValue::String(" padded ".to_string())
        );
        assert_eq!(
            json_to_raw(&Option::<char>::descriptor(), &json!("x")).unwrap(),
            RawValue::Char('x')
        );
    }
}
