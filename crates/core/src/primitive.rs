//! Primitive value objects: value objects wrapping exactly one scalar.

use core::cmp::Ordering;

use crate::component::ComponentValue;
use crate::descriptor::Describe;
use crate::error::ValueObjectResult;
use crate::metadata;
use crate::raw::{RawConvert, RawValue};
use crate::value_object::ValueObject;

/// A value object that wraps a single value of an allowed scalar type.
///
/// The equality components are exactly `[value]`. Whether `Value` is allowed
/// (see [`crate::ScalarKind`]) is checked once per closed type on first
/// [`create`](Self::create) and cached; a disallowed type fails every time
/// after that with the same configuration error.
///
/// Conversions are named rather than implicit:
/// - narrowing, instance to raw value: [`to_raw`](Self::to_raw)
/// - widening, raw value to instance: [`create`](Self::create) / [`from_raw`](Self::from_raw)
pub trait PrimitiveValueObject: ValueObject {
    type Value: ComponentValue + Describe + Clone;

    /// The concrete constructor. Does not validate; call [`create`](Self::create).
    fn wrap(value: Self::Value) -> Self;

    fn value(&self) -> &Self::Value;

    /// Validates the closed type (once) and constructs an instance.
    fn create(value: Self::Value) -> ValueObjectResult<Self> {
        metadata::ensure_valid::<Self>()?;
        Ok(Self::wrap(value))
    }

    /// Narrowing conversion to the raw value.
    fn to_raw(&self) -> Self::Value {
        self.value().clone()
    }

    /// Widening conversion from the raw value.
    fn from_raw(value: Self::Value) -> ValueObjectResult<Self> {
        Self::create(value)
    }

    /// Null-first ordering: any instance is greater than an absent one;
    /// otherwise the wrapped values decide.
    ///
    /// `Equal` only when the components are equal. A value that is not
    /// comparable even with itself (NaN) ranks above every other value.
    fn compare(&self, other: Option<&Self>) -> Ordering
    where
        Self::Value: PartialOrd,
    {
        let Some(other) = other else {
            return Ordering::Greater;
        };
        let (a, b) = (self.value(), other.value());
        if a.component_eq(b) {
            return Ordering::Equal;
        }
        a.partial_cmp(b).unwrap_or_else(|| {
            if a.partial_cmp(a).is_none() {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        })
    }
}

/// Null-first comparison of two optional primitive value objects.
pub fn compare_optional<T>(a: Option<&T>, b: Option<&T>) -> Ordering
where
    T: PrimitiveValueObject,
    T::Value: PartialOrd,
{
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(a), b) => a.compare(b),
    }
}

/// Reads the wrapped value as a [`RawValue`].
pub fn extract_raw<T>(value: &T) -> RawValue
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    value.to_raw().into_raw()
}

/// Builds a `T` from a [`RawValue`] whose variant matches `T::Value`.
pub fn construct_raw<T>(raw: RawValue) -> ValueObjectResult<T>
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    let value = T::Value::try_from_raw(raw).map_err(|raw| {
        crate::error::ValueObjectError::no_matching_constructor(
            core::any::type_name::<T>(),
            raw.kind_name(),
        )
    })?;
    T::create(value)
}

/// String conversion in: parse the wrapped value, then construct.
pub fn parse_primitive<T>(input: &str) -> ValueObjectResult<T>
where
    T: PrimitiveValueObject,
    T::Value: RawConvert,
{
    metadata::ensure_valid::<T>()?;
    T::create(T::Value::parse_raw(input)?)
}
