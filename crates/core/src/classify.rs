//! Type classification: is a type a value object, a primitive value object,
//! and what does it wrap.
//!
//! All checks walk the descriptor's base chain, so refining types are recognised
//! through their ancestors. Results are pure functions of the descriptor; see
//! [`crate::metadata`] for the per-type cache built on top of them.

use crate::descriptor::{TypeDescriptor, TypeShape};
use crate::error::{ValueObjectError, ValueObjectResult};

/// True iff the type (or an ancestor) is a value object and the type itself is
/// concrete.
///
/// Optional wrapping is not looked through here.
pub fn is_value_object(descriptor: &TypeDescriptor) -> bool {
    if descriptor.is_abstract() {
        return false;
    }

    descriptor.lineage().any(|d| {
        matches!(
            d.shape(),
            TypeShape::ValueObject { .. } | TypeShape::PrimitiveValueObject { .. }
        )
    })
}

/// True iff the type (or an ancestor) is a primitive value object.
///
/// One level of `Option` is unwrapped first, so `Option<Age>` counts.
pub fn is_primitive_value_object(descriptor: &TypeDescriptor) -> bool {
    let descriptor = descriptor.unwrap_optional();
    if descriptor.is_abstract() {
        return false;
    }

    find_wrapped(descriptor).is_some()
}

/// Wrapped value type of a primitive value object (unwrapping one `Option`).
pub fn wrapped_value_type(descriptor: &TypeDescriptor) -> ValueObjectResult<&TypeDescriptor> {
    find_wrapped(descriptor.unwrap_optional())
        .ok_or_else(|| ValueObjectError::not_primitive(descriptor.name()))
}

/// Whether `descriptor` may be wrapped by a primitive value object.
///
/// One level of `Option` is allowed around a scalar.
pub fn is_allowed_wrapped_type(descriptor: &TypeDescriptor) -> bool {
    descriptor.unwrap_optional().scalar_kind().is_some()
}

fn find_wrapped(descriptor: &TypeDescriptor) -> Option<&TypeDescriptor> {
    descriptor.lineage().find_map(|d| match d.shape() {
        TypeShape::PrimitiveValueObject { wrapped } => Some(wrapped.as_ref()),
        _ => None,
    })
}
