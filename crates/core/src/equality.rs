//! Equality engine: structural equality, hash folding and rendering over
//! ordered sequences of equality components.
//!
//! Every operation here is total: any input, including absent instances and
//! instances of different concrete types, yields a defined result.

use core::fmt;

use crate::component::{EqualityComponent, Rendered, str_hash};
use crate::value_object::DynValueObject;

/// Odd multiplier used when folding component hashes.
pub const HASH_MULTIPLIER: i32 = 37;

/// Seed identifying the concrete type; deterministic across processes.
pub fn type_seed(type_name: &str) -> i32 {
    str_hash(type_name)
}

/// `hash * 37 ^ component`, with wraparound.
pub fn combine(hash: i32, component: i32) -> i32 {
    hash.wrapping_mul(HASH_MULTIPLIER) ^ component
}

/// Folds non-null component hashes in enumeration order.
pub fn hash_ordered<I>(seed: i32, hashes: I) -> i32
where
    I: IntoIterator<Item = Option<i32>>,
{
    hashes.into_iter().flatten().fold(seed, combine)
}

/// Folds non-null component hashes in ascending hash order, so the result does
/// not depend on enumeration order.
pub fn hash_unordered<I>(seed: i32, hashes: I) -> i32
where
    I: IntoIterator<Item = Option<i32>>,
{
    let mut sorted: Vec<i32> = hashes.into_iter().flatten().collect();
    sorted.sort_unstable();
    sorted.into_iter().fold(seed, combine)
}

/// Pairwise, in-order component equality.
pub fn components_equal(a: &[&dyn EqualityComponent], b: &[&dyn EqualityComponent]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.dyn_eq(*y))
}

/// Structural equality of two possibly-absent value objects.
///
/// Two absent values are equal; an absent and a present value are not.
/// Present values must be the same concrete type, and then either the same
/// instance or pairwise-equal in their components.
pub fn are_equal(a: Option<&dyn DynValueObject>, b: Option<&dyn DynValueObject>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(_), None) | (None, Some(_)) => false,
        (Some(a), Some(b)) => {
            // A value object and its first field can share an address.
            if a.as_any().type_id() != b.as_any().type_id() {
                return false;
            }
            core::ptr::addr_eq(a as *const dyn DynValueObject, b as *const dyn DynValueObject)
                || components_equal(&a.components(), &b.components())
        }
    }
}

/// Null-aware equality for optional value objects of one static type.
pub fn option_eq<T: DynValueObject>(a: Option<&T>, b: Option<&T>) -> bool {
    are_equal(
        a.map(|v| v as &dyn DynValueObject),
        b.map(|v| v as &dyn DynValueObject),
    )
}

/// Ordered hash of a value object, seeded with its concrete type.
pub fn hash_of(value: &dyn DynValueObject) -> i32 {
    hash_ordered(
        type_seed(value.type_name()),
        value.components().iter().map(|c| c.dyn_hash()),
    )
}

/// Writes `Name { a, b }`, or `Name {}` when there are no components.
pub fn render_components(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    components: &[&dyn EqualityComponent],
) -> fmt::Result {
    if components.is_empty() {
        return write!(f, "{name} {{}}");
    }

    write!(f, "{name} {{ ")?;
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", Rendered(*component))?;
    }
    f.write_str(" }")
}
