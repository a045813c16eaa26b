//! Value object trait: equality by value, not identity.
//!
//! A value object has **no identity**: it is defined entirely by its equality
//! components, and two instances of one type with equal components are equal.

use core::any::Any;
use core::fmt;

use crate::component::EqualityComponent;
use crate::descriptor::{Describe, short_type_name};
use crate::equality;

/// A value object: equality, hash and rendering derive from an ordered list of
/// equality components.
///
/// ## Equality components
///
/// `equality_components` returns the values that define the object, in a fixed
/// order. The [`value_object!`](crate::value_object!) macro builds it from the
/// listed fields (the usual case: every declared field). Implement it by hand to
/// leave fields out or to compute components.
///
/// Two instances of *different* concrete types are never equal, even when
/// their components are; see [`equality::are_equal`].
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// valuekit_core::value_object!(Money { amount, currency });
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// assert_eq!(m1.to_string(), "Money { 100, USD }");
/// ```
pub trait ValueObject: Describe + Sized {
    /// Ordered equality components.
    fn equality_components(&self) -> Vec<&dyn EqualityComponent>;

    fn value_equals(&self, other: &Self) -> bool {
        equality::are_equal(Some(self), Some(other))
    }

    fn value_hash(&self) -> i32 {
        equality::hash_of(self)
    }

    /// `TypeName { comp1, comp2 }`; for debugging only.
    fn fmt_components(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        equality::render_components(
            f,
            short_type_name(core::any::type_name::<Self>()),
            &self.equality_components(),
        )
    }
}

/// Object-safe view of a [`ValueObject`], used where the concrete type is not
/// known statically.
pub trait DynValueObject: Any {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;

    fn components(&self) -> Vec<&dyn EqualityComponent>;
}

impl<T: ValueObject> DynValueObject for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn components(&self) -> Vec<&dyn EqualityComponent> {
        self.equality_components()
    }
}

impl PartialEq for dyn DynValueObject + '_ {
    fn eq(&self, other: &Self) -> bool {
        equality::are_equal(Some(self), Some(other))
    }
}

impl fmt::Debug for dyn DynValueObject + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        equality::render_components(f, short_type_name(self.type_name()), &self.components())
    }
}
