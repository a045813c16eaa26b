//! Equality components: the values a value object is compared and hashed by.

use core::any::Any;
use core::fmt;

/// A value that can take part in value-object equality.
///
/// The hash is a deterministic 32-bit code (stable across processes), `None`
/// meaning "null": null components are skipped when hashes are folded.
pub trait ComponentValue: 'static {
    fn component_eq(&self, other: &Self) -> bool;

    fn component_hash(&self) -> Option<i32>;

    /// Textual form used when rendering the owning value object.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Object-safe view of a [`ComponentValue`].
pub trait EqualityComponent {
    fn as_any(&self) -> &dyn Any;

    /// False when `other` is a different concrete type.
    fn dyn_eq(&self, other: &dyn EqualityComponent) -> bool;

    fn dyn_hash(&self) -> Option<i32>;

    fn dyn_render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: ComponentValue> EqualityComponent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn EqualityComponent) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.component_eq(other))
    }

    fn dyn_hash(&self) -> Option<i32> {
        self.component_hash()
    }

    fn dyn_render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl fmt::Debug for dyn EqualityComponent + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dyn_render(f)
    }
}

impl<T: ComponentValue> ComponentValue for Option<T> {
    fn component_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.component_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn component_hash(&self) -> Option<i32> {
        self.as_ref().and_then(ComponentValue::component_hash)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => Ok(()),
        }
    }
}

/// Adapter giving any [`ComponentValue`] a `Display` impl.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: ComponentValue> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl fmt::Display for Rendered<'_, dyn EqualityComponent + '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.dyn_render(f)
    }
}

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over raw bytes.
pub fn bytes_hash(bytes: &[u8]) -> i32 {
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash as i32
}

pub fn str_hash(value: &str) -> i32 {
    bytes_hash(value.as_bytes())
}

/// Low and high halves xor-ed together.
pub fn fold_u64(value: u64) -> i32 {
    (value as u32 ^ (value >> 32) as u32) as i32
}

pub fn fold_u128(value: u128) -> i32 {
    fold_u64(value as u64) ^ fold_u64((value >> 64) as u64)
}
