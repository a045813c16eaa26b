//! Fieldless enums as wrapped values.

/// A fieldless enum usable as a wrapped value; implemented by
/// [`enumeration!`](crate::enumeration!).
pub trait Enumeration: Sized + 'static {
    const VARIANT_NAMES: &'static [&'static str];

    fn variant_name(&self) -> &'static str;

    fn from_variant_name(name: &str) -> Option<Self>;

    /// Declaration index, used as the hash.
    fn ordinal(&self) -> i32 {
        Self::VARIANT_NAMES
            .iter()
            .position(|name| *name == self.variant_name())
            .map_or(-1, |index| index as i32)
    }
}
