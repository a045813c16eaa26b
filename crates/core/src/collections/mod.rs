//! Collections with value semantics: equality and hashing follow content, not
//! identity. Lists are order-sensitive; sets and dictionaries are not.

mod dictionary;
mod list;
mod set;

use core::hash::Hash;

pub use dictionary::ValueDictionary;
pub use list::ValueList;
pub use set::ValueSet;

/// Wraps any iterable in a value collection.
///
/// Calling it on a value collection of the same kind yields an equal
/// collection, never a nested one.
pub trait AsValueCollection: IntoIterator + Sized {
    fn as_value_list(self) -> ValueList<Self::Item> {
        self.into_iter().collect()
    }

    fn as_value_set(self) -> ValueSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        self.into_iter().collect()
    }

    fn as_value_dictionary<K, V>(self) -> ValueDictionary<K, V>
    where
        Self: IntoIterator<Item = (K, V)>,
        K: Hash + Eq,
    {
        self.into_iter().collect()
    }
}

impl<I: IntoIterator> AsValueCollection for I {}
