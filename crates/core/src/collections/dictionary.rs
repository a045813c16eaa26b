use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use crate::component::{ComponentValue, Rendered};
use crate::equality::{hash_ordered, hash_unordered, type_seed};

/// A dictionary compared by content: same keys, each mapped to an equal value.
///
/// Wraps an `IndexMap<K, V>` by adoption. Entry order does not affect
/// equality or hashing.
#[derive(Debug, Clone)]
pub struct ValueDictionary<K, V> {
    entries: IndexMap<K, V>,
}

impl<K, V> ValueDictionary<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn adopt(entries: IndexMap<K, V>) -> Self {
        Self { entries }
    }

    pub fn inner(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    pub fn inner_mut(&mut self) -> &mut IndexMap<K, V> {
        &mut self.entries
    }

    pub fn into_inner(self) -> IndexMap<K, V> {
        self.entries
    }
}

impl<K, V> Default for ValueDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ComponentValue, V: ComponentValue> ValueDictionary<K, V> {
    /// Per-entry hashes (key folded with value) in ascending order, seeded
    /// with the dictionary type.
    pub fn content_hash(&self) -> i32 {
        hash_unordered(
            type_seed(core::any::type_name::<Self>()),
            self.entries
                .iter()
                .map(|(k, v)| Some(hash_ordered(0, [k.component_hash(), v.component_hash()]))),
        )
    }
}

impl<K, V> Deref for ValueDictionary<K, V> {
    type Target = IndexMap<K, V>;

    fn deref(&self) -> &IndexMap<K, V> {
        &self.entries
    }
}

impl<K, V> DerefMut for ValueDictionary<K, V> {
    fn deref_mut(&mut self) -> &mut IndexMap<K, V> {
        &mut self.entries
    }
}

impl<K, V> From<IndexMap<K, V>> for ValueDictionary<K, V> {
    fn from(entries: IndexMap<K, V>) -> Self {
        Self::adopt(entries)
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ValueDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::adopt(iter.into_iter().collect())
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for ValueDictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for ValueDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a ValueDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ValueDictionary<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = indexmap::map::IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl<K, V> PartialEq for ValueDictionary<K, V>
where
    K: ComponentValue + Hash + Eq,
    V: ComponentValue,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.entries.get(k).is_some_and(|o| v.component_eq(o)))
    }
}

impl<K, V> Eq for ValueDictionary<K, V>
where
    K: ComponentValue + Hash + Eq,
    V: ComponentValue,
{
}

impl<K, V> Hash for ValueDictionary<K, V>
where
    K: ComponentValue + Hash + Eq,
    V: ComponentValue,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.content_hash());
    }
}

impl<K, V> ComponentValue for ValueDictionary<K, V>
where
    K: ComponentValue + Hash + Eq,
    V: ComponentValue,
{
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn component_hash(&self) -> Option<i32> {
        Some(self.content_hash())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", Rendered(k), Rendered(v))?;
        }
        f.write_str("}")
    }
}

impl<K, V> fmt::Display for ValueDictionary<K, V>
where
    K: ComponentValue + Hash + Eq,
    V: ComponentValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, i64)]) -> ValueDictionary<String, i64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let a = dict(&[("one", 1), ("two", 2)]);
        let b = dict(&[("two", 2), ("one", 1)]);

        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn values_and_keys_both_count() {
        let a = dict(&[("one", 1), ("two", 2)]);

        assert_ne!(a, dict(&[("one", 1), ("two", 3)]));
        assert_ne!(a, dict(&[("one", 1), ("deux", 2)]));
        assert_ne!(a, dict(&[("one", 1)]));
        assert_ne!(dict(&[("one", 1)]), a);
    }

    #[test]
    fn swapped_values_hash_differently() {
        let a = dict(&[("a", 1), ("b", 2)]);
        let b = dict(&[("a", 2), ("b", 1)]);

        assert_ne!(a, b);
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn renders_entries() {
        assert_eq!(dict(&[("x", 1), ("y", 2)]).to_string(), "{x: 1, y: 2}");
    }
}
