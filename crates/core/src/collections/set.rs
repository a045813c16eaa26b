use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use indexmap::IndexSet;

use crate::component::{ComponentValue, Rendered};
use crate::equality::{hash_unordered, type_seed};

/// A set compared by content, ignoring order.
///
/// Wraps an `IndexSet<T>` by adoption. Iteration follows insertion order;
/// equality and hashing do not.
#[derive(Debug, Clone)]
pub struct ValueSet<T> {
    items: IndexSet<T>,
}

impl<T> ValueSet<T> {
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    pub fn adopt(items: IndexSet<T>) -> Self {
        Self { items }
    }

    pub fn inner(&self) -> &IndexSet<T> {
        &self.items
    }

    pub fn inner_mut(&mut self) -> &mut IndexSet<T> {
        &mut self.items
    }

    pub fn into_inner(self) -> IndexSet<T> {
        self.items
    }
}

impl<T> Default for ValueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> ValueSet<T> {
    /// Removes every element found in `other`.
    pub fn except_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for item in other {
            self.items.shift_remove(item.borrow());
        }
    }

    /// Keeps only the elements also found in `other`.
    pub fn intersect_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut keep = vec![false; self.items.len()];
        for item in other {
            if let Some(index) = self.items.get_index_of(item.borrow()) {
                keep[index] = true;
            }
        }

        let mut index = 0;
        self.items.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });
    }

    pub fn union_with<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.items.extend(other);
    }

    /// Keeps the elements found in exactly one of `self` and `other`.
    pub fn symmetric_except_with<I: IntoIterator<Item = T>>(&mut self, other: I) {
        let other: IndexSet<T> = other.into_iter().collect();
        for item in other {
            if !self.items.shift_remove(&item) {
                self.items.insert(item);
            }
        }
    }

    pub fn is_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.overlap_with(other).matched == self.items.len()
    }

    pub fn is_proper_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let overlap = self.overlap_with(other);
        overlap.matched == self.items.len() && overlap.foreign
    }

    pub fn is_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        !self.overlap_with(other).foreign
    }

    pub fn is_proper_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let overlap = self.overlap_with(other);
        !overlap.foreign && overlap.matched < self.items.len()
    }

    pub fn overlaps<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .any(|item| self.items.contains(item.borrow()))
    }

    /// Same elements as `other`, ignoring order and duplicates in `other`.
    pub fn set_equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let overlap = self.overlap_with(other);
        !overlap.foreign && overlap.matched == self.items.len()
    }

    fn overlap_with<I>(&self, other: I) -> Overlap
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut seen = vec![false; self.items.len()];
        let mut overlap = Overlap::default();
        for item in other {
            match self.items.get_index_of(item.borrow()) {
                Some(index) if !seen[index] => {
                    seen[index] = true;
                    overlap.matched += 1;
                }
                Some(_) => {}
                None => overlap.foreign = true,
            }
        }
        overlap
    }
}

/// How an iterable relates to a set: distinct shared elements, and whether
/// it holds anything the set does not.
#[derive(Default)]
struct Overlap {
    matched: usize,
    foreign: bool,
}

impl<T: ComponentValue> ValueSet<T> {
    /// Element hashes folded in ascending order, seeded with the set type.
    pub fn content_hash(&self) -> i32 {
        hash_unordered(
            type_seed(core::any::type_name::<Self>()),
            self.items.iter().map(ComponentValue::component_hash),
        )
    }
}

impl<T> Deref for ValueSet<T> {
    type Target = IndexSet<T>;

    fn deref(&self) -> &IndexSet<T> {
        &self.items
    }
}

impl<T> DerefMut for ValueSet<T> {
    fn deref_mut(&mut self) -> &mut IndexSet<T> {
        &mut self.items
    }
}

impl<T> From<IndexSet<T>> for ValueSet<T> {
    fn from(items: IndexSet<T>) -> Self {
        Self::adopt(items)
    }
}

impl<T: Hash + Eq> FromIterator<T> for ValueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::adopt(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq> Extend<T> for ValueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ValueSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ValueSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: ComponentValue + Hash + Eq> PartialEq for ValueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set_equals(&other.items)
    }
}

impl<T: ComponentValue + Hash + Eq> Eq for ValueSet<T> {}

impl<T: ComponentValue + Hash + Eq> Hash for ValueSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.content_hash());
    }
}

impl<T: ComponentValue + Hash + Eq> ComponentValue for ValueSet<T> {
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn component_hash(&self) -> Option<i32> {
        Some(self.content_hash())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Rendered(item))?;
        }
        f.write_str("}")
    }
}

impl<T: ComponentValue + Hash + Eq> fmt::Display for ValueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
