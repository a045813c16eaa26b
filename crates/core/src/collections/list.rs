use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use crate::component::{ComponentValue, Rendered};
use crate::equality::{hash_ordered, type_seed};

/// A list compared by content, in order.
///
/// Wraps a `Vec<T>` by adoption: the storage is moved in, not copied, and
/// every `Vec` operation stays available through `Deref`/`DerefMut`.
#[derive(Debug, Clone, Default)]
pub struct ValueList<T> {
    items: Vec<T>,
}

impl<T> ValueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn adopt(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn inner(&self) -> &Vec<T> {
        &self.items
    }

    pub fn inner_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: ComponentValue> ValueList<T> {
    /// Element hashes folded in list order, seeded with the list type.
    pub fn content_hash(&self) -> i32 {
        hash_ordered(
            type_seed(core::any::type_name::<Self>()),
            self.items.iter().map(ComponentValue::component_hash),
        )
    }
}

impl<T> Deref for ValueList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.items
    }
}

impl<T> DerefMut for ValueList<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for ValueList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::adopt(items)
    }
}

impl<T> From<ValueList<T>> for Vec<T> {
    fn from(list: ValueList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for ValueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::adopt(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for ValueList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ValueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ValueList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ValueList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: ComponentValue> PartialEq for ValueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().zip(&other.items).all(|(a, b)| a.component_eq(b))
    }
}

impl<T: ComponentValue> Eq for ValueList<T> {}

impl<T: ComponentValue> Hash for ValueList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.content_hash());
    }
}

impl<T: ComponentValue> ComponentValue for ValueList<T> {
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn component_hash(&self) -> Option<i32> {
        Some(self.content_hash())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Rendered(item))?;
        }
        f.write_str("]")
    }
}

impl<T: ComponentValue> fmt::Display for ValueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_order_dependent() {
        let a = ValueList::adopt(vec![1, 2, 3]);
        let b = ValueList::adopt(vec![1, 2, 3]);
        let c = ValueList::adopt(vec![3, 2, 1]);

        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a, c);
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn mutation_through_the_wrapper_is_visible() {
        let mut list = ValueList::adopt(vec!["a".to_string()]);
        list.push("b".to_string());
        list.inner_mut().push("c".to_string());

        assert_eq!(list.len(), 3);
        assert_eq!(list[2], "c");
        assert_eq!(list.to_string(), "[a, b, c]");
    }

    #[test]
    fn empty_lists_are_equal() {
        assert_eq!(ValueList::<u8>::new(), ValueList::adopt(Vec::new()));
    }
}
