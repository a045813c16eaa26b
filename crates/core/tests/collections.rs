mod model;

use indexmap::{IndexMap, IndexSet};
use model::*;
use proptest::prelude::*;
use valuekit_core::{AsValueCollection, ComponentValue, ValueDictionary, ValueList, ValueSet};

fn countries(codes: &[&str]) -> Vec<Country> {
    codes
        .iter()
        .map(|code| Country::create(code).expect("valid code"))
        .collect()
}

#[test]
fn lists_of_value_objects_compare_in_order() {
    let a = countries(&["FR", "DE"]).as_value_list();
    let b = countries(&["FR", "DE"]).as_value_list();
    let c = countries(&["DE", "FR"]).as_value_list();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.component_hash(), b.component_hash());
}

#[test]
fn sets_of_value_objects_ignore_order() {
    let a: ValueSet<Country> = countries(&["FR", "DE", "AT"]).as_value_set();
    let b: ValueSet<Country> = countries(&["AT", "FR", "DE"]).as_value_set();

    assert_eq!(a, b);
    assert_eq!(a.content_hash(), b.content_hash());
    assert!(a.is_superset_of(&countries(&["DE"])));
}

#[test]
fn adoption_keeps_the_storage() {
    let mut storage = IndexMap::new();
    storage.insert("a".to_string(), Age(1));
    let mut dict = ValueDictionary::adopt(storage);

    dict.inner_mut().insert("b".to_string(), Age(2));
    dict.insert("c".to_string(), Age(3));

    let storage = dict.into_inner();
    assert_eq!(storage.len(), 3);
    assert_eq!(storage.get_index(0).map(|(k, _)| k.as_str()), Some("a"));
}

#[test]
fn list_and_set_with_same_elements_are_different_types() {
    let list: ValueList<u8> = vec![1, 2].into();
    let set: ValueSet<u8> = IndexSet::from([1, 2]).into();

    assert_ne!(list.content_hash(), set.content_hash());
}

#[test]
fn nested_collections_compare_by_content() {
    let a = vec![vec![1, 2].as_value_list(), vec![3].as_value_list()].as_value_set();
    let b = vec![vec![3].as_value_list(), vec![1, 2].as_value_list()].as_value_set();

    assert_eq!(a, b);
    assert_eq!(a.to_string(), "{[1, 2], [3]}");
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: a set's hash does not depend on insertion order.
    #[test]
    fn set_hash_is_permutation_invariant(
        items in prop::collection::hash_set(any::<i64>(), 0..32),
        seed in any::<u64>(),
    ) {
        let forward: Vec<i64> = items.into_iter().collect();
        let mut shuffled = forward.clone();
        let len = shuffled.len();
        if len > 1 {
            let rotate = (seed as usize) % len;
            shuffled.rotate_left(rotate);
            shuffled.reverse();
        }

        let a: ValueSet<i64> = forward.into_iter().collect();
        let b: ValueSet<i64> = shuffled.into_iter().collect();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.content_hash(), b.content_hash());
    }

    /// Property: a dictionary's equality and hash do not depend on entry order.
    #[test]
    fn dictionary_is_permutation_invariant(
        entries in prop::collection::hash_map("[a-z]{1,6}", any::<i32>(), 0..16),
    ) {
        let forward: Vec<(String, i32)> = entries.into_iter().collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a: ValueDictionary<String, i32> = forward.into_iter().collect();
        let b: ValueDictionary<String, i32> = backward.into_iter().collect();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.content_hash(), b.content_hash());
    }

    /// Property: reversing a list of distinct elements changes equality.
    #[test]
    fn list_equality_is_order_sensitive(
        items in prop::collection::hash_set(any::<u16>(), 2..16),
    ) {
        let forward: Vec<u16> = items.into_iter().collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = ValueList::adopt(forward);
        let b = ValueList::adopt(backward);

        prop_assert_ne!(&a, &b);
    }
}
