//! Property-based tests for `Array`.

use proptest::prelude::*;
use sequence::{array, Array, Operation};

fn small_array() -> impl Strategy<Value = Array<i32>> {
    prop::collection::vec(-50..50i32, 0..20).prop_map(Array::from_vec)
}

proptest! {
    #[test]
    fn vec_round_trip(a in small_array()) {
        prop_assert_eq!(Array::from_vec(a.to_vec()), a);
    }

    #[test]
    fn at_matches_position(a in small_array()) {
        for (i, t) in a.iter().enumerate() {
            prop_assert_eq!(a.at(i as isize), Ok(t));
        }
        prop_assert!(a.at(a.len() as isize).is_err());
        let e = a.at(-1).unwrap_err();
        prop_assert_eq!(e.operation(), Operation::At);
    }

    #[test]
    fn add_then_pop(mut a in small_array(), v in any::<i32>()) {
        let before = a.clone();
        a.add(v);
        prop_assert_eq!(a.pop(), v);
        prop_assert_eq!(a, before);
    }

    #[test]
    fn partial_identities(a in small_array()) {
        prop_assert_eq!(a.partial_array(0).unwrap(), a.clone());
        if let Some(last) = a.iter().last() {
            prop_assert_eq!(a.partial_array(-1).unwrap(), array![*last]);
        }
        for start in 0..=a.len() {
            let count = (a.len() - start) as isize;
            prop_assert_eq!(
                a.partial_array_len(start as isize, count).unwrap(),
                a.partial_array(start as isize).unwrap()
            );
        }
    }

    #[test]
    fn absent_value(a in small_array()) {
        let missing = 1000;
        prop_assert!(!a.contains(&missing));
        prop_assert_eq!(a.index_of(&missing), a.len() as isize);
        prop_assert_eq!(a.last_index_of(&missing), -1);
        prop_assert_eq!(a.contains_count(&missing), 0);
    }

    #[test]
    fn failed_insert_leaves_array_unchanged(mut a in small_array(), offset in 1..10isize) {
        let before = a.clone();
        let index = a.len() as isize + offset;
        prop_assert_eq!(a.add_at(0, index).unwrap_err().index(), index);
        prop_assert!(a.add_at(0, -offset).is_err());
        prop_assert_eq!(a, before);
    }

    #[test]
    fn sort_orders_by_text(mut a in small_array()) {
        a.sort();
        let keys: Vec<String> = a.iter().map(|t| t.to_string()).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        a.reverse_sort();
        let keys: Vec<String> = a.iter().map(|t| t.to_string()).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn remove_all_always_clears(mut a in small_array(), v in any::<i32>()) {
        a.remove_all(&v);
        prop_assert!(a.is_empty());
    }
}

#[test]
fn scenarios() {
    let mut a = array![3, 1, 2];
    a.sort();
    assert_eq!(a, array![1, 2, 3]);
    let mut a = array![3, 1, 2];
    a.reverse_sort();
    assert_eq!(a, array![3, 2, 1]);

    let a = Array::from_text(["a", "b", "c"]);
    assert_eq!(a.partial_array_len(1, -1).unwrap(), Array::from_text(["b"]));

    let mut a = array![1, 2, 3];
    a.remove_all(&2);
    assert!(a.is_empty());
}
