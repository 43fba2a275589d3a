use core::ptr;
use std::rc::Rc;
use std::string::String;
use std::string::ToString;
use std::vec;
use std::vec::Vec;

use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::sort;
use crate::Clear;
use crate::DynArr;
use crate::FixedArr;
use crate::Sequence;
use crate::types::ArrResult;
use crate::types::ErrorReason;
use crate::types::SortConfig;
use crate::types::SortOrder;

/// An rng that only ever produces zeros.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        return 0;
    }
    fn next_u64(&mut self) -> u64 {
        return 0;
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        return Ok(());
    }
}

fn reason<T>(ret: ArrResult<T>) -> ErrorReason {
    let Err(e) = ret else {
        panic!("expected an error");
    };
    return e.reason();
}

fn random_values(seed: u64, count: usize, max: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    return (0..count).map(|_| rng.gen_range(0..max)).collect();
}

#[test]
fn search() {
    let arr = FixedArr::from([5, 3, 5, 1, 5]);
    assert!(arr.contains(&3));
    assert!(!arr.contains(&4));
    assert_eq!(arr.count(&5), 3);
    assert_eq!(arr.count_where(|x| x % 2 == 1), 5);

    assert_eq!(arr.index_of(&5), 0);
    assert_eq!(arr.reverse_index_of(&5), 4);
    assert_eq!(arr.index_of_where(|x| *x < 5), 1);
    assert_eq!(arr.reverse_index_of_where(|x| *x < 5), 3);
    assert_eq!(arr.find(|x| *x < 4), Some(&3));
    assert_eq!(arr.reverse_find(|x| *x < 4), Some(&1));
}

#[test]
fn search_not_found_is_size() {
    let arr = FixedArr::from([5, 3, 5, 1, 5]);
    assert_eq!(arr.index_of(&9), 5);
    assert_eq!(arr.reverse_index_of(&9), 5);
    assert_eq!(arr.index_of_where(|x| *x > 5), 5);
    assert!(arr.find(|x| *x > 5).is_none());

    // Even inside a sub range the sentinel stays the full size.
    assert_eq!(arr.index_of_in(3..4, &5).unwrap(), 5);
    assert_eq!(arr.reverse_index_of_in(1..2, &5).unwrap(), 5);

    let empty = DynArr::<i32>::new();
    assert_eq!(empty.index_of(&1), 0);
    assert!(empty.reverse_find(|_| true).is_none());
}

#[test]
fn search_in_range() {
    let arr = FixedArr::from([5, 3, 5, 1, 5]);
    assert_eq!(arr.index_of_in(1..4, &5).unwrap(), 2);
    assert_eq!(arr.reverse_index_of_in(0..4, &5).unwrap(), 2);
    assert_eq!(arr.count_in(1..3, &5).unwrap(), 1);
    assert!(!arr.contains_in(..2, &1).unwrap());
    assert!(arr.contains_in(2.., &1).unwrap());
    assert_eq!(arr.count_where_in(..=1, |x| *x == 3).unwrap(), 1);
    assert_eq!(arr.find_in(4..5, |x| *x < 4).unwrap(), None);
    assert_eq!(arr.reverse_find_in(..3, |x| *x < 5).unwrap(), Some(&3));
    assert_eq!(arr.index_of_where_in(2.., |x| *x == 1).unwrap(), 3);
    assert_eq!(arr.reverse_index_of_where_in(..4, |x| *x == 5).unwrap(), 2);

    // The whole span is searched, both ends included.
    assert_eq!(arr.reverse_find_in(0..1, |x| *x == 5).unwrap(), Some(&5));
    assert_eq!(arr.reverse_index_of_in(0..1, &5).unwrap(), 0);
}

#[test]
fn search_bad_range() {
    let arr = FixedArr::from([5, 3, 5, 1, 5]);
    let (from, to) = (3, 2);
    assert_eq!(reason(arr.index_of_in(from..to, &5)), ErrorReason::OutOfRange);
    assert_eq!(reason(arr.count_in(0..6, &5)), ErrorReason::OutOfRange);
    assert_eq!(reason(arr.find_in(..=5, |_| true)), ErrorReason::OutOfRange);
    assert_eq!(reason(arr.reverse_index_of_where_in(6.., |_| true)), ErrorReason::OutOfRange);

    // An empty span at the end is fine.
    assert_eq!(arr.count_in(5..5, &5).unwrap(), 0);
}

#[test]
fn nulls() {
    let mut arr = FixedArr::from([None, Some(1), None, Some(2)]);
    assert!(arr.contains_null());
    assert_eq!(arr.count_null(), 2);
    assert_eq!(arr.count_null_in(1..).unwrap(), 1);
    assert_eq!(arr.index_of_null(), 0);
    assert_eq!(arr.reverse_index_of_null(), 2);
    assert_eq!(arr.index_of_null_in(1..2).unwrap(), 4);
    assert_eq!(arr.reverse_index_of_null_in(..2).unwrap(), 0);

    assert!(!arr.replace_null(None));
    assert!(arr.replace_null_in(..1, Some(0)).unwrap());
    assert_eq!(arr, [Some(0), Some(1), None, Some(2)]);
    assert!(arr.replace_null(Some(9)));
    assert!(!arr.contains_null());
    assert_eq!(arr.index_of_null(), 4);

    let value = 3;
    let ptrs = DynArr::from_slice(&[&value as *const i32, ptr::null()]).unwrap();
    assert_eq!(ptrs.index_of_null(), 1);
}

#[test]
fn replace() {
    let mut arr = FixedArr::from([1, 2, 1, 3]);
    assert!(arr.replace(&1, 9));
    assert_eq!(arr, [9, 2, 9, 3]);
    assert!(!arr.replace(&4, 4));
    assert!(!arr.replace(&7, 8));

    assert!(arr.replace_in(1..3, &9, 0).unwrap());
    assert_eq!(arr, [9, 2, 0, 3]);
    assert!(!arr.replace_in(0..1, &9, 9).unwrap());
    assert_eq!(reason(arr.replace_in(0..5, &9, 9)), ErrorReason::OutOfRange);

    assert!(arr.replace_where(|x| *x > 2, 1));
    assert_eq!(arr, [1, 2, 0, 1]);
    assert!(!arr.replace_where_in(..2, |x| *x == 0, 5).unwrap());
}

#[test]
fn reverse() {
    let mut arr = FixedArr::from([1, 2, 3]);
    assert!(arr.reverse());
    assert_eq!(arr, [3, 2, 1]);

    let mut arr = DynArr::from_slice(&[1, 2, 3, 4]).unwrap();
    arr.reverse();
    assert_eq!(arr, [4, 3, 2, 1]);

    let mut empty = DynArr::<i32>::new();
    assert!(!empty.reverse());
}

#[test]
fn swap() {
    let mut arr = FixedArr::from([1, 2, 3]);
    assert!(arr.swap(0, 2).unwrap());
    assert_eq!(arr, [3, 2, 1]);
    assert!(!arr.swap(1, 1).unwrap());
    assert_eq!(reason(arr.swap(0, 3)), ErrorReason::OutOfRange);
    assert_eq!(reason(arr.swap(3, 3)), ErrorReason::OutOfRange);

    // The spare capacity of a growable array is not swappable.
    let mut arr = DynArr::<i32>::with_capacity(4).unwrap();
    arr.push(1).unwrap();
    assert_eq!(reason(arr.swap(0, 1)), ErrorReason::OutOfRange);
}

#[test]
fn shuffle_is_reproducible() {
    let values = random_values(1, 64, 1000);
    let mut left = DynArr::from_slice(&values).unwrap();
    let mut right = DynArr::from_slice(&values).unwrap();

    assert!(left.shuffle(&mut StdRng::seed_from_u64(42)));
    assert!(right.shuffle(&mut StdRng::seed_from_u64(42)));
    assert_eq!(left, right);

    // Still the same values.
    left.sort(SortOrder::Ascending);
    let mut expected = values.clone();
    expected.sort();
    assert_eq!(left, expected[..]);
}

#[test]
fn shuffle_with_zero_rng_keeps_order() {
    let mut arr = FixedArr::from([1, 2, 3, 4, 5]);
    assert!(arr.shuffle(&mut ZeroRng));
    assert_eq!(arr, [1, 2, 3, 4, 5]);

    let mut empty = DynArr::<i32>::new();
    assert!(!empty.shuffle(&mut ZeroRng));

    // Works through a trait object too.
    let mut rng = StdRng::seed_from_u64(3);
    let dyn_rng: &mut dyn RngCore = &mut rng;
    arr.shuffle(dyn_rng);
    assert_eq!(arr.count_where(|x| (1..=5).contains(x)), 5);
}

#[test]
fn sort_ten_elements() {
    let mut arr = DynArr::new();
    for x in [3, 1, 2, 7, 10, 9, 6, 8, 5, 4] {
        arr.push(x).unwrap();
    }
    assert!(arr.sort(SortOrder::Ascending));
    assert_eq!(arr, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    arr.sort(SortOrder::Descending);
    assert_eq!(arr, [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn sort_with_predicate() {
    // Odd numbers go before even ones.
    let mut arr = FixedArr::from([1, 2, 3]);
    arr.sort_by(|a: &i32, b: &i32| a % 2 == 1 && b % 2 == 0);
    assert_eq!(arr, [1, 3, 2]);

    let mut words = DynArr::new();
    for w in ["pear", "fig", "banana", "kiwi"] {
        words.push(w.to_string()).unwrap();
    }
    words.sort_by(|a: &String, b: &String| a.len() < b.len());
    assert_eq!(words[0], "fig");
    assert_eq!(words[3], "banana");
}

#[test]
fn sort_small_and_empty() {
    let mut empty = DynArr::<i32>::new();
    assert!(!empty.sort(SortOrder::Ascending));

    let mut one = FixedArr::from([1]);
    assert!(!one.sort(SortOrder::Ascending));

    let mut two = FixedArr::from([2, 1]);
    assert!(two.sort(SortOrder::Ascending));
    assert_eq!(two, [1, 2]);
    assert!(!two.sort(SortOrder::Ascending));
}

#[test]
fn sort_threshold_does_not_change_result() {
    let values = random_values(9, 200, 50);
    let mut expected = values.clone();
    expected.sort();

    for threshold in [0, 1, 2, 3, 10, 64, 1000] {
        let config = SortConfig::new().with_insertion_threshold(threshold);
        let mut arr = DynArr::from_slice(&values).unwrap();
        arr.sort_with(SortOrder::Ascending, &config);
        assert_eq!(arr, expected[..], "threshold {}", threshold);
    }
}

#[test]
fn sort_many_duplicates() {
    let mut values = vec![5; 40];
    values.extend([1, 9, 5, 0, 5]);
    let mut arr = DynArr::from_slice(&values).unwrap();
    arr.sort(SortOrder::Descending);

    values.sort_by(|a, b| b.cmp(a));
    assert_eq!(arr, values[..]);
}

#[test]
fn sort_sorted_and_reversed_input() {
    let ascending: Vec<i32> = (0..500).collect();
    let mut arr = DynArr::from_slice(&ascending).unwrap();
    arr.sort(SortOrder::Ascending);
    assert_eq!(arr, ascending[..]);

    arr.reverse();
    arr.sort(SortOrder::Ascending);
    assert_eq!(arr, ascending[..]);
}

#[test]
fn sort_range() {
    let mut arr = FixedArr::from([9, 8, 7, 6, 5, 4]);
    assert!(arr.sort_range(1..5, SortOrder::Ascending).unwrap());
    assert_eq!(arr, [9, 5, 6, 7, 8, 4]);

    assert!(!arr.sort_range(2..2, SortOrder::Ascending).unwrap());
    assert_eq!(reason(arr.sort_range(4..7, SortOrder::Ascending)), ErrorReason::OutOfRange);

    let config = SortConfig::default();
    arr.sort_range_by(.., |a: &i32, b: &i32| a > b, &config).unwrap();
    assert_eq!(arr, [9, 8, 7, 6, 5, 4]);
}

#[test]
fn insertion_sort_span() {
    let mut data = [4, 3, 2, 1, 0];
    assert!(sort::insertion_sort(&mut data, 1, 3, &|a: &i32, b: &i32| a < b));
    assert_eq!(data, [4, 1, 2, 3, 0]);
    assert!(!sort::insertion_sort(&mut data, 1, 3, &|a: &i32, b: &i32| a < b));
}

#[test]
fn fill() {
    let mut arr = FixedArr::<i32, 4>::new();
    assert!(arr.fill(3).unwrap());
    assert_eq!(arr, [3, 3, 3, 3]);
    assert!(arr.fill_in(1..3, 0).unwrap());
    assert_eq!(arr, [3, 0, 0, 3]);
    assert!(!arr.fill_in(4.., 1).unwrap());
    assert_eq!(reason(arr.fill_in(2..5, 1)), ErrorReason::OutOfRange);

    let mut empty = FixedArr::<i32, 0>::new();
    assert!(!empty.fill(1).unwrap());
}

#[test]
fn copy_and_move() {
    let mut arr = FixedArr::<i32, 4>::new();
    assert!(arr.copy_from(&[1, 2], 1).unwrap());
    assert_eq!(arr, [0, 1, 2, 0]);
    assert_eq!(reason(arr.copy_from(&[1, 2, 3], 2)), ErrorReason::LengthMismatch);
    assert_eq!(reason(arr.copy_from(&[], 5)), ErrorReason::LengthMismatch);
    assert!(!arr.copy_from(&[], 4).unwrap());
    assert_eq!(arr, [0, 1, 2, 0]);

    let mut words = FixedArr::<String, 3>::new();
    words.move_from(vec!["a".to_string(), "b".to_string()], 1).unwrap();
    assert_eq!(words, ["", "a", "b"]);
    let ret = words.move_from(vec![String::new(); 4], 0);
    assert_eq!(reason(ret), ErrorReason::LengthMismatch);
}

#[test]
fn equals() {
    let arr = FixedArr::from([1, 2, 3]);
    assert!(arr.equals(&[1, 2, 3]));
    assert!(!arr.equals(&[1, 2]));
    assert!(!arr.equals(&[3, 2, 1]));

    let empty = DynArr::<i32>::new();
    assert!(empty.equals(&[]));
}

#[test]
fn checked_access() {
    let mut arr = FixedArr::from([1, 2, 3]);
    assert_eq!(*arr.get(2).unwrap(), 3);
    assert_eq!(reason(arr.get(3)), ErrorReason::OutOfRange);
    *arr.get_mut(0).unwrap() = 7;
    assert_eq!(reason(arr.get_mut(3)), ErrorReason::OutOfRange);
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [7, 2, 3]);

    for x in arr.iter_mut() {
        *x += 1;
    }
    assert_eq!(arr, [8, 3, 4]);
    assert_eq!(arr.size(), 3);
    assert!(!arr.is_empty());
}

#[test]
fn delete_all_resets_slots() {
    let shared = Rc::new(0);
    let mut arr = FixedArr::<Option<Rc<i32>>, 3>::new();
    arr.fill(Some(Rc::clone(&shared))).unwrap();
    assert_eq!(Rc::strong_count(&shared), 4);

    assert!(arr.delete_all());
    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(arr.count_null(), 3);
    assert_eq!(arr.size(), 3);
}
