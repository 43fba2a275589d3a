use core::ops::RangeBounds;
use core::slice;

use rand::Rng;

use super::range;
use super::sort;
use crate::types::ArrErr;
use crate::types::ArrResult;
use crate::types::Nullable;
use crate::types::SortConfig;
use crate::types::SortOrder;

/// The algorithms shared by every array container of this crate.
///
/// An implementer only supplies its storage: the initialized elements, the
/// bounds limit used by bulk writes and a bounded write. Search, replace,
/// reverse, shuffle, sort and bulk transfers are all provided on top of
/// those. Emptying a store lives in `Clear`, so element types without a
/// `Default` still get every algorithm here.
///
/// # Ranges
///
/// Most operations come in a full form and an `_in` form that takes any
/// `RangeBounds<usize>`. Ranges must satisfy `start <= end <= size()`,
/// otherwise the `_in` form fails with `ErrorReason::OutOfRange`. The full
/// forms cannot fail.
///
/// # Not found
///
/// Index searches report `size()` when nothing matches, even when searching
/// a sub range. Reference searches report `None`.
pub trait Sequence<T> {
    /// The initialized elements, `[0, size())`.
    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    /// The limit for bulk writes (`fill`, `copy_from`, `move_from`). Never
    /// smaller than `size()`.
    fn bounds(&self) -> usize;

    /// Replaces the element at `index` when `index < size()`, or appends when
    /// `index == size() < bounds()`. Anything else is `OutOfRange`.
    fn write_at(&mut self, index: usize, item: T) -> ArrResult<()>;

    #[inline]
    fn size(&self) -> usize {
        return self.as_slice().len();
    }

    #[inline]
    fn is_empty(&self) -> bool {
        return self.size() == 0;
    }

    /// Bounds checked access.
    fn get(&self, index: usize) -> ArrResult<&T> {
        let Some(item) = self.as_slice().get(index) else {
            return Err(ArrErr::out_of_range());
        };
        return Ok(item);
    }

    fn get_mut(&mut self, index: usize) -> ArrResult<&mut T> {
        let Some(item) = self.as_mut_slice().get_mut(index) else {
            return Err(ArrErr::out_of_range());
        };
        return Ok(item);
    }

    #[inline]
    fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        return self.as_mut_slice().iter_mut();
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        return self.as_slice().contains(value);
    }

    fn contains_in<R>(&self, range: R, value: &T) -> ArrResult<bool>
    where
        T: PartialEq,
        R: RangeBounds<usize>,
    {
        let span = range::resolve(range, self.size())?;
        return Ok(self.as_slice()[span].contains(value));
    }

    fn contains_null(&self) -> bool
    where
        T: Nullable,
    {
        return self.find(|item| item.is_null()).is_some();
    }

    fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        return self.count_where(|item| item == value);
    }

    fn count_in<R>(&self, range: R, value: &T) -> ArrResult<usize>
    where
        T: PartialEq,
        R: RangeBounds<usize>,
    {
        return self.count_where_in(range, |item| item == value);
    }

    fn count_null(&self) -> usize
    where
        T: Nullable,
    {
        return self.count_where(|item| item.is_null());
    }

    fn count_null_in<R>(&self, range: R) -> ArrResult<usize>
    where
        T: Nullable,
        R: RangeBounds<usize>,
    {
        return self.count_where_in(range, |item| item.is_null());
    }

    /// The number of elements satisfying `pred`.
    fn count_where<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut count = 0;
        for item in self.as_slice() {
            if pred(item) {
                count += 1;
            }
        }
        return count;
    }

    fn count_where_in<R, P>(&self, range: R, mut pred: P) -> ArrResult<usize>
    where
        R: RangeBounds<usize>,
        P: FnMut(&T) -> bool,
    {
        let span = range::resolve(range, self.size())?;
        let mut count = 0;
        for item in &self.as_slice()[span] {
            if pred(item) {
                count += 1;
            }
        }
        return Ok(count);
    }

    /// The first element satisfying `pred`.
    fn find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        return self.as_slice().iter().find(|item| pred(*item));
    }

    fn find_in<R, P>(&self, range: R, mut pred: P) -> ArrResult<Option<&T>>
    where
        R: RangeBounds<usize>,
        P: FnMut(&T) -> bool,
    {
        let span = range::resolve(range, self.size())?;
        return Ok(self.as_slice()[span].iter().find(|item| pred(*item)));
    }

    /// The last element satisfying `pred`.
    fn reverse_find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        return self.as_slice().iter().rev().find(|item| pred(*item));
    }

    fn reverse_find_in<R, P>(&self, range: R, mut pred: P) -> ArrResult<Option<&T>>
    where
        R: RangeBounds<usize>,
        P: FnMut(&T) -> bool,
    {
        let span = range::resolve(range, self.size())?;
        return Ok(self.as_slice()[span].iter().rev().find(|item| pred(*item)));
    }

    fn index_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        return self.index_of_where(|item| item == value);
    }

    fn index_of_in<R>(&self, range: R, value: &T) -> ArrResult<usize>
    where
        T: PartialEq,
        R: RangeBounds<usize>,
    {
        return self.index_of_where_in(range, |item| item == value);
    }

    fn index_of_null(&self) -> usize
    where
        T: Nullable,
    {
        return self.index_of_where(|item| item.is_null());
    }

    fn index_of_null_in<R>(&self, range: R) -> ArrResult<usize>
    where
        T: Nullable,
        R: RangeBounds<usize>,
    {
        return self.index_of_where_in(range, |item| item.is_null());
    }

    /// Index of the first element satisfying `pred`, or `size()`.
    fn index_of_where<P>(&self, pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let slice = self.as_slice();
        return slice.iter().position(pred).unwrap_or(slice.len());
    }

    fn index_of_where_in<R, P>(&self, range: R, pred: P) -> ArrResult<usize>
    where
        R: RangeBounds<usize>,
        P: FnMut(&T) -> bool,
    {
        let slice = self.as_slice();
        let span = range::resolve(range, slice.len())?;
        let start = span.start;
        let Some(found) = slice[span].iter().position(pred) else {
            return Ok(slice.len());
        };
        return Ok(start + found);
    }

    fn reverse_index_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        return self.reverse_index_of_where(|item| item == value);
    }

    fn reverse_index_of_in<R>(&self, range: R, value: &T) -> ArrResult<usize>
    where
        T: PartialEq,
        R: RangeBounds<usize>,
    {
        return self.reverse_index_of_where_in(range, |item| item == value);
    }

    fn reverse_index_of_null(&self) -> usize
    where
        T: Nullable,
    {
        return self.reverse_index_of_where(|item| item.is_null());
    }

    fn reverse_index_of_null_in<R>(&self, range: R) -> ArrResult<usize>
    where
        T: Nullable,
        R: RangeBounds<usize>,
    {
        return self.reverse_index_of_where_in(range, |item| item.is_null());
    }

    /// Index of the last element satisfying `pred`, or `size()`.
    fn reverse_index_of_where<P>(&self, pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let slice = self.as_slice();
        return slice.iter().rposition(pred).unwrap_or(slice.len());
    }

    fn reverse_index_of_where_in<R, P>(&self, range: R, pred: P) -> ArrResult<usize>
    where
        R: RangeBounds<usize>,
        P: FnMut(&T) -> bool,
    {
        let slice = self.as_slice();
        let span = range::resolve(range, slice.len())?;
        let start = span.start;
        let Some(found) = slice[span].iter().rposition(pred) else {
            return Ok(slice.len());
        };
        return Ok(start + found);
    }

    /// Writes clones of `value` over `[0, bounds())`. For a store with spare
    /// capacity this grows the logical size up to its bounds.
    fn fill(&mut self, value: T) -> ArrResult<bool>
    where
        T: Clone,
    {
        return self.fill_in(.., value);
    }

    /// Like `fill` but over `range`, which is checked against `bounds()`
    /// rather than `size()`. The range may not start past `size()`.
    fn fill_in<R>(&mut self, range: R, value: T) -> ArrResult<bool>
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        let span = range::resolve(range, self.bounds())?;
        if span.start > self.size() {
            return Err(ArrErr::out_of_range());
        }
        let dirty = !span.is_empty();
        for index in span {
            self.write_at(index, value.clone())?;
        }
        return Ok(dirty);
    }

    /// Replaces every `old` with a clone of `new`. Does nothing when they
    /// already compare equal.
    fn replace(&mut self, old: &T, new: T) -> bool
    where
        T: PartialEq + Clone,
    {
        if *old == new {
            return false;
        }
        return self.replace_where(|item| item == old, new);
    }

    fn replace_in<R>(&mut self, range: R, old: &T, new: T) -> ArrResult<bool>
    where
        T: PartialEq + Clone,
        R: RangeBounds<usize>,
    {
        if *old == new {
            range::resolve(range, self.size())?;
            return Ok(false);
        }
        return self.replace_where_in(range, |item| item == old, new);
    }

    /// Replaces every null element. Does nothing when `new` is null itself.
    fn replace_null(&mut self, new: T) -> bool
    where
        T: Nullable + Clone,
    {
        if new.is_null() {
            return false;
        }
        return self.replace_where(|item| item.is_null(), new);
    }

    fn replace_null_in<R>(&mut self, range: R, new: T) -> ArrResult<bool>
    where
        T: Nullable + Clone,
        R: RangeBounds<usize>,
    {
        if new.is_null() {
            range::resolve(range, self.size())?;
            return Ok(false);
        }
        return self.replace_where_in(range, |item| item.is_null(), new);
    }

    fn replace_where<P>(&mut self, pred: P, new: T) -> bool
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        return replace_span(self.as_mut_slice(), pred, &new);
    }

    fn replace_where_in<R, P>(&mut self, range: R, pred: P, new: T) -> ArrResult<bool>
    where
        T: Clone,
        R: RangeBounds<usize>,
        P: FnMut(&T) -> bool,
    {
        let span = range::resolve(range, self.size())?;
        return Ok(replace_span(&mut self.as_mut_slice()[span], pred, &new));
    }

    /// Returns `true` unless the sequence is empty.
    fn reverse(&mut self) -> bool {
        self.as_mut_slice().reverse();
        return !self.is_empty();
    }

    /// Fails if either index is not below `size()`. Swapping an index with
    /// itself is a no-op and returns `false`.
    fn swap(&mut self, a: usize, b: usize) -> ArrResult<bool> {
        let size = self.size();
        if a >= size || b >= size {
            return Err(ArrErr::out_of_range());
        }
        if a == b {
            return Ok(false);
        }
        self.as_mut_slice().swap(a, b);
        return Ok(true);
    }

    /// Fisher-Yates shuffle drawing from `rng`. Seed it yourself for a
    /// reproducible order.
    fn shuffle<G>(&mut self, rng: &mut G) -> bool
    where
        G: Rng + ?Sized,
    {
        let data = self.as_mut_slice();
        let size = data.len();
        if size == 0 {
            return false;
        }
        for i in 0..size - 1 {
            let j = rng.gen_range(i..size);
            data.swap(i, j);
        }
        return true;
    }

    /// Clones `source` into the store starting at `offset`.
    ///
    /// Fails with `LengthMismatch` if `offset + source.len() > bounds()` and
    /// with `OutOfRange` if `offset > size()`. Nothing is written on failure.
    fn copy_from(&mut self, source: &[T], offset: usize) -> ArrResult<bool>
    where
        T: Clone,
    {
        range::check_transfer(self.size(), self.bounds(), offset, source.len())?;
        for (i, item) in source.iter().enumerate() {
            self.write_at(offset + i, item.clone())?;
        }
        return Ok(!source.is_empty());
    }

    /// Moves `items` into the store starting at `offset`. Same checks as
    /// `copy_from`.
    fn move_from<I>(&mut self, items: I, offset: usize) -> ArrResult<bool>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = items.len();
        range::check_transfer(self.size(), self.bounds(), offset, count)?;
        for (i, item) in items.enumerate() {
            self.write_at(offset + i, item)?;
        }
        return Ok(count > 0);
    }

    fn equals(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        return self.as_slice() == other;
    }

    fn sort(&mut self, order: SortOrder) -> bool
    where
        T: PartialOrd,
    {
        return self.sort_with(order, &SortConfig::new());
    }

    fn sort_with(&mut self, order: SortOrder, config: &SortConfig) -> bool
    where
        T: PartialOrd,
    {
        match order {
            SortOrder::Ascending => return self.sort_by_with(|a: &T, b: &T| a < b, config),
            SortOrder::Descending => return self.sort_by_with(|a: &T, b: &T| a > b, config),
        }
    }

    /// Sorts with a strict "goes before" predicate.
    fn sort_by<F>(&mut self, less: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        return self.sort_by_with(less, &SortConfig::new());
    }

    fn sort_by_with<F>(&mut self, less: F, config: &SortConfig) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        let data = self.as_mut_slice();
        if data.is_empty() {
            return false;
        }
        let last = data.len() - 1;
        return sort::quick_sort(data, 0, last, &less, config.insertion_threshold());
    }

    fn sort_range<R>(&mut self, range: R, order: SortOrder) -> ArrResult<bool>
    where
        T: PartialOrd,
        R: RangeBounds<usize>,
    {
        let config = SortConfig::new();
        match order {
            SortOrder::Ascending => return self.sort_range_by(range, |a: &T, b: &T| a < b, &config),
            SortOrder::Descending => return self.sort_range_by(range, |a: &T, b: &T| a > b, &config),
        }
    }

    /// Sorts only the elements inside `range`.
    fn sort_range_by<R, F>(&mut self, range: R, less: F, config: &SortConfig) -> ArrResult<bool>
    where
        R: RangeBounds<usize>,
        F: Fn(&T, &T) -> bool,
    {
        let span = range::resolve(range, self.size())?;
        if span.is_empty() {
            return Ok(false);
        }
        let data = self.as_mut_slice();
        return Ok(sort::quick_sort(data, span.start, span.end - 1, &less, config.insertion_threshold()));
    }
}

/// Stores that can be emptied.
///
/// A `DynArr` drops its elements and frees its buffer. A `FixedArr` cannot
/// lose slots, so it resets each one to `T::default()` instead.
pub trait Clear<T>: Sequence<T> {
    /// Removes every element. Returns `true` if the store changed.
    fn remove_all(&mut self) -> bool;

    /// Drops every element, then clears the store. Owned pointees (`Box`,
    /// `Option<Box<_>>`, ...) are released by their drop glue.
    fn delete_all(&mut self) -> bool {
        let dirty = !self.is_empty();
        return self.remove_all() || dirty;
    }
}

fn replace_span<T, P>(span: &mut [T], mut pred: P, new: &T) -> bool
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut dirty = false;
    for item in span.iter_mut() {
        if pred(item) {
            *item = new.clone();
            dirty = true;
        }
    }
    return dirty;
}
