use core::cmp;
use core::fmt;
use core::mem::ManuallyDrop;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::RangeBounds;
use core::ptr;
use core::slice;

use super::inner::Inner;
use super::into_iter::IntoIter;
use crate::Clear;
use crate::Sequence;
use crate::alloc::BufAllocator;
use crate::alloc::Global;
use crate::fixed_array::FixedArr;
use crate::sequence::range;
use crate::types::ArrErr;
use crate::types::ArrResult;
use crate::types::ErrorReason;
use crate::types::LengthType;
use crate::types::Nullable;

/// A growable array backed by a single buffer from `A`, with its length and
/// capacity stored as `L`.
///
/// Capacity doubles (or jumps straight to what a bulk insert needs) when it
/// runs out, and drops to twice the length once fewer than a quarter of the
/// slots are in use. Every allocation is fallible: running out of memory, or
/// out of room in `L`, is reported as an `ArrErr` and leaves the array as it
/// was.
///
/// All searching, sorting and shuffling comes from the `Sequence` trait.
pub struct DynArr<T, A: BufAllocator = Global, L: LengthType = usize> {
    inner: Inner<T, A, L>,
}

impl<T> DynArr<T> {
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }

    pub fn with_capacity(capacity: usize) -> ArrResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }

    /// A copy of `items` whose capacity equals its length.
    pub fn from_slice(items: &[T]) -> ArrResult<Self>
    where
        T: Clone,
    {
        return Self::from_slice_in(Global, items);
    }

    /// Joins `left` and `right` into a new array with an exact capacity.
    pub fn concat(left: &[T], right: &[T]) -> ArrResult<Self>
    where
        T: Clone,
    {
        return Self::concat_in(Global, left, right);
    }
}

impl<T, A: BufAllocator, L: LengthType> DynArr<T, A, L> {
    pub const fn new_in(alloc: A) -> Self {
        return Self {
            inner: Inner::new_in(alloc),
        };
    }

    pub fn with_capacity_in(alloc: A, capacity: L) -> ArrResult<Self> {
        return Ok(Self {
            inner: Inner::with_capacity_in(alloc, capacity)?,
        });
    }

    pub fn from_slice_in(alloc: A, items: &[T]) -> ArrResult<Self>
    where
        T: Clone,
    {
        let mut arr = Self::with_capacity_in(alloc, Self::length_of(items.len())?)?;
        arr.push_slice(items)?;
        return Ok(arr);
    }

    pub fn concat_in(alloc: A, left: &[T], right: &[T]) -> ArrResult<Self>
    where
        T: Clone,
    {
        let Some(total) = left.len().checked_add(right.len()) else {
            return Err(ArrErr::new(ErrorReason::CapacityOverflow));
        };
        let mut arr = Self::with_capacity_in(alloc, Self::length_of(total)?)?;
        arr.push_slice(left)?;
        arr.push_slice(right)?;
        return Ok(arr);
    }

    /// An independent copy sharing a clone of the allocator. The copy's
    /// capacity equals its length.
    pub fn try_clone(&self) -> ArrResult<Self>
    where
        T: Clone,
        A: Clone,
    {
        return Self::from_slice_in(self.inner_alloc().clone(), self.as_slice());
    }

    #[inline]
    pub const fn capacity(&self) -> L {
        return self.inner.capacity();
    }

    #[inline]
    pub const fn len(&self) -> L {
        return self.inner.len();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.inner.len().as_usize()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.inner.len().as_usize()) }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    /// Appends `item`, growing if needed.
    pub fn push(&mut self, item: T) -> ArrResult<()> {
        let len = self.inner.len().as_usize();
        return self.insert(len, item);
    }

    /// Appends clones of `items`. Returns `false` if `items` was empty.
    pub fn push_slice(&mut self, items: &[T]) -> ArrResult<bool>
    where
        T: Clone,
    {
        let len = self.inner.len().as_usize();
        return self.insert_slice(len, items);
    }

    /// Appends `item` unless an equal element is already present.
    pub fn push_unique(&mut self, item: T) -> ArrResult<bool>
    where
        T: PartialEq,
    {
        let len = self.inner.len().as_usize();
        return self.insert_unique(len, item);
    }

    pub fn pop(&mut self) -> Option<T> {
        let len = self.inner.len().as_usize();
        if len == 0 {
            return None;
        }
        self.set_len(len - 1);
        let ret = unsafe { ptr::read(self.as_ptr().add(len - 1)) };
        self.shrink();
        return Some(ret);
    }

    /// Inserts `item` at `index`, shifting everything after it to the right.
    /// `index` may be at most `len`.
    pub fn insert(&mut self, index: usize, item: T) -> ArrResult<()> {
        let len = self.inner.len().as_usize();
        if index > len {
            return Err(ArrErr::out_of_range());
        }
        self.grow_for(1)?;

        unsafe {
            let at = self.as_mut_ptr().add(index);
            ptr::copy(at, at.add(1), len - index);
            ptr::write(at, item);
        }
        self.set_len(len + 1);
        return Ok(());
    }

    /// Inserts clones of `items` at `index`. Returns `false` if `items` was
    /// empty.
    pub fn insert_slice(&mut self, index: usize, items: &[T]) -> ArrResult<bool>
    where
        T: Clone,
    {
        let len = self.inner.len().as_usize();
        if index > len {
            return Err(ArrErr::out_of_range());
        }
        let count = items.len();
        if count == 0 {
            return Ok(false);
        }
        self.grow_for(count)?;

        let base = self.as_mut_ptr();
        unsafe { ptr::copy(base.add(index), base.add(index + count), len - index) };
        // If a clone panics the shifted tail leaks instead of being dropped twice.
        self.set_len(index);
        for (i, item) in items.iter().enumerate() {
            unsafe { ptr::write(base.add(index + i), item.clone()) };
        }
        self.set_len(len + count);
        return Ok(true);
    }

    /// Inserts `item` at `index` unless an equal element is already present.
    pub fn insert_unique(&mut self, index: usize, item: T) -> ArrResult<bool>
    where
        T: PartialEq,
    {
        if index > self.inner.len().as_usize() {
            return Err(ArrErr::out_of_range());
        }
        if self.contains(&item) {
            return Ok(false);
        }
        self.insert(index, item)?;
        return Ok(true);
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    pub fn remove_at(&mut self, index: usize) -> ArrResult<T> {
        let len = self.inner.len().as_usize();
        if index >= len {
            return Err(ArrErr::out_of_range());
        }

        let ret;
        unsafe {
            let at = self.as_mut_ptr().add(index);
            ret = ptr::read(at);
            ptr::copy(at.add(1), at, len - index - 1);
        }
        self.set_len(len - 1);
        self.shrink();
        return Ok(ret);
    }

    /// Removes every element inside `range`, e.g. `remove_range(2..=4)`.
    ///
    /// The range must hold at least one element and end inside the array,
    /// otherwise this fails with `OutOfRange`.
    pub fn remove_range<R>(&mut self, range: R) -> ArrResult<()>
    where
        R: RangeBounds<usize>,
    {
        let len = self.inner.len().as_usize();
        let span = range::resolve(range, len)?;
        if span.is_empty() {
            return Err(ArrErr::out_of_range());
        }
        let count = span.len();

        let base = self.as_mut_ptr();
        // If a drop panics the tail leaks instead of being dropped twice.
        self.set_len(span.start);
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(span.start), count));
            ptr::copy(base.add(span.end), base.add(span.start), len - span.end);
        }
        self.set_len(len - count);
        self.shrink();
        return Ok(());
    }

    /// Removes every element equal to `value`.
    pub fn remove(&mut self, value: &T) -> ArrResult<bool>
    where
        T: PartialEq,
    {
        return self.remove_where(|item| item == value);
    }

    pub fn remove_null(&mut self) -> ArrResult<bool>
    where
        T: Nullable,
    {
        return self.remove_where(|item| item.is_null());
    }

    /// Removes every element satisfying `pred` in a single pass.
    ///
    /// The survivors are moved into a new buffer that fits them exactly.
    pub fn remove_where<P>(&mut self, mut pred: P) -> ArrResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let count = self.count_where(&mut pred);
        if count == 0 {
            return Ok(false);
        }
        let survivors = self.inner.len().as_usize() - count;
        self.compact(survivors, |item, _| !pred(item))?;
        self.shrink();
        return Ok(true);
    }

    /// Keeps only the first occurrence of every value, preserving order.
    /// Returns `false`, without reallocating, if there were no duplicates.
    pub fn remove_duplicates(&mut self) -> ArrResult<bool>
    where
        T: PartialEq,
    {
        let items = self.as_slice();
        let mut unique = 0;
        for (i, item) in items.iter().enumerate() {
            if !items[..i].contains(item) {
                unique += 1;
            }
        }
        if unique == items.len() {
            return Ok(false);
        }
        self.compact(unique, |item, kept| !kept.contains(item))?;
        return Ok(true);
    }

    /// Reallocates to exactly `capacity`, dropping elements that no longer fit.
    /// Returns `false` if the capacity was already `capacity`.
    pub fn resize(&mut self, capacity: L) -> ArrResult<bool> {
        if capacity == self.capacity() {
            return Ok(false);
        }
        self.reallocate(capacity.as_usize())?;
        return Ok(true);
    }

    /// Shrinks the capacity to the length.
    pub fn trim(&mut self) -> ArrResult<bool> {
        let len = self.inner.len();
        return self.resize(len);
    }

    #[inline]
    fn inner_alloc(&self) -> &A {
        return self.inner.allocator();
    }

    fn length_of(count: usize) -> ArrResult<L> {
        let Some(len) = L::from_usize(count) else {
            return Err(ArrErr::new(ErrorReason::CapacityOverflow));
        };
        return Ok(len);
    }

    #[inline]
    fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.inner.capacity().as_usize());
        // Never larger than the capacity, which already fits in `L`.
        let Some(len) = L::from_usize(len) else {
            unreachable!("length {} does not fit the length type", len);
        };
        self.inner.set_len(len);
    }

    /// Makes room for `additional` more elements following the growth policy.
    fn grow_for(&mut self, additional: usize) -> ArrResult<()> {
        let len = self.inner.len().as_usize();
        let capacity = self.inner.capacity().as_usize();
        let Some(required) = len.checked_add(additional) else {
            return Err(ArrErr::new(ErrorReason::CapacityOverflow));
        };
        if required <= capacity {
            return Ok(());
        }

        let doubled = if capacity == 0 { 1 } else { capacity.saturating_mul(2) };
        let mut target = cmp::max(doubled, required);
        if L::from_usize(target).is_none() {
            target = cmp::max(required, L::MAX_VALUE.as_usize());
        }
        log::trace!("growing from {} to {} slots", capacity, target);
        return self.reallocate(target);
    }

    /// Hands back memory once less than a quarter of the buffer is in use,
    /// keeping twice the remaining length. An empty array ends up with no
    /// buffer at all.
    ///
    /// After either a grow or a shrink the length sits at half the capacity
    /// or above, so at least `capacity / 4` removals separate two shrinks.
    fn shrink(&mut self) {
        let len = self.inner.len().as_usize();
        let capacity = self.inner.capacity().as_usize();
        if len.saturating_mul(4) >= capacity {
            return;
        }

        let target = len * 2;
        log::debug!("shrinking from {} to {} slots holding {}", capacity, target, len);
        if let Err(err) = self.reallocate(target) {
            // The removal already happened and the old buffer is still valid.
            log::warn!("keeping {} slots after failed shrink: {}", capacity, err);
        }
    }

    /// Moves the first `min(len, capacity)` elements into a fresh buffer of
    /// exactly `capacity` slots and drops the rest. The new buffer is obtained
    /// before anything is touched, so on error nothing changes.
    fn reallocate(&mut self, capacity: usize) -> ArrResult<()> {
        let new_cap = Self::length_of(capacity)?;
        let new_ptr = self.inner.allocate(capacity)?;

        let len = self.inner.len().as_usize();
        let keep = cmp::min(len, capacity);
        let base = self.as_mut_ptr();

        self.set_len(keep);
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(keep), len - keep));
            ptr::copy_nonoverlapping(base, new_ptr.as_ptr(), keep);
            self.inner.install(new_ptr, new_cap);
        }
        log::trace!("reallocated to {} slots", capacity);
        return Ok(());
    }

    /// Rebuilds the array in a buffer of exactly `survivors` slots, moving over
    /// the elements for which `keep(item, kept_so_far)` holds and dropping the
    /// others.
    fn compact<F>(&mut self, survivors: usize, mut keep: F) -> ArrResult<()>
    where
        F: FnMut(&T, &[T]) -> bool,
    {
        let new_cap = Self::length_of(survivors)?;
        let new_ptr = self.inner.allocate(survivors)?;

        let len = self.inner.len().as_usize();
        let base = self.as_mut_ptr();
        let dest = new_ptr.as_ptr();
        // If `keep` panics the elements leak instead of being dropped twice.
        self.set_len(0);

        let mut written = 0;
        for i in 0..len {
            unsafe {
                let item = base.add(i);
                let kept = slice::from_raw_parts(dest, written);
                if written < survivors && keep(&*item, kept) {
                    ptr::copy_nonoverlapping(item, dest.add(written), 1);
                    written += 1;
                } else {
                    ptr::drop_in_place(item);
                }
            }
        }

        unsafe { self.inner.install(new_ptr, new_cap) };
        self.set_len(written);
        log::trace!("compacted {} elements into {} slots", len, survivors);
        return Ok(());
    }

    /// Drops every element and frees the buffer.
    fn release(&mut self) -> bool {
        if self.inner.capacity() == L::ZERO_VALUE {
            return false;
        }
        let len = self.inner.len().as_usize();
        let base = self.as_mut_ptr();
        self.set_len(0);
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, len)) };
        self.inner.free();
        return true;
    }
}

impl<T, A: BufAllocator, L: LengthType> Sequence<T> for DynArr<T, A, L> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.inner.len().as_usize()) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.inner.len().as_usize()) }
    }

    /// The capacity. Bulk writes may fill up the spare slots.
    #[inline]
    fn bounds(&self) -> usize {
        return self.inner.capacity().as_usize();
    }

    fn write_at(&mut self, index: usize, item: T) -> ArrResult<()> {
        let len = self.inner.len().as_usize();
        if index < len {
            self.as_mut_slice()[index] = item;
            return Ok(());
        }
        if index == len && len < self.bounds() {
            unsafe { ptr::write(self.as_mut_ptr().add(len), item) };
            self.set_len(len + 1);
            return Ok(());
        }
        return Err(ArrErr::out_of_range());
    }
}

impl<T, A: BufAllocator, L: LengthType> Clear<T> for DynArr<T, A, L> {
    /// Drops all elements and frees the buffer, like `resize(0)`.
    fn remove_all(&mut self) -> bool {
        return self.release();
    }
}

impl<T, A: BufAllocator, L: LengthType> Drop for DynArr<T, A, L> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
        // `Inner` hands the buffer back to the allocator.
    }
}

impl<T, A: BufAllocator + Default, L: LengthType> Default for DynArr<T, A, L> {
    fn default() -> Self {
        return Self::new_in(A::default());
    }
}

impl<T: fmt::Debug, A: BufAllocator, L: LengthType> fmt::Debug for DynArr<T, A, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, A: BufAllocator, L: LengthType> Index<usize> for DynArr<T, A, L> {
    type Output = T;

    /// Panics if `index >= len`. Use `Sequence::get` for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T, A: BufAllocator, L: LengthType> IndexMut<usize> for DynArr<T, A, L> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T, U, A, B, L, M> PartialEq<DynArr<U, B, M>> for DynArr<T, A, L>
where
    T: PartialEq<U>,
    A: BufAllocator,
    B: BufAllocator,
    L: LengthType,
    M: LengthType,
{
    fn eq(&self, other: &DynArr<U, B, M>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, A: BufAllocator, L: LengthType> Eq for DynArr<T, A, L> {}

impl<T, U, A, L, const N: usize> PartialEq<FixedArr<U, N>> for DynArr<T, A, L>
where
    T: PartialEq<U>,
    A: BufAllocator,
    L: LengthType,
{
    fn eq(&self, other: &FixedArr<U, N>) -> bool {
        return self.as_slice() == other.as_array().as_slice();
    }
}

impl<T, U, A, L, const N: usize> PartialEq<[U; N]> for DynArr<T, A, L>
where
    T: PartialEq<U>,
    A: BufAllocator,
    L: LengthType,
{
    fn eq(&self, other: &[U; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T, U, A, L> PartialEq<[U]> for DynArr<T, A, L>
where
    T: PartialEq<U>,
    A: BufAllocator,
    L: LengthType,
{
    fn eq(&self, other: &[U]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: Clone, A: BufAllocator + Default, L: LengthType> TryFrom<&[T]> for DynArr<T, A, L> {
    type Error = ArrErr;

    fn try_from(items: &[T]) -> ArrResult<Self> {
        return Self::from_slice_in(A::default(), items);
    }
}

impl<T, A: BufAllocator + Default, L: LengthType, const N: usize> TryFrom<[T; N]> for DynArr<T, A, L> {
    type Error = ArrErr;

    fn try_from(items: [T; N]) -> ArrResult<Self> {
        let mut arr = Self::with_capacity_in(A::default(), Self::length_of(N)?)?;
        arr.move_from(items, 0)?;
        return Ok(arr);
    }
}

impl<T, A: BufAllocator, L: LengthType> IntoIterator for DynArr<T, A, L> {
    type Item = T;
    type IntoIter = IntoIter<T, A, L>;

    fn into_iter(self) -> IntoIter<T, A, L> {
        let mut me = ManuallyDrop::new(self);
        let len = me.inner.len().as_usize();
        me.inner.set_len(L::ZERO_VALUE);
        // The buffer now belongs to the iterator, `me` is never dropped.
        let inner = unsafe { ptr::read(&me.inner) };
        return IntoIter::new(inner, len);
    }
}

impl<'a, T, A: BufAllocator, L: LengthType> IntoIterator for &'a DynArr<T, A, L> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        return self.as_slice().iter();
    }
}

impl<'a, T, A: BufAllocator, L: LengthType> IntoIterator for &'a mut DynArr<T, A, L> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        return self.as_mut_slice().iter_mut();
    }
}
