use core::array;
use core::fmt;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;

use crate::Clear;
use crate::Sequence;
use crate::alloc::BufAllocator;
use crate::dyn_array::DynArr;
use crate::types::ArrErr;
use crate::types::ArrResult;
use crate::types::LengthType;

/// An inline array of exactly `N` elements with the `Sequence` algorithms.
///
/// Its size and its bounds are both `N`. Building one from fewer than `N`
/// values fills the remaining slots with `T::default()`, building one from
/// more fails with `ErrorReason::LengthMismatch`.
#[derive(Clone, Copy, Hash)]
pub struct FixedArr<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArr<T, N> {
    pub const SIZE: usize = N;

    pub const fn from_array(data: [T; N]) -> Self {
        return Self { data: data };
    }

    #[inline]
    pub const fn static_size(&self) -> usize {
        return N;
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        return &self.data;
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        return &mut self.data;
    }

    pub fn into_inner(self) -> [T; N] {
        return self.data;
    }
}

impl<T: Default, const N: usize> FixedArr<T, N> {
    /// Every slot holds `T::default()`.
    pub fn new() -> Self {
        return Self {
            data: array::from_fn(|_| T::default()),
        };
    }

    /// Clones `items` into the front of a new array and defaults the rest.
    pub fn from_slice(items: &[T]) -> ArrResult<Self>
    where
        T: Clone,
    {
        if items.len() > N {
            return Err(ArrErr::length_mismatch());
        }
        let mut arr = Self::new();
        arr.data[..items.len()].clone_from_slice(items);
        return Ok(arr);
    }

    /// Joins `self` and `other` into a `FixedArr` of `K` elements, which must
    /// be exactly `N + M`.
    pub fn concat<const M: usize, const K: usize>(&self, other: &FixedArr<T, M>) -> ArrResult<FixedArr<T, K>>
    where
        T: Clone,
    {
        if N.checked_add(M) != Some(K) {
            return Err(ArrErr::length_mismatch());
        }
        let mut out = FixedArr::<T, K>::new();
        out.copy_from(&self.data, 0)?;
        out.copy_from(&other.data, N)?;
        return Ok(out);
    }
}

impl<T, const N: usize> Sequence<T> for FixedArr<T, N> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        return &self.data;
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        return &mut self.data;
    }

    #[inline]
    fn bounds(&self) -> usize {
        return N;
    }

    fn write_at(&mut self, index: usize, item: T) -> ArrResult<()> {
        let Some(slot) = self.data.get_mut(index) else {
            return Err(ArrErr::out_of_range());
        };
        *slot = item;
        return Ok(());
    }
}

impl<T: Default, const N: usize> Clear<T> for FixedArr<T, N> {
    /// Resets every slot to `T::default()`.
    fn remove_all(&mut self) -> bool {
        for slot in self.data.iter_mut() {
            *slot = T::default();
        }
        return N > 0;
    }
}

impl<T: Default, const N: usize> Default for FixedArr<T, N> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArr<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArr<T, N> {
    fn from(data: [T; N]) -> Self {
        return Self::from_array(data);
    }
}

impl<T: Default + Clone, const N: usize> TryFrom<&[T]> for FixedArr<T, N> {
    type Error = ArrErr;

    fn try_from(items: &[T]) -> ArrResult<Self> {
        return Self::from_slice(items);
    }
}

impl<T, const N: usize> Index<usize> for FixedArr<T, N> {
    type Output = T;

    /// Panics if `index >= N`. Use `Sequence::get` for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.data[index];
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArr<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.data[index];
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<FixedArr<U, M>> for FixedArr<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedArr<U, M>) -> bool {
        return self.data.as_slice() == other.data.as_slice();
    }
}

impl<T: Eq, const N: usize> Eq for FixedArr<T, N> {}

impl<T, U, A, L, const N: usize> PartialEq<DynArr<U, A, L>> for FixedArr<T, N>
where
    T: PartialEq<U>,
    A: BufAllocator,
    L: LengthType,
{
    fn eq(&self, other: &DynArr<U, A, L>) -> bool {
        return self.data.as_slice() == other.as_slice();
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedArr<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        return self.data.as_slice() == other.as_slice();
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for FixedArr<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        return self.data.as_slice() == other;
    }
}

impl<T, const N: usize> IntoIterator for FixedArr<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> array::IntoIter<T, N> {
        return self.data.into_iter();
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArr<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        return self.data.iter();
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArr<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        return self.data.iter_mut();
    }
}
