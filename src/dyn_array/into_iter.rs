use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use super::inner::Inner;
use crate::alloc::BufAllocator;
use crate::types::LengthType;

/// Moves the elements out of a `DynArr`, front to back.
pub struct IntoIter<T, A: BufAllocator, L: LengthType> {
    inner: Inner<T, A, L>,
    head:  usize,
    tail:  usize,
}

impl<T, A: BufAllocator, L: LengthType> IntoIter<T, A, L> {
    pub(crate) fn new(inner: Inner<T, A, L>, len: usize) -> Self {
        return Self {
            inner: inner,
            head:  0,
            tail:  len,
        };
    }

    /// The elements not yielded yet.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.inner.get_ptr().add(self.head), self.tail - self.head) }
    }
}

impl<T, A: BufAllocator, L: LengthType> Iterator for IntoIter<T, A, L> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        let item = unsafe { ptr::read(self.inner.get_ptr().add(self.head)) };
        self.head += 1;
        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.tail - self.head;
        return (left, Some(left));
    }
}

impl<T, A: BufAllocator, L: LengthType> DoubleEndedIterator for IntoIter<T, A, L> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        return Some(unsafe { ptr::read(self.inner.get_ptr().add(self.tail)) });
    }
}

impl<T, A: BufAllocator, L: LengthType> ExactSizeIterator for IntoIter<T, A, L> {}

impl<T, A: BufAllocator, L: LengthType> FusedIterator for IntoIter<T, A, L> {}

impl<T: fmt::Debug, A: BufAllocator, L: LengthType> fmt::Debug for IntoIter<T, A, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: BufAllocator, L: LengthType> Drop for IntoIter<T, A, L> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(unsafe { self.inner.get_ptr().add(self.head) }, self.tail - self.head);
        unsafe { ptr::drop_in_place(rest) };
        // `inner` frees the buffer afterwards.
    }
}
