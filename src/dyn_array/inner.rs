use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::alloc::BufAllocator;
use crate::types::ArrErr;
use crate::types::ArrResult;
use crate::types::ErrorReason;
use crate::types::LengthType;

const fn layout_array(layout: Layout, length: usize) -> ArrResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(ArrErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(ArrErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// The single owner of a `DynArr` buffer.
///
/// It records how many leading slots are initialized but never touches them:
/// initializing and dropping elements is up to the `DynArr`. Dropping an
/// `Inner` returns the buffer to its allocator.
///
/// Both counters live here so a narrow `L` packs them into one word.
pub(crate) struct Inner<T, A: BufAllocator, L: LengthType> {
    ptr:      NonNull<T>,
    length:   L,
    capacity: L,
    alloc:    A,
    _ph:      PhantomData<T>,
}

unsafe impl<T: Send, A: BufAllocator + Send, L: LengthType + Send> Send for Inner<T, A, L> {}
unsafe impl<T: Sync, A: BufAllocator + Sync, L: LengthType + Sync> Sync for Inner<T, A, L> {}

impl<T, A: BufAllocator, L: LengthType> Inner<T, A, L> {
    const LAYOUT: Layout = Layout::new::<T>();

    pub(crate) const fn new_in(alloc: A) -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            length:   L::ZERO_VALUE,
            capacity: L::ZERO_VALUE,
            alloc:    alloc,
            _ph:      PhantomData,
        };
    }

    pub(crate) fn with_capacity_in(alloc: A, capacity: L) -> ArrResult<Self> {
        let mut inner = Self::new_in(alloc);
        inner.ptr = inner.allocate(capacity.as_usize())?;
        inner.capacity = capacity;
        return Ok(inner);
    }

    #[inline]
    pub(crate) const fn len(&self) -> L {
        return self.length;
    }

    /// Only bookkeeping: the caller has already initialized or dropped the
    /// slots in between.
    #[inline]
    pub(crate) fn set_len(&mut self, length: L) {
        self.length = length;
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> L {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    #[inline]
    pub(crate) const fn get_ptr(&self) -> *mut T {
        return self.ptr.as_ptr();
    }

    /// Gets a buffer for `capacity` elements without touching the current one.
    ///
    /// Zero sized buffers never reach the allocator.
    pub(crate) fn allocate(&self, capacity: usize) -> ArrResult<NonNull<T>> {
        let layout = layout_array(Self::LAYOUT, capacity)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        let Ok(ptr) = self.alloc.allocate(layout) else {
            return Err(ArrErr::new(ErrorReason::AllocFailure));
        };
        return Ok(ptr.cast());
    }

    /// Swaps in a buffer returned by `allocate` and frees the old one.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `self.allocate(capacity)` and every element that
    /// still lives in the old buffer must have been moved out or dropped.
    pub(crate) unsafe fn install(&mut self, ptr: NonNull<T>, capacity: L) {
        self.free();
        self.ptr = ptr;
        self.capacity = capacity;
    }

    /// Returns the buffer to the allocator, leaving a zero capacity handle.
    /// Elements are not dropped.
    pub(crate) fn free(&mut self) {
        let Ok(layout) = layout_array(Self::LAYOUT, self.capacity.as_usize()) else {
            return;
        };
        if layout.size() != 0 {
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.capacity = L::ZERO_VALUE;
    }
}

impl<T, A: BufAllocator, L: LengthType> Drop for Inner<T, A, L> {
    fn drop(&mut self) {
        self.free();
    }
}
