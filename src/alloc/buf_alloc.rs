use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The source of buffers for a `DynArr`.
///
/// `DynArr` never resizes a buffer in place. Every reallocation asks for a
/// fresh buffer first and only releases the old one once the contents have
/// been moved across, so an allocator only has to hand out and take back
/// whole blocks.
///
/// # Safety
///
/// Implementations must uphold the same contract as
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>: a returned
/// block stays valid until it is passed back to `deallocate`, and it must be
/// at least `layout.size()` bytes aligned to `layout.align()`.
pub unsafe trait BufAllocator {
    /// Allocates a block for the given non zero sized layout.
    ///
    /// If the allocation fails it returns an `AllocError`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Returns the block pointed at by `ptr`.
    ///
    /// The block must have been allocated by this allocator with the
    /// same layout.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A> BufAllocator for &A
where
    A: BufAllocator,
{
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        return (**self).allocate(layout);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) };
    }
}
