use core::alloc::Layout;
use core::ptr::NonNull;

use liballoc::alloc as heap;

use super::AllocError;
use super::BufAllocator;

/// The default allocator of a `DynArr`, a thin wrapper around the global heap.
///
/// Using it from a `#![no_std]` binary requires a `#[global_allocator]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl BufAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        // heap::alloc() requires that the layout size be non-zero.
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { heap::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(ptr);
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { heap::dealloc(ptr.as_ptr(), layout) };
    }
}
