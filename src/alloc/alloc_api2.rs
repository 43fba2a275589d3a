use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Alloc2;

use super::AllocError;
use super::BufAllocator;

/// Adapts an `allocator_api2` allocator so it can back a `DynArr`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Api2<A>(pub A);

unsafe impl<A: Alloc2> BufAllocator for Api2<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let Ok(mem) = self.0.allocate(layout) else {
            return Err(AllocError);
        };
        return Ok(mem.cast::<u8>());
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.0.deallocate(ptr, layout) };
    }
}
