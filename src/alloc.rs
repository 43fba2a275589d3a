//! Allocator types used by `DynArr`: the `BufAllocator` trait, the `AllocError`
//! type and the default `Global` allocator.
//!
//! If built with the `alloc_api2` feature, the `Api2` adapter lets any
//! `allocator_api2::alloc::Allocator` back a `DynArr`.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod buf_alloc;
mod global;

#[cfg(feature = "alloc_api2")]
pub use alloc_api2::Api2;
pub use buf_alloc::BufAllocator;
pub use global::Global;

pub use alloc_error::AllocError;

mod alloc_error {
    use core::error::Error;
    use core::fmt;

    /// This indicates some sort of memory allocation error.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct AllocError;

    impl Error for AllocError {}

    impl fmt::Display for AllocError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("A memory allocation error occurred.")
        }
    }
}
