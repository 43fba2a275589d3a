//! # Array Kit
//!
//! The `arrkit` crate provides two `#[no_std]` array containers that share one
//! set of sequence algorithms.
//!
//! * `FixedArr<T, N>` holds exactly `N` elements inline. Its size never changes.
//! * `DynArr<T, A, L>` is a heap array that doubles its capacity when it runs out
//!   of room and gives memory back once it is less than a quarter full. Every
//!   allocation is fallible, so running out of memory returns an error instead
//!   of aborting.
//!
//! Both implement the `Sequence` trait, which layers searching, counting, filling,
//! replacing, reversing, shuffling, sorting, bulk copies and comparisons on top of
//! a handful of primitives (`as_slice`, `bounds`, `write_at`). Stores that can
//! be emptied also implement `Clear` (`remove_all`, `delete_all`).
//! Sorting is a median-of-three quicksort that hands short ranges to an insertion
//! sort; the cutover is configurable through `SortConfig`.
//!
//! Like the standard `Vec`, `DynArr` can be built with a smaller length type than
//! `usize` (e.g. `u32`) and with a custom allocator through the `BufAllocator`
//! trait.
//!
//! # Feature Flags
//! * `alloc_api2` - This feature enables `alloc::Api2`, an adapter that lets any
//!   `allocator_api2::alloc::Allocator` back a `DynArr`.

#![no_std]

extern crate alloc as liballoc;

#[cfg(test)]
extern crate std;

pub mod alloc;
mod dyn_array;
mod fixed_array;
mod sequence;
pub mod types;

pub use dyn_array::DynArr;
pub use dyn_array::IntoIter;
pub use fixed_array::FixedArr;
pub use sequence::Clear;
pub use sequence::Sequence;
