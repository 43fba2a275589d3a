use core::fmt;

/// The type used for the length and capacity fields of a `DynArr`.
///
/// Picking something narrower than `usize` (e.g. `u32`) shrinks the container
/// header, at the cost of a lower maximum capacity. Growth that would not fit
/// the chosen type fails with `ErrorReason::CapacityOverflow` instead of wrapping.
///
/// It's marked as unsafe since implementations must behave like an unsigned
/// integer: ordered, and `as_usize`/`from_usize` must round trip for every
/// value that fits both types.
pub unsafe trait LengthType: Copy + Ord + fmt::Debug {
    const MAX_VALUE: Self;
    const ZERO_VALUE: Self;

    fn as_usize(self) -> usize;

    /// Returns `None` if `value` is larger than `Self::MAX_VALUE`.
    fn from_usize(value: usize) -> Option<Self>;
}

macro_rules! impl_length_type {
    ($typ:ty) => {
        unsafe impl LengthType for $typ {
            const MAX_VALUE: Self = Self::MAX;
            const ZERO_VALUE: Self = 0;

            #[inline(always)]
            fn as_usize(self) -> usize {
                return self as usize;
            }

            #[inline]
            fn from_usize(value: usize) -> Option<Self> {
                return Self::try_from(value).ok();
            }
        }
    };
}

impl_length_type!(usize);
impl_length_type!(u8);
impl_length_type!(u16);
impl_length_type!(u32);
impl_length_type!(u64);
