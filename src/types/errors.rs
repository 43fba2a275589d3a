use core::error::Error;
use core::fmt;

/// Lets one figure out what went wrong during an array operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    /// An index, or a range boundary, was outside the valid span.
    OutOfRange = 1,
    /// A bulk transfer source does not fit in the destination span.
    LengthMismatch,
    /// The requested capacity does not fit in the length type.
    CapacityOverflow,
    UsizeOverflow,
    LayoutFailure,
    AllocFailure,
}

/// A type alias for `Result<T, ArrErr>`
pub type ArrResult<T> = Result<T, ArrErr>;

/// The error returned by every fallible operation of `DynArr`, `FixedArr`
/// and the `Sequence` algorithms.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ArrErr(ErrorReason);

impl ArrErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub(crate) const fn out_of_range() -> Self {
        return Self(ErrorReason::OutOfRange);
    }

    pub(crate) const fn length_mismatch() -> Self {
        return Self(ErrorReason::LengthMismatch);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<ErrorReason> for ArrErr {
    fn from(reason: ErrorReason) -> Self {
        return Self(reason);
    }
}

impl Error for ArrErr {}

impl fmt::Display for ArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::OutOfRange => f.write_str("Array index out of bounds."),
            ErrorReason::LengthMismatch => f.write_str("Destination array cannot be smaller than source array."),
            ErrorReason::CapacityOverflow => f.write_str("Capacity type overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
        }
    }
}
