use core::ops::Bound;
use core::ops::Range;
use core::ops::RangeBounds;

use crate::types::ArrErr;
use crate::types::ArrResult;

/// Turns any `RangeBounds` into a half open span, failing if it does not
/// satisfy `start <= end <= limit`.
pub(crate) fn resolve<R>(range: R, limit: usize) -> ArrResult<Range<usize>>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => {
            let Some(start) = start.checked_add(1) else {
                return Err(ArrErr::out_of_range());
            };
            start
        }
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => {
            let Some(end) = end.checked_add(1) else {
                return Err(ArrErr::out_of_range());
            };
            end
        }
        Bound::Excluded(&end) => end,
        Bound::Unbounded => limit,
    };

    if start > end || end > limit {
        return Err(ArrErr::out_of_range());
    }
    return Ok(start..end);
}

/// Validates a bulk write of `count` items at `offset` into a store with the
/// given logical `size` and `bounds`. Nothing may be written before this passes.
pub(crate) fn check_transfer(size: usize, bounds: usize, offset: usize, count: usize) -> ArrResult<()> {
    let Some(end) = offset.checked_add(count) else {
        return Err(ArrErr::length_mismatch());
    };
    if end > bounds {
        return Err(ArrErr::length_mismatch());
    }
    // Writes extend the logical size, they cannot leave a gap behind it.
    if offset > size {
        return Err(ArrErr::out_of_range());
    }
    return Ok(());
}
