//! Hybrid quick/insertion sort over an inclusive index range of a slice.
//!
//! `less(a, b)` must return `true` when `a` goes before `b`. The sort is not
//! stable.

/// Sorts `data[from..=to]`. Returns `true` if the range was reordered or
/// partitioned.
pub(crate) fn quick_sort<T, F>(data: &mut [T], mut from: usize, mut to: usize, less: &F, threshold: usize) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    let mut dirty = false;
    loop {
        if to <= from || to >= data.len() {
            return dirty;
        }

        if to - from == 1 {
            if less(&data[to], &data[from]) {
                data.swap(from, to);
                return true;
            }
            return dirty;
        }

        if to - from + 1 < threshold {
            return insertion_sort(data, from, to, less) || dirty;
        }

        let pivot = partition(data, from, to, less);
        dirty = true;

        // Recurse into the smaller side and loop on the larger one so the
        // stack stays logarithmic even with bad pivots.
        if pivot - from < to - pivot {
            quick_sort(data, from, pivot - 1, less, threshold);
            from = pivot + 1;
        } else {
            quick_sort(data, pivot + 1, to, less, threshold);
            to = pivot - 1;
        }
    }
}

/// Shift right until in place. Returns `true` if anything moved.
pub(crate) fn insertion_sort<T, F>(data: &mut [T], from: usize, to: usize, less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    let mut dirty = false;
    for i in (from + 1)..=to {
        let mut j = i;
        while j > from && less(&data[i], &data[j - 1]) {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
            dirty = true;
        }
    }
    return dirty;
}

/// Needs at least three elements. Returns the final index of the pivot, which
/// is always greater than `from` and less than `to`.
fn partition<T, F>(data: &mut [T], from: usize, to: usize, less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    // Median of three: order first, middle and last.
    let mid = from + (to - from) / 2;
    if less(&data[mid], &data[from]) {
        data.swap(from, mid);
    }
    if less(&data[to], &data[from]) {
        data.swap(from, to);
    }
    if less(&data[to], &data[mid]) {
        data.swap(mid, to);
    }

    // The median becomes the pivot and waits next to the end.
    let slot = to - 1;
    data.swap(mid, slot);

    let mut pivot = from;
    for i in (from + 1)..slot {
        if less(&data[i], &data[slot]) {
            pivot += 1;
            data.swap(i, pivot);
        }
    }

    pivot += 1;
    data.swap(pivot, slot);
    return pivot;
}
