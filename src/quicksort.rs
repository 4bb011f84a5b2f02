//! Hand-rolled quicksort with a Hoare-style two-pointer partition.
//!
//! The pivot is the middle element of each subrange. Its position is followed
//! through swaps, so every comparison in a partition pass is made against the
//! value chosen at the start of the pass, and `T` needs no `Clone` bound.

use core::cmp::Ordering;

/// Sorts `slice` in place in the order defined by `compare`.
///
/// The result is a permutation of the input that is ascending under
/// `compare`. Equal elements may be reordered. If `compare` is not a total
/// order the resulting order is unspecified, but the call still terminates
/// and never indexes outside `slice`.
pub fn quicksort_by<T, F>(slice: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(slice, &mut compare);
}

/// Sorts `slice` in ascending natural order.
pub fn quicksort<T: Ord>(slice: &mut [T]) {
    quicksort_by(slice, T::cmp);
}

fn sort_range<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Recurse into the smaller half and loop on the larger one to keep the
    // stack depth logarithmic.
    while slice.len() > 1 {
        let split = partition(slice, compare);
        let (low, high) = slice.split_at_mut(split);
        if low.len() < high.len() {
            sort_range(low, compare);
            slice = high;
        } else {
            sort_range(high, compare);
            slice = low;
        }
    }
}

/// Partitions `slice` around its middle element and returns the split point.
///
/// After the call every element in `slice[..split]` is not greater than the
/// pivot and every element in `slice[split..]` is not less than it. The split
/// is always in `1..slice.len()`, so both halves are strictly smaller.
///
/// `right` is kept exclusive: the element under the right pointer is
/// `slice[right - 1]`.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = slice.len();
    debug_assert!(len > 1);

    let mut pivot = (len - 1) / 2;
    let mut left = 0;
    let mut right = len;

    while left < right {
        while left < len && compare(&slice[left], &slice[pivot]) == Ordering::Less {
            left += 1;
        }
        while right > 0 && compare(&slice[right - 1], &slice[pivot]) == Ordering::Greater {
            right -= 1;
        }

        if left < right {
            let other = right - 1;
            slice.swap(left, other);
            if pivot == left {
                pivot = other;
            } else if pivot == other {
                pivot = left;
            }
            left += 1;
            right -= 1;
        }
    }

    left.clamp(1, len - 1)
}
