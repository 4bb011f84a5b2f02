use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

use log::{debug, trace};

use crate::error::DynListError;
use crate::iter::DynListIter;
use crate::quicksort;

/// Capacity of a list created with `DynList::new` or reset by `clear`.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable list stored in one contiguous buffer
///
/// Elements occupy positions `0..len()` in order. The buffer holds
/// `capacity()` slots and doubles when a push or insert finds it full.
pub struct DynList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynList<T> {
    /// Creates an empty list with the default capacity (10).
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// A capacity of 0 is allowed; the first insertion then grows the buffer
    /// to a single slot.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::InvalidCapacity` if `capacity` exceeds the
    /// largest buffer that can be allocated for `T`, or if the allocation
    /// itself fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynListError> {
        let max = max_capacity::<T>();
        let invalid = || DynListError::InvalidCapacity {
            requested: capacity as i128,
            max,
        };

        if capacity > max {
            return Err(invalid());
        }

        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_: TryReserveError| invalid())?;

        Ok(Self { items, capacity })
    }

    /// Creates an empty list from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::InvalidCapacity` if `capacity` is negative, or
    /// for any reason `with_capacity` would reject it.
    pub fn try_from_signed(capacity: isize) -> Result<Self, DynListError> {
        match usize::try_from(capacity) {
            Ok(capacity) => Self::with_capacity(capacity),
            Err(_) => Err(DynListError::InvalidCapacity {
                requested: capacity as i128,
                max: max_capacity::<T>(),
            }),
        }
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of slots in the backing buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check_index(&self, index: usize) -> Result<(), DynListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            trace!("rejected index {index} for list of length {}", self.items.len());
            Err(DynListError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            })
        }
    }

    fn check_insert_index(&self, index: usize) -> Result<(), DynListError> {
        if index <= self.items.len() {
            Ok(())
        } else {
            trace!(
                "rejected insert index {index} for list of length {}",
                self.items.len()
            );
            Err(DynListError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            })
        }
    }

    /// Makes room for one more element, doubling the buffer if it is full.
    fn ensure_capacity(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }

        let new_capacity = grown_capacity(self.capacity);
        debug!("growing list buffer from {} to {new_capacity}", self.capacity);

        self.items = rebuffer(mem::take(&mut self.items), new_capacity);
        self.capacity = new_capacity;
    }

    /// Appends an element to the end of the list.
    pub fn push(&mut self, value: T) {
        self.ensure_capacity();
        self.items.push(value);
    }

    /// Inserts an element at `index`, shifting everything at and after it
    /// one position to the right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index > len()`. The list
    /// is left unchanged and `value` is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynListError> {
        self.check_insert_index(index)?;
        self.ensure_capacity();

        self.items.insert(index, value);
        Ok(())
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Tries to get the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, DynListError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Stores `value` at `index` and returns the element it replaced.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len()`.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, DynListError> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self.items[index], value))
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one position to the left.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, DynListError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Drops every element and replaces the buffer with a fresh one of the
    /// default capacity.
    pub fn clear(&mut self) {
        if self.capacity != DEFAULT_CAPACITY {
            debug!(
                "clearing list, buffer reset from {} to {DEFAULT_CAPACITY}",
                self.capacity
            );
        }
        self.items = Vec::with_capacity(DEFAULT_CAPACITY);
        self.capacity = DEFAULT_CAPACITY;
    }

    /// Sorts the list with the standard library sort, ordered by `compare`.
    ///
    /// The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// Sorts the list with the standard library sort, ordered by the key
    /// `f` extracts from each element.
    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_key(f);
    }

    /// Sorts the list with the hand-rolled quicksort, ordered by `compare`.
    ///
    /// Not stable: equal elements may end up in any order.
    pub fn quicksort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quicksort::quicksort_by(&mut self.items, compare);
    }

    /// Sorts the list with the hand-rolled quicksort, ordered by the key
    /// `f` extracts from each element.
    pub fn quicksort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        quicksort::quicksort_by(&mut self.items, |a, b| f(a).cmp(&f(b)));
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements in the list.
    #[must_use]
    pub fn iter(&self) -> DynListIter<'_, T> {
        DynListIter::new(&self.items)
    }

    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord> DynList<T> {
    /// Sorts the list into ascending natural order with the standard
    /// library sort.
    pub fn sort(&mut self) {
        self.items.sort();
    }

    /// Sorts the list into ascending natural order with the hand-rolled
    /// quicksort.
    pub fn quicksort(&mut self) {
        quicksort::quicksort(&mut self.items);
    }
}

impl<T: Clone> Clone for DynList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for DynList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynList<T> {}

impl<T> From<Vec<T>> for DynList<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len().max(DEFAULT_CAPACITY);
        Self {
            items: rebuffer(items, capacity),
            capacity,
        }
    }
}

impl<T> FromIterator<T> for DynList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DynList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Moves `items` into a fresh buffer with room for `capacity` elements.
fn rebuffer<T>(items: Vec<T>, capacity: usize) -> Vec<T> {
    debug_assert!(items.len() <= capacity);
    let mut buffer = Vec::with_capacity(capacity);
    buffer.extend(items);
    buffer
}

/// Next capacity when a full buffer grows: double it, and go from 0 to 1.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(1)
}

/// Largest capacity a buffer of `T` may be asked for.
pub(crate) fn max_capacity<T>() -> usize {
    let max = isize::MAX as usize;
    match mem::size_of::<T>() {
        0 => max,
        size => max / size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_policy() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 2);
        assert_eq!(grown_capacity(10), 20);
        assert_eq!(grown_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_max_capacity_depends_on_element_size() {
        assert_eq!(max_capacity::<()>(), isize::MAX as usize);
        assert_eq!(max_capacity::<u8>(), isize::MAX as usize);
        assert_eq!(max_capacity::<u64>(), isize::MAX as usize / 8);
    }

    #[test]
    fn test_buffer_grows_by_doubling() {
        let mut list = DynList::new();
        for i in 0..DEFAULT_CAPACITY {
            list.push(i);
        }
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        list.push(DEFAULT_CAPACITY);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY * 2);
        assert!(list.items.capacity() >= list.capacity());
    }

    #[test]
    fn test_zero_capacity_grows_to_one() {
        let mut list = DynList::with_capacity(0).unwrap();
        assert_eq!(list.capacity(), 0);

        list.push("first");
        assert_eq!(list.capacity(), 1);

        list.push("second");
        assert_eq!(list.capacity(), 2);

        list.insert(0, "zeroth").unwrap();
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.as_slice(), &["zeroth", "first", "second"]);
    }

    #[test]
    fn test_rejected_insert_does_not_grow() {
        let mut list = DynList::with_capacity(1).unwrap();
        list.push(1);

        assert!(list.insert(5, 2).is_err());
        assert_eq!(list.capacity(), 1);
        assert_eq!(list.as_slice(), &[1]);
    }

    #[test]
    fn test_clone_allocates_full_capacity() {
        let mut list = DynList::new();
        list.extend(0..3);

        let mut copy = list.clone();
        assert_eq!(copy.capacity(), DEFAULT_CAPACITY);
        assert!(copy.items.capacity() >= copy.capacity());

        copy.extend(3..10);
        assert_eq!(copy.capacity(), DEFAULT_CAPACITY);
        assert!(copy.items.capacity() >= DEFAULT_CAPACITY);

        copy.push(10);
        assert_eq!(copy.capacity(), DEFAULT_CAPACITY * 2);
        assert!(copy.items.capacity() >= copy.capacity());
        assert_eq!(list.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_from_vec_drops_spare_room() {
        let mut source = Vec::with_capacity(100);
        source.extend([3, 1, 2]);

        let mut list = DynList::from(source);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.items.capacity() >= list.capacity());
        assert!(list.items.capacity() < 100);

        list.extend(0..8);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY * 2);
        assert_eq!(list.len(), 11);
    }

    #[test]
    fn test_growth_keeps_buffer_in_step() {
        let mut list = DynList::with_capacity(3).unwrap();
        for i in 0..50 {
            list.push(i);
            assert!(list.items.capacity() >= list.capacity());
        }
        assert_eq!(list.capacity(), 96);

        let collected: DynList<i32> = (0..25).collect();
        assert_eq!(collected.capacity(), 40);
        assert!(collected.items.capacity() >= collected.capacity());
    }

    #[test]
    fn test_clear_resets_capacity() {
        let mut list = DynList::with_capacity(2).unwrap();
        list.extend(0..5);
        assert_eq!(list.capacity(), 8);

        list.clear();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
    }
}
