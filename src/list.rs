use core::cmp::Ordering;

use crate::core::DynList;
use crate::error::DynListError;

/// Basic operations of an index-addressed list
pub trait List<T> {
    /// Appends an element to the end of the list.
    fn push(&mut self, value: T);

    /// Inserts an element at `index`, moving later elements one position up.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index > len()`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), DynListError>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len()`.
    fn replace(&mut self, index: usize, value: T) -> Result<T, DynListError>;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len()`.
    fn try_get(&self, index: usize) -> Result<&T, DynListError>;

    /// Removes the element at `index`, moving later elements one position down.
    ///
    /// # Errors
    ///
    /// Returns `DynListError::IndexOutOfBounds` if `index >= len()`.
    fn remove(&mut self, index: usize) -> Result<T, DynListError>;

    /// Drops every element.
    fn clear(&mut self);

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A list that can be sorted both with the standard sort and with quicksort
pub trait SortableList<T>: List<T> {
    /// Sorts with the standard sort, ordered by `compare`.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts with quicksort, ordered by `compare`.
    fn quicksort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts into ascending natural order with the standard sort.
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts into ascending natural order with quicksort.
    fn quicksort(&mut self)
    where
        T: Ord,
    {
        self.quicksort_by(T::cmp);
    }
}

impl<T> List<T> for DynList<T> {
    fn push(&mut self, value: T) {
        DynList::push(self, value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), DynListError> {
        DynList::insert(self, index, value)
    }

    fn replace(&mut self, index: usize, value: T) -> Result<T, DynListError> {
        DynList::replace(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, DynListError> {
        DynList::try_get(self, index)
    }

    fn remove(&mut self, index: usize) -> Result<T, DynListError> {
        DynList::remove(self, index)
    }

    fn clear(&mut self) {
        DynList::clear(self);
    }

    fn len(&self) -> usize {
        DynList::len(self)
    }
}

impl<T> SortableList<T> for DynList<T> {
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        DynList::sort_by(self, compare);
    }

    fn quicksort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        DynList::quicksort_by(self, compare);
    }
}
