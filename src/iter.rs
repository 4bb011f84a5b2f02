use alloc::vec;
use core::slice;

use crate::core::DynList;

/// Iterator over elements of a `DynList`, front to back
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct DynListIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for DynListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> DynListIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter(),
        }
    }
}

impl<'a, T> Iterator for DynListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for DynListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for DynListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynList<T> {
    type Item = &'a T;
    type IntoIter = DynListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that moves elements out of a `DynList`
#[derive(Debug)]
pub struct DynListIntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for DynListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for DynListIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for DynListIntoIter<T> {}

impl<T> IntoIterator for DynList<T> {
    type Item = T;
    type IntoIter = DynListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        DynListIntoIter {
            inner: self.into_items().into_iter(),
        }
    }
}
