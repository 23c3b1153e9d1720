use super::*;
use crate::traits::iter::{Drainable, Iterable, IterableMut};
use core::iter::FusedIterator;

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

pub struct IntoIter<T> {
    pub(super) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

pub struct Iter<'a, T> {
    pub(super) node: Option<&'a SinglyLinkedListNode<T>>,
    pub(super) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            self.node = node.next.as_deref();
            self.len -= 1;
            &node.value
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            node: self.node,
            len: self.len,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(super) node: Option<&'a mut SinglyLinkedListNode<T>>,
    pub(super) len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        self.node.take().map(|node| {
            let SinglyLinkedListNode {
                ref mut value,
                ref mut next,
            } = *node;
            self.node = next.as_deref_mut();
            self.len -= 1;
            value
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Pops from the front of the borrowed list on every call to `next`.
pub struct Drain<'a, T> {
    pub(super) list: &'a mut SinglyLinkedList<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Iterable for SinglyLinkedList<T> {
    type Item = T;
    type Iter<'a> = Iter<'a, T>
    where
        Self: 'a;
    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        SinglyLinkedList::iter(self)
    }
}

impl<T> IterableMut for SinglyLinkedList<T> {
    type Item = T;
    type IterMut<'a> = IterMut<'a, T>
    where
        Self: 'a;
    fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a> {
        SinglyLinkedList::iter_mut(self)
    }
}

impl<T> Drainable for SinglyLinkedList<T> {
    type Item = T;
    type Drain<'a> = Drain<'a, T>
    where
        Self: 'a;
    fn drain<'a>(&'a mut self) -> Self::Drain<'a> {
        SinglyLinkedList::drain(self)
    }
}
