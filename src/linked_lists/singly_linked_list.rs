use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Display, Formatter},
    iter::{Extend, FromIterator},
    mem,
};

use log::{debug, trace};

use crate::error::ListError;
use crate::traits::adt::ListAdt;

mod iters;
pub use iters::*;

type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// A singly linked list that owns its nodes through a chain of boxes.
///
/// The list keeps no tail pointer, so anything touching the back walks the
/// chain. The element count is tracked alongside the head.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

fn fail<R>(op: &str, err: ListError) -> Result<R, ListError> {
    debug!("{op} failed: {err}");
    Err(err)
}

/// Detaches the node held by `link`, splicing its successor into its place.
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let SinglyLinkedListNode { value, next } = *node;
    *link = next;
    Some(value)
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element at the end of the list
    pub fn add(&mut self, item: T) {
        let slot = self.tail_link();
        *slot = Some(Box::new(SinglyLinkedListNode {
            value: item,
            next: None,
        }));
        self.len += 1;
        trace!("add: appended, len {}", self.len);
    }

    pub fn add_last(&mut self, item: T) {
        self.add(item)
    }

    /// Inserts an element at the beginning of the list
    pub fn add_first(&mut self, item: T) {
        let node = SinglyLinkedListNode {
            value: item,
            next: self.head.take(),
        };
        self.head = Some(Box::new(node));
        self.len += 1;
        trace!("add_first: prepended, len {}", self.len);
    }

    /// Returns the element at `index`, counting from the head.
    ///
    /// Negative indices and indices past the end fail with
    /// [`ListError::IndexOutOfRange`].
    pub fn get_value(&self, index: isize) -> Result<&T, ListError> {
        match usize::try_from(index).ok().and_then(|i| self.get(i)) {
            Some(value) => Ok(value),
            None => fail(
                "get_value",
                ListError::IndexOutOfRange {
                    index,
                    len: self.len,
                },
            ),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.iter().nth(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.iter_mut().nth(index)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Drops every node and leaves the list empty.
    pub fn clear(&mut self) {
        self.drop_chain();
        self.len = 0;
        trace!("clear: list emptied");
    }

    pub fn remove_first(&mut self) -> Result<T, ListError> {
        match self.pop_front() {
            Some(value) => {
                trace!("remove_first: len {}", self.len);
                Ok(value)
            }
            None => fail("remove_first", ListError::EmptyCollection),
        }
    }

    pub fn remove_last(&mut self) -> Result<T, ListError> {
        // stop on the link holding the node without a successor
        let mut current = &mut self.head;
        while current.as_ref().is_some_and(|node| node.next.is_some()) {
            if let Some(node) = current {
                current = &mut node.next;
            }
        }
        match unlink(current) {
            Some(value) => {
                self.len -= 1;
                trace!("remove_last: len {}", self.len);
                Ok(value)
            }
            None => fail("remove_last", ListError::EmptyCollection),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            len: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: self.head.as_deref_mut(),
            len: self.len,
        }
    }

    /// Removes elements from the front as the iterator is advanced.
    ///
    /// Elements the iterator never reached stay in the list.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { list: self }
    }

    fn pop_front(&mut self) -> Option<T> {
        let value = unlink(&mut self.head)?;
        self.len -= 1;
        Some(value)
    }

    // unlink one node at a time so a long chain does not recurse in drop
    fn drop_chain(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut current = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        current
    }

    /// Find by will only return Some if the inner option is also Some
    fn find_link_mut_by<F: Fn(&T) -> bool>(&mut self, f: F) -> Option<&mut Link<T>> {
        let mut current = &mut self.head;
        loop {
            match current {
                None => return None,
                Some(node) if (f)(&node.value) => return Some(current),
                Some(node) => current = &mut node.next,
            }
        }
    }

    fn remove_by<F: Fn(&T) -> bool>(&mut self, f: F) -> Option<T> {
        let link = self.find_link_mut_by(f)?;
        let value = unlink(link)?;
        self.len -= 1;
        Some(value)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Overwrites the first element equal to `old_item` and hands back the
    /// value it held.
    pub fn replace(&mut self, old_item: &T, new_item: T) -> Result<T, ListError> {
        match self.iter_mut().find(|value| **value == *old_item) {
            Some(slot) => Ok(mem::replace(slot, new_item)),
            None => fail("replace", ListError::ElementNotFound),
        }
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.iter().position(|value| value == item)
    }

    /// Position of the first element equal to `item`, or `-1` when absent.
    pub fn index_of(&self, item: &T) -> isize {
        self.position(item).map_or(-1, |i| i as isize)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item) != -1
    }

    /// Removes the first element equal to `item`.
    pub fn remove(&mut self, item: &T) -> Result<T, ListError> {
        if self.head.is_none() {
            return fail("remove", ListError::EmptyCollection);
        }
        match self.remove_by(|value| value == item) {
            Some(value) => {
                trace!("remove: len {}", self.len);
                Ok(value)
            }
            None => fail("remove", ListError::ElementNotFound),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.drop_chain();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList {{ length: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem}")?
        }
        for elem in iter {
            write!(f, ", {elem}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

/// Appends in iteration order with a single walk to the tail.
impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_link();
        let mut added = 0;
        for value in iter {
            let node = tail.insert(Box::new(SinglyLinkedListNode { value, next: None }));
            tail = &mut node.next;
            added += 1;
        }
        self.len += added;
        trace!("extend: appended {added}, len {}", self.len);
    }
}

impl<T: PartialEq> ListAdt<T> for SinglyLinkedList<T> {
    fn add(&mut self, item: T) {
        SinglyLinkedList::add(self, item)
    }
    fn add_first(&mut self, item: T) {
        SinglyLinkedList::add_first(self, item)
    }
    fn replace(&mut self, old_item: &T, new_item: T) -> Result<T, ListError> {
        SinglyLinkedList::replace(self, old_item, new_item)
    }
    fn count(&self) -> usize {
        SinglyLinkedList::count(self)
    }
    fn get_value(&self, index: isize) -> Result<&T, ListError> {
        SinglyLinkedList::get_value(self, index)
    }
    fn index_of(&self, item: &T) -> isize {
        SinglyLinkedList::index_of(self, item)
    }
    fn clear(&mut self) {
        SinglyLinkedList::clear(self)
    }
    fn remove(&mut self, item: &T) -> Result<T, ListError> {
        SinglyLinkedList::remove(self, item)
    }
    fn remove_first(&mut self) -> Result<T, ListError> {
        SinglyLinkedList::remove_first(self)
    }
    fn remove_last(&mut self) -> Result<T, ListError> {
        SinglyLinkedList::remove_last(self)
    }
}
