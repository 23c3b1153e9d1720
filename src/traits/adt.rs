//! Abstract Data Type Traits

use crate::error::ListError;

/// The list abstract data type.
///
/// Positions count from zero at the head. Lookups that miss answer with a
/// sentinel (`-1` from [`index_of`](ListAdt::index_of), `false` from
/// [`contains`](ListAdt::contains)) while [`replace`](ListAdt::replace) and
/// [`remove`](ListAdt::remove) fail with [`ListError::ElementNotFound`].
///
/// A failed operation leaves the list exactly as it was.
pub trait ListAdt<T: PartialEq> {
    /// Appends `item` after the last element.
    fn add(&mut self, item: T);

    fn add_last(&mut self, item: T) {
        self.add(item)
    }

    /// Inserts `item` before the first element.
    fn add_first(&mut self, item: T);

    /// Overwrites the first element equal to `old_item`, returning the value it held.
    fn replace(&mut self, old_item: &T, new_item: T) -> Result<T, ListError>;

    fn count(&self) -> usize;

    /// Fails with [`ListError::IndexOutOfRange`] when `index < 0` or `index >= count()`.
    fn get_value(&self, index: isize) -> Result<&T, ListError>;

    /// Position of the first element equal to `item`, or `-1`.
    fn index_of(&self, item: &T) -> isize;

    fn contains(&self, item: &T) -> bool {
        self.index_of(item) != -1
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn clear(&mut self);

    /// Removes the first element equal to `item`.
    ///
    /// An empty list fails with [`ListError::EmptyCollection`] before any search.
    fn remove(&mut self, item: &T) -> Result<T, ListError>;

    fn remove_first(&mut self) -> Result<T, ListError>;

    fn remove_last(&mut self) -> Result<T, ListError>;
}

mod impls {
    use super::*;
    use alloc::vec::Vec;

    impl<T: PartialEq> ListAdt<T> for Vec<T> {
        fn add(&mut self, item: T) {
            self.push(item);
        }

        fn add_first(&mut self, item: T) {
            self.insert(0, item);
        }

        fn replace(&mut self, old_item: &T, new_item: T) -> Result<T, ListError> {
            let slot = self
                .iter_mut()
                .find(|value| **value == *old_item)
                .ok_or(ListError::ElementNotFound)?;
            Ok(core::mem::replace(slot, new_item))
        }

        fn count(&self) -> usize {
            self.len()
        }

        fn get_value(&self, index: isize) -> Result<&T, ListError> {
            usize::try_from(index)
                .ok()
                .and_then(|i| self.get(i))
                .ok_or(ListError::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
        }

        fn index_of(&self, item: &T) -> isize {
            self.iter()
                .position(|value| value == item)
                .map_or(-1, |i| i as isize)
        }

        fn clear(&mut self) {
            Vec::clear(self)
        }

        fn remove(&mut self, item: &T) -> Result<T, ListError> {
            if Vec::is_empty(self) {
                return Err(ListError::EmptyCollection);
            }
            let idx = self
                .iter()
                .position(|value| value == item)
                .ok_or(ListError::ElementNotFound)?;
            Ok(Vec::remove(self, idx))
        }

        fn remove_first(&mut self) -> Result<T, ListError> {
            if Vec::is_empty(self) {
                return Err(ListError::EmptyCollection);
            }
            Ok(Vec::remove(self, 0))
        }

        fn remove_last(&mut self) -> Result<T, ListError> {
            self.pop().ok_or(ListError::EmptyCollection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinglyLinkedList;

    // runs the same script against any implementation
    fn walkthrough<L: ListAdt<i32> + Default>() {
        let mut lst = L::default();
        assert!(lst.is_empty());
        assert_eq!(lst.index_of(&7), -1);
        assert!(!lst.contains(&7));
        assert_eq!(lst.remove(&7), Err(ListError::EmptyCollection));

        lst.add_last(1);
        lst.add_last(2);
        lst.add_first(0);
        assert_eq!(lst.count(), 3);
        assert_eq!(lst.index_of(&2), 2);
        assert_eq!(lst.get_value(0), Ok(&0));
        assert_eq!(
            lst.get_value(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );

        assert_eq!(lst.remove(&1), Ok(1));
        assert_eq!(lst.remove(&1), Err(ListError::ElementNotFound));
        assert_eq!(lst.count(), 2);
        assert_eq!(lst.remove_last(), Ok(2));
        assert_eq!(lst.get_value(0), Ok(&0));

        assert_eq!(lst.replace(&0, 5), Ok(0));
        assert_eq!(lst.replace(&0, 6), Err(ListError::ElementNotFound));

        lst.clear();
        assert_eq!(lst.count(), 0);
        assert!(lst.is_empty());
        assert_eq!(lst.remove_first(), Err(ListError::EmptyCollection));
        assert_eq!(lst.remove_last(), Err(ListError::EmptyCollection));
    }

    #[test]
    fn walkthrough_linked_list() {
        walkthrough::<SinglyLinkedList<i32>>();
    }

    #[test]
    fn walkthrough_vec() {
        walkthrough::<Vec<i32>>();
    }
}
