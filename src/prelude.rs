pub use crate::error::ListError;
pub use crate::linked_lists::SinglyLinkedList;
pub use crate::traits::adt::ListAdt;
pub use crate::traits::iter::{Drainable, Iterable, IterableMut};
