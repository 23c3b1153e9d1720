#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod linked_lists;
pub mod prelude;
pub mod traits;

pub use error::ListError;
pub use linked_lists::SinglyLinkedList;
