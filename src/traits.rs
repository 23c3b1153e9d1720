pub mod adt;
pub mod iter;
