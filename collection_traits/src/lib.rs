#![forbid(clippy::unconditional_recursion)]

pub mod edit;
pub mod has_length;
pub mod vec;

pub use edit::ListEdit;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Containers that pre-allocate storage beyond their length
pub trait HasCapacity: HasLength {
    fn capacity(&self) -> usize;
}

/// Index-addressed sequence where out-of-range edits are reported through
/// the return value instead of panicking
pub trait Positional: HasLength {
    type Item;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Overwrites the element at `index`, returns `false` if there is none
    fn set(&mut self, index: usize, item: Self::Item) -> bool;

    fn append(&mut self, item: Self::Item);

    /// Inserts at `index`, which may be equal to the length
    fn insert(&mut self, index: usize, item: Self::Item) -> bool;

    fn delete(&mut self, index: usize) -> Option<Self::Item>;

    fn clear(&mut self);
}
