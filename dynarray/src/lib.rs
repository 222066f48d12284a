//! Contiguous growable array with amortized O(1) append and explicit
//! capacity management.
//!
//! [`DynamicArray`] owns a single fixed-size backing store and replaces it
//! whenever its [`ResizePolicy`] asks for a different capacity: the store
//! doubles when full and halves once fewer than a quarter of its slots are
//! used.
//!
//! The array is not internally synchronized. Sharing it between threads needs
//! an external lock around the whole container.

pub mod array;
pub mod error;
pub mod iter;
pub mod policy;
pub mod stats;
mod store;

pub use array::DynamicArray;
pub use error::{ArrayError, Result};
pub use policy::{CapacityFloor, ResizePolicy};
pub use stats::ResizeStats;
