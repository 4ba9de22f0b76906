//! Domain logic for the notekeep backend.
//!
//! Everything in this crate is pure (no I/O) so it can be exercised by plain
//! unit tests and shared between the repository and HTTP layers.

pub mod category_tree;
pub mod error;
pub mod patch;
pub mod search;
pub mod tags;
pub mod types;
pub mod validation;
