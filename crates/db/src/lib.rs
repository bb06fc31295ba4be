//! The storage interface backing the batch inbox indexer.
//!
//! The backing store itself is an external collaborator, this crate only
//! defines the operations the indexer requires of it, plus an in-memory
//! implementation for tests.

pub use error::DatabaseError;
mod error;

pub use operations::DatabaseOperations;
mod operations;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
