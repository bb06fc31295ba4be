//! Providers for off-chain batch payload data.
//!
//! Inbox submissions either carry their payload inline or point into an
//! external object store. This crate exposes the [`DaProvider`] trait for the
//! object store collaborator and the [`PayloadResolver`] that turns a
//! submission into the final payload bytes.

pub use da::{DaProvider, HttpObjectStore, MockDaProvider, ObjectStoreConfig, ObjectStoreOptions};
mod da;

pub use error::DaProviderError;
mod error;

pub use payload::{PayloadResolver, ResolvedPayload};
mod payload;
