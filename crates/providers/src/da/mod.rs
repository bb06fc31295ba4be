//! Exposes the [`DaProvider`] trait allowing to retrieve off-chain batch
//! payloads.

mod client;
pub use client::{HttpObjectStore, ObjectStoreConfig, ObjectStoreOptions};

mod mock;
pub use mock::MockDaProvider;

use crate::DaProviderError;

/// An instance of the trait can be used to fetch off-chain payload objects.
#[async_trait::async_trait]
#[auto_impl::auto_impl(Arc, &)]
pub trait DaProvider: Send + Sync {
    /// Returns the hex-encoded object stored under the provided key, retrying
    /// failed reads up to `retries` times. Returns [`None`] if the object does
    /// not exist.
    async fn read_object(&self, key: &str, retries: usize)
        -> Result<Option<String>, DaProviderError>;
}
