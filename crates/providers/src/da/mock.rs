use crate::{DaProvider, DaProviderError};

use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// A mocked object store serving objects from memory.
#[derive(Debug, Clone, Default)]
pub struct MockDaProvider {
    objects: Arc<Mutex<HashMap<String, String>>>,
}

impl MockDaProvider {
    /// Stores the provided hex-encoded object under the key.
    pub fn insert_object(&self, key: impl Into<String>, object: impl Into<String>) {
        self.objects.lock().insert(key.into(), object.into());
    }
}

#[async_trait::async_trait]
impl DaProvider for MockDaProvider {
    async fn read_object(
        &self,
        key: &str,
        _retries: usize,
    ) -> Result<Option<String>, DaProviderError> {
        Ok(self.objects.lock().get(key).cloned())
    }
}
