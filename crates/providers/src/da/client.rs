use crate::{DaProvider, DaProviderError};

use reqwest::Client;

/// Raw object store settings. All fields are required together when a
/// submission uses off-chain data availability.
#[derive(Debug, Clone, Default)]
pub struct ObjectStoreOptions {
    /// The object store endpoint.
    pub endpoint: Option<String>,
    /// The object store port.
    pub port: Option<u16>,
    /// Whether to use SSL for object store connections.
    pub use_ssl: bool,
    /// The bucket holding the batch payloads.
    pub bucket: Option<String>,
    /// The access key for the object store.
    pub access_key: Option<String>,
    /// The secret key for the object store.
    pub secret_key: Option<String>,
}

impl ObjectStoreOptions {
    /// Validates the options into an [`ObjectStoreConfig`], failing with
    /// [`DaProviderError::MissingConfiguration`] if any required setting is
    /// absent.
    pub fn build(self) -> Result<ObjectStoreConfig, DaProviderError> {
        match (self.endpoint, self.port, self.bucket, self.access_key, self.secret_key) {
            (Some(endpoint), Some(port), Some(bucket), Some(access_key), Some(secret_key)) => {
                Ok(ObjectStoreConfig {
                    endpoint,
                    port,
                    use_ssl: self.use_ssl,
                    bucket,
                    access_key,
                    secret_key,
                })
            }
            _ => Err(DaProviderError::MissingConfiguration),
        }
    }
}

/// Validated connection settings for the object store.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// The object store endpoint.
    pub endpoint: String,
    /// The object store port.
    pub port: u16,
    /// Whether to use SSL for object store connections.
    pub use_ssl: bool,
    /// The bucket holding the batch payloads.
    pub bucket: String,
    /// The access key for the object store.
    pub access_key: String,
    /// The secret key for the object store.
    pub secret_key: String,
}

/// An implementation of a payload object provider over an S3 compatible HTTP
/// object store.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    config: ObjectStoreConfig,
    client: Client,
}

impl HttpObjectStore {
    /// Creates a new [`HttpObjectStore`] from the provided config.
    pub fn new(config: ObjectStoreConfig) -> Self {
        Self { config, client: Client::new() }
    }

    fn object_url(&self, key: &str) -> String {
        let scheme = if self.config.use_ssl { "https" } else { "http" };
        format!(
            "{scheme}://{}:{}/{}/{key}",
            self.config.endpoint, self.config.port, self.config.bucket
        )
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DaProviderError> {
        let response = self
            .client
            .get(self.object_url(key))
            .basic_auth(&self.config.access_key, Some(&self.config.secret_key))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(Some(response.text().await?))
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            Err(DaProviderError::UnexpectedStatus(status.as_u16()))
        }
    }
}

#[async_trait::async_trait]
impl DaProvider for HttpObjectStore {
    async fn read_object(
        &self,
        key: &str,
        retries: usize,
    ) -> Result<Option<String>, DaProviderError> {
        let mut attempt = 0;
        loop {
            match self.get(key).await {
                Ok(object) => return Ok(object),
                Err(err) if attempt < retries => {
                    attempt += 1;
                    tracing::debug!(target: "inbox::providers", %key, attempt, %err, "object store read failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ObjectStoreOptions {
        ObjectStoreOptions {
            endpoint: Some("object-store.local".to_string()),
            port: Some(9000),
            use_ssl: false,
            bucket: Some("batches".to_string()),
            access_key: Some("access".to_string()),
            secret_key: Some("secret".to_string()),
        }
    }

    #[test]
    fn test_should_build_complete_options() -> eyre::Result<()> {
        let config = options().build()?;

        assert_eq!(config.endpoint, "object-store.local");
        assert_eq!(config.port, 9000);
        assert_eq!(config.bucket, "batches");

        Ok(())
    }

    #[test]
    fn test_should_reject_any_missing_setting() {
        let incomplete = [
            ObjectStoreOptions { endpoint: None, ..options() },
            ObjectStoreOptions { port: None, ..options() },
            ObjectStoreOptions { bucket: None, ..options() },
            ObjectStoreOptions { access_key: None, ..options() },
            ObjectStoreOptions { secret_key: None, ..options() },
        ];

        for options in incomplete {
            let err = options.build().unwrap_err();
            assert!(matches!(err, DaProviderError::MissingConfiguration));
        }
    }

    #[test]
    fn test_should_format_object_url() -> eyre::Result<()> {
        let store = HttpObjectStore::new(options().build()?);
        assert_eq!(store.object_url("abcd"), "http://object-store.local:9000/batches/abcd");

        let store = HttpObjectStore::new(ObjectStoreOptions { use_ssl: true, ..options() }.build()?);
        assert_eq!(store.object_url("abcd"), "https://object-store.local:9000/batches/abcd");

        Ok(())
    }
}
