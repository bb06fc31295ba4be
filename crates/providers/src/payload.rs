use crate::{DaProvider, DaProviderError};

use alloy_primitives::hex;
use inbox_codec::CalldataFrame;
use inbox_primitives::BatchSubmission;

/// The data availability tag marking an off-chain payload pointer.
const OFF_CHAIN_DA: u8 = 1;

/// The compression tag marking a zlib-deflated payload.
const ZLIB_COMPRESS_TYPE: u8 = 11;

/// The read retry count handed to the object store collaborator.
const DA_READ_RETRIES: usize = 2;

/// The resolved payload of a batch submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPayload {
    /// The final payload bytes, fetched and inflated as required.
    pub data: Vec<u8>,
    /// The first global block index basis for the batch.
    pub l2_start: u64,
}

/// Resolves the payload bytes for an inbox submission.
///
/// Inline payloads are taken from the calldata directly. Off-chain payloads
/// require an injected [`DaProvider`]: a submission pointing off-chain while
/// no provider is configured fails before any network call.
#[derive(Debug, Default)]
pub struct PayloadResolver<DA> {
    da_provider: Option<DA>,
}

impl<DA: DaProvider> PayloadResolver<DA> {
    /// Returns a new resolver around the optional object store provider.
    pub const fn new(da_provider: Option<DA>) -> Self {
        Self { da_provider }
    }

    /// Resolves the final payload bytes for the provided submission.
    pub async fn resolve(
        &self,
        submission: &BatchSubmission,
    ) -> Result<ResolvedPayload, DaProviderError> {
        let frame = CalldataFrame::new(&submission.calldata, submission.tx_hash)?;
        let l2_start = frame.l2_start()?;

        let mut data = frame.content().to_vec();
        if frame.da() == OFF_CHAIN_DA {
            let key = hex::encode(frame.content());
            let provider =
                self.da_provider.as_ref().ok_or(DaProviderError::MissingConfiguration)?;

            tracing::debug!(target: "inbox::providers", %key, "fetching off-chain batch payload");
            let object = provider
                .read_object(&key, DA_READ_RETRIES)
                .await?
                .filter(|object| !object.is_empty())
                .ok_or_else(|| DaProviderError::Retrieval(key.clone()))?;
            data = hex::decode(&object)?;
        }

        if frame.compress_type() == ZLIB_COMPRESS_TYPE {
            data = miniz_oxide::inflate::decompress_to_vec_zlib(&data)
                .map_err(|err| DaProviderError::Decompression(err.to_string()))?;
        }

        Ok(ResolvedPayload { data, l2_start })
    }
}
