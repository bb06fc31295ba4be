use alloy_primitives::B256;
use inbox_codec::DecodingError;
use inbox_db::DatabaseError;
use inbox_providers::DaProviderError;

/// A type that represents an error that occurred during indexing.
#[derive(Debug, thiserror::Error)]
pub enum IndexerError {
    /// The submission failed to decode. Fatal, indicates a protocol mismatch
    /// or a corrupted submission.
    #[error("failed to decode batch from inbox transaction {tx_hash}: {source}")]
    Decoding {
        /// The hash of the inbox transaction.
        tx_hash: B256,
        /// The underlying decoding error.
        source: DecodingError,
    },
    /// The payload failed to resolve.
    #[error("failed to resolve payload for batch {batch_index}: {source}")]
    Payload {
        /// The index of the batch.
        batch_index: u64,
        /// The underlying resolution error.
        source: DaProviderError,
    },
    /// The preceding batch is missing from the store. Fatal until the
    /// pipeline supplies batches in order.
    #[error("previous batch for batch {index} not found in database")]
    MissingPredecessor {
        /// The index of the batch.
        index: u64,
    },
    /// An error occurred while interacting with the database.
    #[error("indexing failed due to database error: {0}")]
    Database(#[from] DatabaseError),
}
