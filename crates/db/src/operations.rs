use crate::DatabaseError;

use inbox_primitives::{BlockEntry, TransactionBatchEntry, TransactionEntry};

/// The [`DatabaseOperations`] trait provides the methods the indexer requires
/// of the backing store.
///
/// Writes issued for one batch are expected to be applied as an atomic unit
/// by the implementation.
#[async_trait::async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait DatabaseOperations: Send + Sync {
    /// Get a [`TransactionBatchEntry`] by its batch index.
    async fn get_transaction_batch_by_index(
        &self,
        index: u64,
    ) -> Result<Option<TransactionBatchEntry>, DatabaseError>;

    /// Insert the provided [`BlockEntry`]s into the store.
    async fn insert_block_entries(&self, blocks: Vec<BlockEntry>) -> Result<(), DatabaseError>;

    /// Insert the provided [`TransactionEntry`]s into the store.
    async fn insert_transaction_entries(
        &self,
        transactions: Vec<TransactionEntry>,
    ) -> Result<(), DatabaseError>;

    /// Record the queue index to global transaction index mapping for a
    /// queue-origin transaction.
    async fn insert_transaction_index_by_queue_index(
        &self,
        queue_index: u64,
        tx_index: u64,
    ) -> Result<(), DatabaseError>;

    /// Insert the provided [`TransactionBatchEntry`]s into the store.
    async fn insert_transaction_batch_entries(
        &self,
        batches: Vec<TransactionBatchEntry>,
    ) -> Result<(), DatabaseError>;
}
