//! Test utilities for the database crate.

use crate::{DatabaseError, DatabaseOperations};

use inbox_primitives::{BlockEntry, TransactionBatchEntry, TransactionEntry};
use parking_lot::Mutex;
use std::collections::HashMap;

/// An in-memory implementation of [`DatabaseOperations`] for deterministic
/// tests.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    inner: Mutex<MemoryStore>,
}

#[derive(Debug, Default)]
struct MemoryStore {
    batches: HashMap<u64, TransactionBatchEntry>,
    blocks: HashMap<u64, BlockEntry>,
    // transactions of one block share their global index, entries are
    // appended in write order.
    transactions: Vec<TransactionEntry>,
    queue_index: HashMap<u64, u64>,
}

impl MemoryDatabase {
    /// Returns the count of stored batch entries.
    pub fn batch_count(&self) -> usize {
        self.inner.lock().batches.len()
    }

    /// Returns the stored block entry at the provided global index.
    pub fn block(&self, index: u64) -> Option<BlockEntry> {
        self.inner.lock().blocks.get(&index).cloned()
    }

    /// Returns the count of stored block entries.
    pub fn block_count(&self) -> usize {
        self.inner.lock().blocks.len()
    }

    /// Returns the first stored transaction entry at the provided global
    /// index.
    pub fn transaction(&self, index: u64) -> Option<TransactionEntry> {
        self.inner.lock().transactions.iter().find(|tx| tx.index == index).cloned()
    }

    /// Returns the count of stored transaction entries.
    pub fn transaction_count(&self) -> usize {
        self.inner.lock().transactions.len()
    }

    /// Returns the global transaction index recorded for the provided queue
    /// index.
    pub fn transaction_index_by_queue_index(&self, queue_index: u64) -> Option<u64> {
        self.inner.lock().queue_index.get(&queue_index).copied()
    }
}

#[async_trait::async_trait]
impl DatabaseOperations for MemoryDatabase {
    async fn get_transaction_batch_by_index(
        &self,
        index: u64,
    ) -> Result<Option<TransactionBatchEntry>, DatabaseError> {
        Ok(self.inner.lock().batches.get(&index).cloned())
    }

    async fn insert_block_entries(&self, blocks: Vec<BlockEntry>) -> Result<(), DatabaseError> {
        let mut store = self.inner.lock();
        for block in blocks {
            tracing::trace!(target: "inbox::db", block_index = block.index, "Inserting block entry.");
            store.blocks.insert(block.index, block);
        }
        Ok(())
    }

    async fn insert_transaction_entries(
        &self,
        transactions: Vec<TransactionEntry>,
    ) -> Result<(), DatabaseError> {
        let mut store = self.inner.lock();
        for transaction in transactions {
            tracing::trace!(target: "inbox::db", tx_index = transaction.index, origin = transaction.origin.as_str(), "Inserting transaction entry.");
            store.transactions.push(transaction);
        }
        Ok(())
    }

    async fn insert_transaction_index_by_queue_index(
        &self,
        queue_index: u64,
        tx_index: u64,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "inbox::db", queue_index, tx_index, "Inserting queue index mapping.");
        self.inner.lock().queue_index.insert(queue_index, tx_index);
        Ok(())
    }

    async fn insert_transaction_batch_entries(
        &self,
        batches: Vec<TransactionBatchEntry>,
    ) -> Result<(), DatabaseError> {
        let mut store = self.inner.lock();
        for batch in batches {
            tracing::trace!(target: "inbox::db", batch_index = batch.index, "Inserting transaction batch entry.");
            store.batches.insert(batch.index, batch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_database_round_trip() {
        let db = MemoryDatabase::default();

        let batch = TransactionBatchEntry {
            index: 0,
            root: Default::default(),
            size: 1,
            prev_total_elements: 0,
            extra_data: String::new(),
            block_number: 1,
            timestamp: 1,
            submitter: Default::default(),
            l1_transaction_hash: Default::default(),
        };
        db.insert_transaction_batch_entries(vec![batch.clone()]).await.unwrap();

        assert_eq!(db.get_transaction_batch_by_index(0).await.unwrap(), Some(batch));
        assert_eq!(db.get_transaction_batch_by_index(1).await.unwrap(), None);

        db.insert_transaction_index_by_queue_index(9, 42).await.unwrap();
        assert_eq!(db.transaction_index_by_queue_index(9), Some(42));
    }
}
