//! A library responsible for indexing sequencer batch inbox submissions.
//!
//! The [`Indexer`] drives one submission through the full pipeline: metadata
//! extraction, payload resolution, the payload decode and finally the storage
//! write protocol with its batch ordering invariant. Processing of one
//! submission is strictly sequential and the indexer holds no state between
//! submissions, callers own the ordering of the feed.

pub use config::IndexerConfig;
mod config;

pub use error::IndexerError;
mod error;

pub use event::IndexerEvent;
mod event;

mod metrics;
use metrics::IndexerMetrics;

use inbox_codec::{decode_blocks, extract_extra_data, BatchDecodingContext};
use inbox_db::DatabaseOperations;
use inbox_primitives::{BatchSubmission, BlockEntry, TransactionBatchEntry};
use inbox_providers::{DaProvider, PayloadResolver};
use std::time::Instant;

/// The indexer is responsible for indexing batches observed on the sequencer
/// inbox.
#[derive(Debug)]
pub struct Indexer<DB, DA> {
    /// The database used to persist the indexed data.
    database: DB,
    /// The payload resolver for off-chain submissions.
    resolver: PayloadResolver<DA>,
    /// The indexer configuration.
    config: IndexerConfig,
    /// The metrics for the indexer.
    metrics: IndexerMetrics,
}

impl<DB: DatabaseOperations, DA: DaProvider> Indexer<DB, DA> {
    /// Creates a new indexer over the provided database and optional object
    /// store provider.
    pub fn new(database: DB, da_provider: Option<DA>, config: IndexerConfig) -> Self {
        Self {
            database,
            resolver: PayloadResolver::new(da_provider),
            config,
            metrics: IndexerMetrics::default(),
        }
    }

    /// Handles a batch submission end to end, returning the indexing outcome.
    pub async fn handle_batch_submission(
        &self,
        submission: &BatchSubmission,
    ) -> Result<IndexerEvent, IndexerError> {
        let now = Instant::now();

        let extra_data = extract_extra_data(submission, self.config.sequencer_gas_limit)
            .map_err(|source| IndexerError::Decoding { tx_hash: submission.tx_hash, source })?;
        let batch_index = extra_data.batch_index;
        tracing::debug!(target: "inbox::indexer", batch_index, tx_hash = ?submission.tx_hash, "handling batch submission");

        let payload = self
            .resolver
            .resolve(submission)
            .await
            .map_err(|source| IndexerError::Payload { batch_index, source })?;

        let cx = BatchDecodingContext {
            batch_index,
            l2_start: payload.l2_start,
            l2_chain_id: self.config.l2_chain_id,
        };
        let blocks = decode_blocks(&payload.data, &cx)
            .map_err(|source| IndexerError::Decoding { tx_hash: submission.tx_hash, source })?;

        let event = self.store_batch((&extra_data).into(), blocks).await?;
        self.metrics.task_duration.record(now.elapsed().as_secs_f64());
        Ok(event)
    }

    /// Applies the storage write protocol for one decoded batch.
    ///
    /// Verifies the predecessor batch exists before any write, then persists
    /// each block at block or transaction granularity depending on the
    /// de-sequencing threshold, records queue index mappings and finally the
    /// batch record itself.
    async fn store_batch(
        &self,
        batch: TransactionBatchEntry,
        blocks: Vec<BlockEntry>,
    ) -> Result<IndexerEvent, IndexerError> {
        if batch.index > 0 &&
            self.database.get_transaction_batch_by_index(batch.index - 1).await?.is_none()
        {
            return Err(IndexerError::MissingPredecessor { index: batch.index })
        }

        let (index, block_count) = (batch.index, blocks.len());
        let mut transaction_count = 0;

        for block in blocks {
            transaction_count += block.transactions.len();
            let queue_mappings: Vec<_> = block
                .transactions
                .iter()
                .filter_map(|tx| tx.queue_index().map(|queue_index| (queue_index, tx.index)))
                .collect();

            let threshold = self.config.de_seq_block;
            if threshold > 0 && block.index + 1 >= threshold {
                tracing::trace!(target: "inbox::indexer", block_index = block.index, "persisting block entry");
                self.database.insert_block_entries(vec![block]).await?;
            } else {
                tracing::trace!(target: "inbox::indexer", block_index = block.index, "persisting transaction entries");
                self.database.insert_transaction_entries(block.transactions).await?;
            }

            for (queue_index, tx_index) in queue_mappings {
                self.database.insert_transaction_index_by_queue_index(queue_index, tx_index).await?;
            }
        }

        self.database.insert_transaction_batch_entries(vec![batch]).await?;
        tracing::info!(target: "inbox::indexer", batch_index = index, blocks = block_count, transactions = transaction_count, "batch indexed");

        Ok(IndexerEvent::BatchIndexed { index, blocks: block_count, transactions: transaction_count })
    }
}
