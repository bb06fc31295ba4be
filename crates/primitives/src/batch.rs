use std::sync::Arc;

use alloy_primitives::{Address, BlockNumber, Bytes, B256};

/// An observed sequencer batch submission on the L1.
///
/// Carries the raw inbox transaction and the L1 block it was included in. All
/// data remains in its raw serialized form and is decoded downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSubmission {
    /// The hash of the inbox transaction.
    pub tx_hash: B256,
    /// The sender of the inbox transaction.
    pub sender: Address,
    /// The inbox transaction calldata.
    pub calldata: Arc<Bytes>,
    /// The L1 block number the submission was included at.
    pub block_number: BlockNumber,
    /// The timestamp of the L1 block.
    pub block_timestamp: u64,
    /// The parent hash of the L1 block.
    pub parent_hash: B256,
}

/// Batch metadata extracted from a submission ahead of the full payload
/// decode. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchExtraData {
    /// The timestamp of the L1 block containing the submission.
    pub timestamp: u64,
    /// The L1 block number of the submission.
    pub block_number: BlockNumber,
    /// The address that submitted the batch.
    pub submitter: Address,
    /// The hash of the inbox transaction.
    pub l1_transaction_hash: B256,
    /// The raw calldata of the inbox transaction.
    pub l1_transaction_data: Arc<Bytes>,
    /// The fixed gas limit recorded for sequencer submissions.
    pub gas_limit: u64,
    /// The total count of elements before this batch.
    pub prev_total_elements: u64,
    /// The index of the batch.
    pub batch_index: u64,
    /// The count of elements in the batch.
    pub batch_size: u64,
    /// The batch root. Derived from the L1 parent hash as a placeholder
    /// identifier, not a verified commitment.
    pub batch_root: B256,
    /// Free-form extra data attached to the batch.
    pub extra_data: String,
}

/// The canonical batch record persisted to the index store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBatchEntry {
    /// The index of the batch.
    pub index: u64,
    /// The batch root.
    pub root: B256,
    /// The count of elements in the batch.
    pub size: u64,
    /// The total count of elements before this batch.
    pub prev_total_elements: u64,
    /// Free-form extra data attached to the batch.
    pub extra_data: String,
    /// The L1 block number of the submission.
    pub block_number: BlockNumber,
    /// The timestamp of the L1 block containing the submission.
    pub timestamp: u64,
    /// The address that submitted the batch.
    pub submitter: Address,
    /// The hash of the inbox transaction.
    pub l1_transaction_hash: B256,
}

impl From<&BatchExtraData> for TransactionBatchEntry {
    fn from(extra_data: &BatchExtraData) -> Self {
        Self {
            index: extra_data.batch_index,
            root: extra_data.batch_root,
            size: extra_data.batch_size,
            prev_total_elements: extra_data.prev_total_elements,
            extra_data: extra_data.extra_data.clone(),
            block_number: extra_data.block_number,
            timestamp: extra_data.timestamp,
            submitter: extra_data.submitter,
            l1_transaction_hash: extra_data.l1_transaction_hash,
        }
    }
}
