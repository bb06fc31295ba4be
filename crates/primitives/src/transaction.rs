use crate::SeqSignature;

use alloy_primitives::{Address, Bytes, U256};

/// A decoded L2 transaction belonging to a block entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    /// The global index of the transaction.
    pub index: u64,
    /// The index of the batch the transaction belongs to.
    pub batch_index: u64,
    /// The L1 block number carried by the enclosing block context.
    pub block_number: u64,
    /// The timestamp of the enclosing block.
    pub timestamp: u64,
    /// The gas limit recorded on the entry.
    pub gas_limit: u64,
    /// The target recorded on the entry.
    pub target: Address,
    /// The raw transaction bytes. Empty for queue-origin transactions.
    pub data: Bytes,
    /// The transaction value.
    pub value: U256,
    /// Whether the transaction is confirmed on the L1.
    pub confirmed: bool,
    /// The origin of the transaction with its variant-specific fields.
    pub origin: TransactionOrigin,
}

impl TransactionEntry {
    /// Returns the queue index if the transaction is queue-origin.
    pub const fn queue_index(&self) -> Option<u64> {
        self.origin.queue_index()
    }
}

/// The origin of a transaction inside a batch.
///
/// Sequencer-relayed transactions carry a decoded payload and an optional
/// normalized signature, queue-origin transactions carry the L1 origin address
/// and their queue index. The variants are mutually exclusive so that a
/// queue-origin transaction can never hold a decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionOrigin {
    /// The transaction was signed and submitted directly to the sequencer.
    Sequencer {
        /// The decoded signed transaction.
        decoded: DecodedTransaction,
        /// The normalized sequencer signature, [`None`] when unset.
        signature: Option<SeqSignature>,
    },
    /// The transaction was deposited via the L1 contract queue.
    Queue {
        /// The L1 origin address of the deposit.
        origin: Address,
        /// The index of the transaction in the L1 queue.
        queue_index: u64,
    },
}

impl TransactionOrigin {
    /// Returns the queue index for the queue-origin variant.
    pub const fn queue_index(&self) -> Option<u64> {
        match self {
            Self::Sequencer { .. } => None,
            Self::Queue { queue_index, .. } => Some(*queue_index),
        }
    }

    /// Returns the canonical tag for the origin, `sequencer` or `l1`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequencer { .. } => "sequencer",
            Self::Queue { .. } => "l1",
        }
    }
}

/// The decoded form of a sequencer-relayed signed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTransaction {
    /// The transaction nonce.
    pub nonce: u64,
    /// The transaction gas price.
    pub gas_price: u128,
    /// The transaction gas limit.
    pub gas_limit: u64,
    /// The transaction value.
    pub value: U256,
    /// The transaction target, [`None`] for contract creations.
    pub target: Option<Address>,
    /// The transaction input data.
    pub data: Bytes,
    /// The raw signature components.
    pub signature: TxSignature,
}

/// The raw signature components of a decoded transaction. The recovery
/// parameter is interpreted relative to the L2 chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSignature {
    /// The signature recovery parameter.
    pub v: u64,
    /// The signature r value.
    pub r: U256,
    /// The signature s value.
    pub s: U256,
}
