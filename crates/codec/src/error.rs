use alloy_primitives::B256;

/// An error occurring during the decoding. All variants indicate a malformed
/// or unexpected submission and are not retryable.
#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// The calldata is shorter than the fixed submission header.
    #[error("calldata of inbox transaction {tx_hash} is invalid for decoding: length {len} < 70")]
    CalldataTooShort {
        /// The hash of the inbox transaction.
        tx_hash: B256,
        /// The calldata length.
        len: usize,
    },
    /// The payload ended mid-record.
    #[error("unexpected end of batch payload")]
    Eof,
    /// The total elements field of the header is zero.
    #[error("total elements field is zero in batch {batch_index}")]
    InvalidTotalElements {
        /// The index of the batch.
        batch_index: u64,
    },
    /// A wide integer field does not fit a u64.
    #[error("integer field overflows u64")]
    ValueOverflow,
    /// A sequencer transaction failed to decode.
    #[error("invalid sequencer transaction in batch {batch_index}: {source}")]
    InvalidTransaction {
        /// The index of the batch.
        batch_index: u64,
        /// The underlying RLP error.
        source: alloy_rlp::Error,
    },
    /// A sequencer transaction was signed for an unexpected chain.
    #[error("sequencer transaction in batch {batch_index} signed for chain {chain_id}, expected {expected}")]
    UnexpectedChainId {
        /// The index of the batch.
        batch_index: u64,
        /// The chain id recovered from the signature.
        chain_id: u64,
        /// The configured L2 chain id.
        expected: u64,
    },
}
