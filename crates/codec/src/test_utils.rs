//! Test helpers for synthesizing inbox submissions and batch payloads.

use alloy_consensus::{transaction::RlpEcdsaEncodableTx, TxLegacy};
use alloy_primitives::{Address, Bytes, Signature, TxKind, B256, U256};
use inbox_primitives::BatchSubmission;
use std::sync::Arc;

/// Encodes inbox calldata with the fixed 70 byte header followed by the
/// provided content.
pub fn encode_calldata(
    da: u8,
    compress_type: u8,
    batch_index: u64,
    total_elements: u64,
    batch_size: u32,
    content: &[u8],
) -> Bytes {
    let mut out = vec![da, compress_type];
    out.extend_from_slice(&U256::from(batch_index).to_be_bytes::<32>());
    out.extend_from_slice(&U256::from(total_elements).to_be_bytes::<32>());
    out.extend_from_slice(&batch_size.to_be_bytes());
    out.extend_from_slice(content);
    out.into()
}

/// Encodes a block context followed by the provided pre-encoded transaction
/// records.
pub fn encode_block_context(
    timestamp: u64,
    l1_block_number: u64,
    transactions: &[Vec<u8>],
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(transactions.len() as u32).to_be_bytes()[1..]);
    out.extend_from_slice(&timestamp.to_be_bytes()[3..]);
    out.extend_from_slice(&U256::from(l1_block_number).to_be_bytes::<32>());
    for tx in transactions {
        out.extend_from_slice(tx);
    }
    out
}

/// Encodes a sequencer transaction record: type tag 0, length-prefixed signed
/// transaction bytes and a length-prefixed raw signature blob.
pub fn encode_sequencer_tx(tx_data: &[u8], signature: Option<&[u8]>) -> Vec<u8> {
    let mut out = vec![0u8];
    out.extend_from_slice(&(tx_data.len() as u32).to_be_bytes()[1..]);
    out.extend_from_slice(tx_data);
    let signature = signature.unwrap_or_default();
    out.extend_from_slice(&(signature.len() as u32).to_be_bytes()[1..]);
    out.extend_from_slice(signature);
    out
}

/// Encodes a queue transaction record: nonzero type tag, origin address and
/// queue index.
pub fn encode_queue_tx(origin: Address, queue_index: u64) -> Vec<u8> {
    let mut out = vec![1u8];
    out.extend_from_slice(origin.as_slice());
    out.extend_from_slice(&(queue_index as u128).to_be_bytes());
    out
}

/// Returns the RLP encoding of a signed legacy transaction replay-protected
/// for the provided chain id.
pub fn signed_legacy_tx(chain_id: u64) -> Vec<u8> {
    let tx = TxLegacy {
        chain_id: Some(chain_id),
        nonce: 1,
        gas_price: 1_000_000_000,
        gas_limit: 21_000,
        to: TxKind::Call(Address::repeat_byte(0x11)),
        value: U256::from(10),
        input: Bytes::new(),
    };
    let signature = Signature::new(U256::from(1), U256::from(2), false);
    let mut out = Vec::new();
    tx.rlp_encode_signed(&signature, &mut out);
    out
}

/// Returns a submission around the provided calldata with fixed L1 metadata.
pub fn submission_with_calldata(calldata: Bytes) -> BatchSubmission {
    BatchSubmission {
        tx_hash: B256::repeat_byte(0x01),
        sender: Address::repeat_byte(0x02),
        calldata: Arc::new(calldata),
        block_number: 18_000_000,
        block_timestamp: 1_700_000_000,
        parent_hash: B256::repeat_byte(0x03),
    }
}
