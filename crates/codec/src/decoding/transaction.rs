use super::{normalize_signature, BatchDecodingContext, BlockContext, Reader};
use crate::DecodingError;

use alloy_consensus::{transaction::RlpEcdsaDecodableTx, TxLegacy};
use alloy_primitives::{Address, Bytes, U256};
use inbox_primitives::{DecodedTransaction, TransactionEntry, TransactionOrigin, TxSignature};

/// The type tag of a sequencer-relayed transaction record. Any other tag
/// marks a queue-origin record.
const SEQUENCER_TX_TYPE: u64 = 0;

/// Decodes a single transaction record from the reader.
///
/// Sequencer records carry a length-prefixed signed transaction and a
/// length-prefixed raw signature blob. Queue records carry a 20 byte L1
/// origin address and a 16 byte queue index.
pub(crate) fn decode_transaction(
    reader: &mut Reader<'_>,
    block: &BlockContext,
    index: u64,
    cx: &BatchDecodingContext,
) -> Result<TransactionEntry, DecodingError> {
    let tx_type = reader.read_uint(1)?;

    let (data, value, origin) = if tx_type == SEQUENCER_TX_TYPE {
        let tx_data_len = reader.read_uint(3)? as usize;
        let tx_data = reader.read_bytes(tx_data_len)?;
        let decoded = decode_sequencer_transaction(tx_data, cx)?;

        let sign_len = reader.read_uint(3)? as usize;
        let signature =
            if sign_len > 0 { Some(normalize_signature(reader.read_bytes(sign_len)?)) } else { None };

        (
            Bytes::copy_from_slice(tx_data),
            decoded.value,
            TransactionOrigin::Sequencer { decoded, signature },
        )
    } else {
        let origin = Address::from_slice(reader.read_bytes(20)?);
        let queue_index = reader.read_wide_uint(16)?;
        (Bytes::new(), U256::ZERO, TransactionOrigin::Queue { origin, queue_index })
    };

    Ok(TransactionEntry {
        index,
        batch_index: cx.batch_index,
        block_number: block.number,
        timestamp: block.timestamp,
        gas_limit: 0,
        target: Address::ZERO,
        data,
        value,
        confirmed: true,
        origin,
    })
}

/// Decodes the embedded signed legacy transaction, interpreting the recovery
/// parameter relative to the configured L2 chain id.
fn decode_sequencer_transaction(
    bytes: &[u8],
    cx: &BatchDecodingContext,
) -> Result<DecodedTransaction, DecodingError> {
    let signed = TxLegacy::rlp_decode_signed(&mut &bytes[..])
        .map_err(|source| DecodingError::InvalidTransaction { batch_index: cx.batch_index, source })?;
    let (tx, signature, _) = signed.into_parts();

    if let Some(chain_id) = tx.chain_id {
        if chain_id != cx.l2_chain_id {
            return Err(DecodingError::UnexpectedChainId {
                batch_index: cx.batch_index,
                chain_id,
                expected: cx.l2_chain_id,
            })
        }
    }

    Ok(DecodedTransaction {
        nonce: tx.nonce,
        gas_price: tx.gas_price,
        gas_limit: tx.gas_limit,
        value: tx.value,
        target: tx.to.to().copied(),
        data: tx.input,
        signature: TxSignature { v: signature.v() as u64, r: signature.r(), s: signature.s() },
    })
}
