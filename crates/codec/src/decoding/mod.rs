//! Decoding of the resolved batch payload into block and transaction entries.

mod reader;
pub(crate) use reader::Reader;

mod block_context;
pub(crate) use block_context::BlockContext;

mod transaction;

pub use signature::normalize_signature;
mod signature;

use crate::DecodingError;
use inbox_primitives::BlockEntry;

/// The parameters of a single batch decode.
#[derive(Debug, Clone, Copy)]
pub struct BatchDecodingContext {
    /// The index of the batch being decoded.
    pub batch_index: u64,
    /// The first global block index basis for the batch.
    pub l2_start: u64,
    /// The L2 chain id used for replay protection.
    pub l2_chain_id: u64,
}

/// Decodes the resolved payload into a [`Vec<BlockEntry>`].
///
/// Walks the payload sequentially, one block context per iteration, and stops
/// once the cursor reaches the end of the buffer after a full context. A read
/// past the end anywhere mid-record fails with [`DecodingError::Eof`].
pub fn decode_blocks(
    payload: &[u8],
    cx: &BatchDecodingContext,
) -> Result<Vec<BlockEntry>, DecodingError> {
    let reader = &mut Reader::new(payload);
    let mut blocks = Vec::new();

    loop {
        let context = BlockContext::try_from_reader(reader)?;

        // the upstream derivation offsets the first block index by one.
        let index = (cx.l2_start + blocks.len() as u64).saturating_sub(1);

        let mut transactions = Vec::with_capacity(context.tx_count as usize);
        for _ in 0..context.tx_count {
            transactions.push(transaction::decode_transaction(reader, &context, index, cx)?);
        }
        blocks.push(BlockEntry::new(index, cx.batch_index, context.timestamp, transactions));

        if reader.is_empty() {
            break
        }
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        encode_block_context, encode_queue_tx, encode_sequencer_tx, signed_legacy_tx,
    };

    use alloy_primitives::{Address, U256};
    use inbox_primitives::TransactionOrigin;

    const CONTEXT: BatchDecodingContext =
        BatchDecodingContext { batch_index: 7, l2_start: 100, l2_chain_id: 1088 };

    #[test]
    fn test_should_decode_blocks() -> eyre::Result<()> {
        let tx = encode_sequencer_tx(&signed_legacy_tx(1088), None);
        let mut payload = Vec::new();
        for i in 0..3u64 {
            payload.extend_from_slice(&encode_block_context(
                1_700_000_000 + i,
                18_000_000,
                &[tx.clone(), tx.clone()],
            ));
        }

        let blocks = decode_blocks(&payload, &CONTEXT)?;

        assert_eq!(blocks.len(), 3);
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.index, 99 + i as u64);
            assert_eq!(block.batch_index, 7);
            assert_eq!(block.timestamp, 1_700_000_000 + i as u64);
            assert_eq!(block.transactions.len(), 2);
            assert!(block.confirmed);
            for tx in &block.transactions {
                assert_eq!(tx.index, block.index);
                assert_eq!(tx.block_number, 18_000_000);
                assert!(matches!(tx.origin, TransactionOrigin::Sequencer { .. }));
            }
        }

        Ok(())
    }

    #[test]
    fn test_should_decode_queue_transaction() -> eyre::Result<()> {
        let origin = Address::repeat_byte(0xaa);
        let payload = encode_block_context(1_700_000_000, 42, &[encode_queue_tx(origin, 55)]);

        let blocks = decode_blocks(&payload, &CONTEXT)?;

        let tx = &blocks[0].transactions[0];
        assert_eq!(tx.queue_index(), Some(55));
        assert_eq!(tx.origin.as_str(), "l1");
        assert_eq!(tx.value, U256::ZERO);
        assert!(tx.data.is_empty());
        assert_eq!(
            tx.origin,
            TransactionOrigin::Queue { origin, queue_index: 55 },
        );

        Ok(())
    }

    #[test]
    fn test_should_decode_sequencer_value_and_payload() -> eyre::Result<()> {
        let raw = signed_legacy_tx(1088);
        let payload =
            encode_block_context(1_700_000_000, 42, &[encode_sequencer_tx(&raw, None)]);

        let blocks = decode_blocks(&payload, &CONTEXT)?;

        let tx = &blocks[0].transactions[0];
        assert_eq!(tx.data.as_ref(), raw.as_slice());
        assert_eq!(tx.origin.as_str(), "sequencer");
        let TransactionOrigin::Sequencer { decoded, signature } = &tx.origin else {
            panic!("expected sequencer origin");
        };
        assert_eq!(tx.value, decoded.value);
        assert_eq!(decoded.gas_limit, 21_000);
        assert!(signature.is_none());

        Ok(())
    }

    #[test]
    fn test_should_fail_on_truncated_payload() {
        let tx = encode_sequencer_tx(&signed_legacy_tx(1088), None);
        let mut payload = encode_block_context(1_700_000_000, 42, &[tx]);
        payload.truncate(payload.len() - 1);

        let err = decode_blocks(&payload, &CONTEXT).unwrap_err();
        assert!(matches!(err, DecodingError::Eof));
    }

    #[test]
    fn test_should_fail_on_chain_id_mismatch() {
        let payload = encode_block_context(
            1_700_000_000,
            42,
            &[encode_sequencer_tx(&signed_legacy_tx(5), None)],
        );

        let err = decode_blocks(&payload, &CONTEXT).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::UnexpectedChainId { chain_id: 5, expected: 1088, .. }
        ));
    }
}
