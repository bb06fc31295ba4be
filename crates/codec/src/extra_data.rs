use crate::{frame::CalldataFrame, DecodingError};

use inbox_primitives::{BatchExtraData, BatchSubmission};

/// Extracts the batch-identifying metadata from a submission ahead of the full
/// payload decode.
///
/// Requires calldata strictly longer than the fixed header. The batch root is
/// derived from the L1 parent hash as a placeholder identifier, verification
/// is external. The gas limit is the configured constant for sequencer
/// submissions.
pub fn extract_extra_data(
    submission: &BatchSubmission,
    gas_limit: u64,
) -> Result<BatchExtraData, DecodingError> {
    let calldata = submission.calldata.as_ref();
    if calldata.len() <= CalldataFrame::HEADER_BYTES {
        return Err(DecodingError::CalldataTooShort {
            tx_hash: submission.tx_hash,
            len: calldata.len(),
        })
    }
    let frame = CalldataFrame::new(calldata, submission.tx_hash)?;

    let batch_index = frame.batch_index()?;
    let prev_total_elements = frame
        .total_elements()?
        .checked_sub(1)
        .ok_or(DecodingError::InvalidTotalElements { batch_index })?;

    Ok(BatchExtraData {
        timestamp: submission.block_timestamp,
        block_number: submission.block_number,
        submitter: submission.sender,
        l1_transaction_hash: submission.tx_hash,
        l1_transaction_data: submission.calldata.clone(),
        gas_limit,
        prev_total_elements,
        batch_index,
        batch_size: frame.batch_size(),
        batch_root: submission.parent_hash,
        extra_data: String::new(),
    })
}
