use crate::DecodingError;

use alloy_primitives::{B256, U256};

/// A view over the fixed-layout header of an inbox submission.
///
/// Layout, big-endian unsigned:
/// `[0]` data availability tag, `[1]` compression tag, `[2..34]` batch index,
/// `[34..66]` previous total elements plus one (reused as the first global
/// block index of the batch), `[66..70]` batch size, `[70..]` payload bytes or
/// object store key.
#[derive(Debug, Clone, Copy)]
pub struct CalldataFrame<'a> {
    calldata: &'a [u8],
}

impl<'a> CalldataFrame<'a> {
    /// The length of the fixed header.
    pub const HEADER_BYTES: usize = 70;

    /// Returns a frame over the provided calldata, or a
    /// [`DecodingError::CalldataTooShort`] if the header is incomplete.
    pub const fn new(calldata: &'a [u8], tx_hash: B256) -> Result<Self, DecodingError> {
        if calldata.len() < Self::HEADER_BYTES {
            return Err(DecodingError::CalldataTooShort { tx_hash, len: calldata.len() })
        }
        Ok(Self { calldata })
    }

    /// The data availability tag. Zero means the payload is inline, one means
    /// the content bytes are a hex-encoded object store key.
    pub const fn da(&self) -> u8 {
        self.calldata[0]
    }

    /// The compression tag for the resolved payload.
    pub const fn compress_type(&self) -> u8 {
        self.calldata[1]
    }

    /// The index of the batch.
    pub fn batch_index(&self) -> Result<u64, DecodingError> {
        read_u64(&self.calldata[2..34])
    }

    /// The total elements field, one past the previous total element count.
    /// Also the basis for the first global block index of the batch.
    pub fn total_elements(&self) -> Result<u64, DecodingError> {
        read_u64(&self.calldata[34..66])
    }

    /// The first global block index basis for the batch, reusing the total
    /// elements field.
    pub fn l2_start(&self) -> Result<u64, DecodingError> {
        self.total_elements()
    }

    /// The count of elements in the batch.
    pub fn batch_size(&self) -> u64 {
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&self.calldata[66..70]);
        u32::from_be_bytes(arr) as u64
    }

    /// The content after the header: the payload itself or an object store
    /// key, depending on the data availability tag.
    pub fn content(&self) -> &'a [u8] {
        &self.calldata[Self::HEADER_BYTES..]
    }
}

fn read_u64(slice: &[u8]) -> Result<u64, DecodingError> {
    u64::try_from(U256::from_be_slice(slice)).map_err(|_| DecodingError::ValueOverflow)
}
