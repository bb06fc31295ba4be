use super::Reader;
use crate::DecodingError;

/// The header of a block record inside the batch payload.
///
/// Layout, big-endian: 3 byte transaction count, 5 byte block timestamp,
/// 32 byte L1 block number.
#[derive(Debug)]
pub(crate) struct BlockContext {
    /// The count of transaction records following the context.
    pub(crate) tx_count: u64,
    /// The block timestamp.
    pub(crate) timestamp: u64,
    /// The L1 block number carried by the context.
    pub(crate) number: u64,
}

impl BlockContext {
    /// Tries to read a [`BlockContext`] from the reader.
    pub(crate) fn try_from_reader(reader: &mut Reader<'_>) -> Result<Self, DecodingError> {
        let tx_count = reader.read_uint(3)?;
        let timestamp = reader.read_uint(5)?;
        let number = reader.read_wide_uint(32)?;
        Ok(Self { tx_count, timestamp, number })
    }
}
