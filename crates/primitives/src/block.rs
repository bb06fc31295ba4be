use crate::TransactionEntry;

/// A decoded L2 block belonging to a batch.
///
/// Block indices strictly increase by 1 across all blocks of a batch and
/// across batch history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEntry {
    /// The global index of the block.
    pub index: u64,
    /// The index of the batch the block belongs to.
    pub batch_index: u64,
    /// The block timestamp.
    pub timestamp: u64,
    /// The ordered transactions of the block.
    pub transactions: Vec<TransactionEntry>,
    /// Whether the block is confirmed on the L1.
    pub confirmed: bool,
}

impl BlockEntry {
    /// Returns a new instance of a [`BlockEntry`].
    pub const fn new(
        index: u64,
        batch_index: u64,
        timestamp: u64,
        transactions: Vec<TransactionEntry>,
    ) -> Self {
        Self { index, batch_index, timestamp, transactions, confirmed: true }
    }
}
