/// An event emitted by the indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexerEvent {
    /// A batch submission has been indexed.
    BatchIndexed {
        /// The index of the batch.
        index: u64,
        /// The count of decoded block entries.
        blocks: usize,
        /// The count of decoded transaction entries.
        transactions: usize,
    },
}
