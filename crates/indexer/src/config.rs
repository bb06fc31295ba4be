/// The configuration for the batch inbox indexer.
#[derive(Debug, Clone, Copy)]
pub struct IndexerConfig {
    /// The L2 chain id used for replay protection when decoding sequencer
    /// transactions.
    pub l2_chain_id: u64,
    /// The block height at which storage switches from transaction to block
    /// granularity. Zero disables the block granularity path.
    pub de_seq_block: u64,
    /// The fixed gas limit recorded for sequencer submissions.
    pub sequencer_gas_limit: u64,
}
