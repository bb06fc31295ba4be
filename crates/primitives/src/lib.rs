//! Primitive types for the batch inbox indexer.

pub use batch::{BatchExtraData, BatchSubmission, TransactionBatchEntry};
mod batch;

pub use block::BlockEntry;
mod block;

pub use transaction::{DecodedTransaction, TransactionEntry, TransactionOrigin, TxSignature};
mod transaction;

pub use signature::SeqSignature;
mod signature;
