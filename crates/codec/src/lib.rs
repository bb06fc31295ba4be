//! The codec for sequencer batch inbox submissions.
//!
//! An inbox submission packs an entire batch of L2 blocks into a single
//! calldata blob: a fixed 70 byte header followed by the batch payload, either
//! inline or as a pointer into an off-chain object store. This crate decodes
//! the header and walks the resolved payload into block and transaction
//! entries. It performs no I/O: payload resolution lives in
//! `inbox-providers`.

pub use error::DecodingError;
mod error;

pub use frame::CalldataFrame;
mod frame;

pub use extra_data::extract_extra_data;
mod extra_data;

pub mod decoding;
pub use decoding::{decode_blocks, BatchDecodingContext};

/// Tests utils.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
