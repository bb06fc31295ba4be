/// An error occurring during payload resolution or object store access.
#[derive(Debug, thiserror::Error)]
pub enum DaProviderError {
    /// Object store settings are required when the submission points
    /// off-chain. Operator action is required.
    #[error("missing object store configuration for da type 1")]
    MissingConfiguration,
    /// The object store returned no data for the key. Potentially transient,
    /// the caller may retry the whole event.
    #[error("read from object store failed, object is {0}")]
    Retrieval(String),
    /// An HTTP error from the object store client.
    #[error("object store http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The object store responded with an unexpected status code.
    #[error("object store returned status {0}")]
    UnexpectedStatus(u16),
    /// The stored object is not valid hex.
    #[error("object store payload is not valid hex: {0}")]
    InvalidObjectEncoding(#[from] alloy_primitives::hex::FromHexError),
    /// The payload failed to inflate.
    #[error("failed to inflate batch payload: {0}")]
    Decompression(String),
    /// The submission calldata failed to decode.
    #[error(transparent)]
    Decoding(#[from] inbox_codec::DecodingError),
}
