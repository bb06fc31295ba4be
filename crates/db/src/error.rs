/// The error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// An error from the backing store implementation.
    #[error("database error: {0}")]
    Backend(Box<dyn core::error::Error + Send + Sync>),
}
