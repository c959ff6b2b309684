/// Error type for permission engine operations.
///
/// Missing rows are never errors; only storage failures and encoding of
/// a new override can fail.
#[derive(Debug, thiserror::Error)]
pub enum AclError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode permission override: {0}")]
    Encode(#[from] serde_json::Error),
}
