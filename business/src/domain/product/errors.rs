#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// The targeted id has no corresponding stored record. The only error
    /// this layer originates itself.
    #[error("Product not found with id: {0}")]
    NotFound(i64),
    /// Store failure, propagated unchanged.
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
