/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// These cover store-level failures only; "record absent" is not an error at
/// the repository boundary (lookups return `Option`).
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
