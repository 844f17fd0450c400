/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
/// `Backend` is the exception: it carries the backend's own message, shown verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("{0}")]
    Backend(String),
    #[error("repository.unavailable")]
    Unavailable,
}

impl RepositoryError {
    pub fn backend(message: impl Into<String>) -> Self {
        RepositoryError::Backend(message.into())
    }
}
