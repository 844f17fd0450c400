#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CategoryError {
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
