#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_fields")]
    MissingFields,
    #[error("product.id_empty")]
    IdEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_category")]
    InvalidCategory,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
