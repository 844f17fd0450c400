use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::filter::FilterConfiguration;
use super::model::{Product, ProductChanges};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(&self, filters: &FilterConfiguration) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn update(&self, id: &ProductId, changes: &ProductChanges)
    -> Result<(), RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
