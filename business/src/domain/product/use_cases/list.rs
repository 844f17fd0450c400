use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::FilterConfiguration;
use crate::domain::product::model::Product;

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, filters: FilterConfiguration) -> Result<Vec<Product>, ProductError>;
}
