use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Raw form values; price and category are coerced before anything is sent.
pub struct CreateProductParams {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category_id: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
