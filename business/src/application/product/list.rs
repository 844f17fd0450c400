use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::FilterConfiguration;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::ListProductsUseCase;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, filters: FilterConfiguration) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Listing products with filters: {:?}", filters));

        let products = self.repository.find(&filters).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to list products: {}", e));
            e
        })?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
