use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.changes.is_empty() {
            self.logger
                .debug(&format!("No changes for product {}, skipping", params.id));
            return Ok(());
        }

        self.repository
            .update(&params.id, &params.changes)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to update product {}: {}", params.id, e));
                e
            })?;

        self.logger.info(&format!("Product updated: {}", params.id));
        Ok(())
    }
}
