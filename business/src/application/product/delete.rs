use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

/// Deleting an id that does not exist is a success unless the backend says otherwise.
pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.repository.delete(&params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", params.id, e));
            e
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
