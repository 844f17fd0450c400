use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, parse_category_id, parse_price};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::value_objects::ProductId;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCaseImpl {
    fn coerce(params: CreateProductParams) -> Result<NewProductProps, ProductError> {
        if params.id.is_empty()
            || params.name.is_empty()
            || params.price.is_empty()
            || params.category_id.is_empty()
        {
            return Err(ProductError::MissingFields);
        }

        if params.id.trim().is_empty() {
            return Err(ProductError::IdEmpty);
        }

        let price = parse_price(&params.price)?;
        let category_id = parse_category_id(&params.category_id)?;

        Ok(NewProductProps {
            id: ProductId::new(params.id),
            name: params.name,
            price,
            category_id,
        })
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(Self::coerce(params)?)?;

        let created = self.repository.insert(&product).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to create product {}: {}", product.id, e));
            e
        })?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}
