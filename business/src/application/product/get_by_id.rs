use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::create::CreateProductUseCaseImpl;
    use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{InMemoryProductRepository, MockProductRepo, mock_logger, product};

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| id.as_str() == "P-7")
            .returning(|_| Ok(product("P-7", "Silla", 80.0, 2)));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("P-7"),
            })
            .await;

        let found = result.unwrap();
        assert_eq!(found.id.as_str(), "P-7");
        assert_eq!(found.name, "Silla");
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_row_matches() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_backend_errors_as_repository_errors() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new("P-1"),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        );
    }

    #[tokio::test]
    async fn should_read_back_every_field_after_create() {
        let repository = Arc::new(InMemoryProductRepository::default());
        let create = CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let get_by_id = GetProductByIdUseCaseImpl {
            repository,
            logger: mock_logger(),
        };

        let created = create
            .execute(CreateProductParams {
                id: "P-55".to_string(),
                name: "Escritorio".to_string(),
                price: "199.99".to_string(),
                category_id: "4".to_string(),
            })
            .await
            .unwrap();

        let fetched = get_by_id
            .execute(GetProductByIdParams {
                id: ProductId::new("P-55"),
            })
            .await
            .unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched, product("P-55", "Escritorio", 199.99, 4));
    }
}
