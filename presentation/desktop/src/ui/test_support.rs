//! Use case doubles for the view and front-end tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use business::domain::category::errors::CategoryError;
use business::domain::category::model::Category;
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::logger::Logger;
use business::domain::product::errors::ProductError;
use business::domain::product::filter::FilterConfiguration;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::session::errors::SessionError;
use business::domain::session::use_cases::check_session::CheckSessionUseCase;
use business::domain::session::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::session::use_cases::logout::LogoutUseCase;
use business::domain::shared::value_objects::{CategoryId, ProductId};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Login {}

    #[async_trait]
    impl LoginUseCase for Login {
        async fn execute(&self, params: LoginParams) -> Result<(), SessionError>;
    }
}

mock! {
    pub CheckSession {}

    #[async_trait]
    impl CheckSessionUseCase for CheckSession {
        async fn execute(&self) -> Result<(), SessionError>;
    }
}

mock! {
    pub Logout {}

    #[async_trait]
    impl LogoutUseCase for Logout {
        async fn execute(&self) -> Result<(), SessionError>;
    }
}

mock! {
    pub List {}

    #[async_trait]
    impl ListProductsUseCase for List {
        async fn execute(&self, filters: FilterConfiguration) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub Create {}

    #[async_trait]
    impl CreateProductUseCase for Create {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub Update {}

    #[async_trait]
    impl UpdateProductUseCase for Update {
        async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError>;
    }
}

mock! {
    pub Delete {}

    #[async_trait]
    impl DeleteProductUseCase for Delete {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
    }
}

mock! {
    pub GetById {}

    #[async_trait]
    impl GetProductByIdUseCase for GetById {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetCategories {}

    #[async_trait]
    impl GetAllCategoriesUseCase for GetCategories {
        async fn execute(&self) -> Result<Vec<Category>, CategoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: &str, name: &str, price: f64, category_id: i64) -> Product {
    Product::from_repository(
        ProductId::new(id),
        name.to_string(),
        price,
        CategoryId::new(category_id),
    )
}
