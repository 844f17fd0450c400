//! Test doubles shared by the use case and store tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::filter::FilterConfiguration;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::service::AuthService;
use crate::domain::shared::value_objects::{CategoryId, ProductId};

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
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find(&self, filters: &FilterConfiguration) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn insert(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn update(&self, id: &ProductId, changes: &ProductChanges) -> Result<(), RepositoryError>;
        async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Auth {}

    #[async_trait]
    impl AuthService for Auth {
        async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError>;
        async fn get_session(&self) -> Result<Option<Session>, SessionError>;
        async fn sign_out(&self) -> Result<(), SessionError>;
    }
}

pub fn session() -> Session {
    Session {
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_at: None,
        email: Some("admin@tienda.com".to_string()),
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

pub fn product(id: &str, name: &str, price: f64, category: i64) -> Product {
    Product::from_repository(
        ProductId::new(id),
        name.to_string(),
        price,
        CategoryId::new(category),
    )
}

/// Behaves like the products table: filters and orders on read,
/// rejects duplicate ids on insert, and ignores updates/deletes of unknown ids.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            rows: Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find(&self, filters: &FilterConfiguration) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        let mut found: Vec<Product> = rows.iter().filter(|p| filters.matches(p)).cloned().collect();
        found.sort_by(|a, b| filters.compare(a, b));
        Ok(found)
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::backend(
                "duplicate key value violates unique constraint \"products_pkey\"",
            ));
        }
        rows.push(product.clone());
        Ok(product.clone())
    }

    async fn update(&self, id: &ProductId, changes: &ProductChanges) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.iter_mut()
            .filter(|p| &p.id == id)
            .for_each(|p| changes.apply_to(p));
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|p| &p.id != id);
        Ok(())
    }
}
