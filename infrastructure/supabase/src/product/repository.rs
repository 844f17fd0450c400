use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use business::domain::errors::RepositoryError;
use business::domain::product::filter::FilterConfiguration;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::{ProductChangesEntity, ProductEntity};
use crate::client::SupabaseClient;
use crate::error::send;
use crate::query::ProductQuery;

const TABLE: &str = "products";

pub struct ProductRepositorySupabase {
    client: Arc<SupabaseClient>,
}

impl ProductRepositorySupabase {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError> {
        let url = self.client.rest_url(TABLE);
        let request = self
            .client
            .request(Method::GET, &url)
            .await
            .query(query.params());

        let rows: Vec<ProductEntity> = send(request)
            .await?
            .json()
            .await
            .map_err(|e| {
                tracing::error!("Undecodable products response: {e}");
                RepositoryError::Unavailable
            })?;

        Ok(rows.into_iter().map(|row| row.into_domain()).collect())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositorySupabase {
    async fn find(&self, filters: &FilterConfiguration) -> Result<Vec<Product>, RepositoryError> {
        self.fetch(&ProductQuery::from_filters(filters)).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.fetch(&ProductQuery::by_id(id.as_str()))
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let url = self.client.rest_url(TABLE);
        let request = self
            .client
            .request(Method::POST, &url)
            .await
            .header("Prefer", "return=representation")
            .json(&[ProductEntity::from_domain(product)]);

        let rows: Vec<ProductEntity> = send(request).await?.json().await.map_err(|e| {
            tracing::error!("Undecodable insert response: {e}");
            RepositoryError::Unavailable
        })?;

        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.into_domain())
            .unwrap_or_else(|| product.clone()))
    }

    async fn update(&self, id: &ProductId, changes: &ProductChanges) -> Result<(), RepositoryError> {
        let url = self.client.rest_url(TABLE);
        let request = self
            .client
            .request(Method::PATCH, &url)
            .await
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=minimal")
            .json(&ProductChangesEntity::from(changes));

        send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let url = self.client.rest_url(TABLE);
        let request = self
            .client
            .request(Method::DELETE, &url)
            .await
            .query(&[("id", format!("eq.{}", id))]);

        send(request).await?;
        Ok(())
    }
}
