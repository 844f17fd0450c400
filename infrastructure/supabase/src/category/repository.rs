use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::client::SupabaseClient;
use crate::error::send;

pub struct CategoryRepositorySupabase {
    client: Arc<SupabaseClient>,
}

impl CategoryRepositorySupabase {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositorySupabase {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let url = self.client.rest_url("categories");
        let request = self
            .client
            .request(Method::GET, &url)
            .await
            .query(&[("select", "id,name"), ("order", "id.asc")]);

        let rows: Vec<CategoryEntity> = send(request).await?.json().await.map_err(|e| {
            tracing::error!("Undecodable categories response: {e}");
            RepositoryError::Unavailable
        })?;

        Ok(rows.into_iter().map(|row| row.into_domain()).collect())
    }
}
