use async_trait::async_trait;

use crate::domain::session::errors::SessionError;

#[async_trait]
pub trait CheckSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), SessionError>;
}
