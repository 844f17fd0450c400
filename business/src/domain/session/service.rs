use async_trait::async_trait;

use super::errors::SessionError;
use super::model::Session;

/// Port to the external authentication backend.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError>;
    /// `Ok(None)` when nobody is signed in; absence is not a failure.
    async fn get_session(&self) -> Result<Option<Session>, SessionError>;
    async fn sign_out(&self) -> Result<(), SessionError>;
}
