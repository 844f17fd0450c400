use business::domain::errors::RepositoryError;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;

/// Error body shapes returned by PostgREST (`message`, `code`) and
/// GoTrue (`msg` / `error_description`, `error`, `error_code`).
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub msg: Option<String>,
    pub error_description: Option<String>,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub code: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Human-readable message, preferring the most specific field.
    pub fn message(&self) -> Option<&str> {
        [
            &self.message,
            &self.msg,
            &self.error_description,
            &self.error,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .find(|message| !message.trim().is_empty())
    }
}

/// Sends the request and turns transport failures and non-2xx replies into
/// repository errors.
pub async fn send(request: RequestBuilder) -> Result<Response, RepositoryError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("Supabase request failed: {e}");
        RepositoryError::Unavailable
    })?;

    if response.status().is_success() {
        return Ok(response);
    }

    Err(read_error(response).await)
}

pub async fn read_error(response: Response) -> RepositoryError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let parsed = ApiErrorBody::parse(&body);
    tracing::warn!("Supabase responded {status}: {body}");

    match parsed.message() {
        Some(message) => RepositoryError::backend(message),
        None => RepositoryError::Unavailable,
    }
}
