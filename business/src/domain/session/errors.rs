#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("session.missing_credentials")]
    MissingCredentials,
    #[error("session.invalid_credentials")]
    InvalidCredentials,
    #[error("session.no_active_session")]
    NoActiveSession,
    #[error("{0}")]
    Backend(String),
    #[error("session.unavailable")]
    Unavailable,
}
