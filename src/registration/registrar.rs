use async_trait::async_trait;
use auth_gateway_api::RegisterRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrarError {
    #[error("Username already registered: {0}")]
    Conflict(String),
    #[error("Registration rejected: {0}")]
    Rejected(String),
    #[error("Auth service unavailable: {0}")]
    Unavailable(String),
}

/// Downstream service that validates and persists credential pairs.
///
/// Receives complete requests only; `RegistrationService` filters out the rest.
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<(), RegistrarError>;
}
