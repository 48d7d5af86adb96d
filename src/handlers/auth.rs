// src/handlers/auth.rs

use std::sync::Arc;

use auth_gateway_api::{RegisterRequest, RegisterResponse};
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::AppError;
use crate::extract::Xml;
use crate::registration::services::RegistrationService;

/// POST /auth/register
/// Forwards a `registerRequest` to the auth service
pub async fn register(
    State(service): State<Arc<RegistrationService>>,
    Xml(payload): Xml<RegisterRequest>,
) -> Result<(StatusCode, Xml<RegisterResponse>), AppError> {
    let response = service.register(payload).await?;
    Ok((StatusCode::CREATED, Xml(response)))
}
