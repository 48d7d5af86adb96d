// src/registration/services.rs

use std::sync::Arc;

use auth_gateway_api::{RegisterRequest, RegisterResponse};

use super::registrar::{Registrar, RegistrarError};
use crate::error::AppError;

pub struct RegistrationService {
    registrar: Arc<dyn Registrar>,
}

impl RegistrationService {
    pub fn new(registrar: Arc<dyn Registrar>) -> Self {
        Self { registrar }
    }

    /// Registers a new credential pair with the auth service.
    ///
    /// An incomplete request (blank username or empty password) never reaches
    /// the registrar.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        if let Some(field) = Self::missing_field(&request) {
            tracing::warn!(field, "Rejecting incomplete registration request");
            return Err(AppError::MissingField(field));
        }

        match self.registrar.register(&request).await {
            Ok(()) => {
                tracing::info!(username = request.username(), "User registered");
                Ok(RegisterResponse::registered(request.username()))
            }
            Err(e @ (RegistrarError::Conflict(_) | RegistrarError::Rejected(_))) => {
                tracing::warn!(username = request.username(), error = %e, "Registration refused");
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// First required field that is unset, in wire order.
    fn missing_field(request: &RegisterRequest) -> Option<&'static str> {
        if request.username().trim().is_empty() {
            Some("username")
        } else if request.password().is_empty() {
            Some("password")
        } else {
            None
        }
    }
}
