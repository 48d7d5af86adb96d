// src/error.rs

use auth_gateway_api::{ErrorResponse, XmlError, to_xml};
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::registration::registrar::RegistrarError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Request errors ===
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    // === Registration errors ===
    #[error("Username already exists")]
    UserAlreadyExists,
    #[error("Registration rejected: {0}")]
    RegistrationRejected(String),
    #[error("Auth service unavailable: {0}")]
    UpstreamUnavailable(String),

    // === Internal errors ===
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, internal_detail) = self.get_error_info();

        if let Some(ref detail) = internal_detail {
            tracing::error!(error_code, %status, detail, "Request failed");
        }

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
            details: None,
        };

        match to_xml(&body) {
            Ok(xml) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(crate::extract::XML_CONTENT_TYPE),
                )],
                xml,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode error response");
                (status, body.message).into_response()
            }
        }
    }
}

impl AppError {
    /// Status, public code, public message and optional internal detail
    fn get_error_info(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            // 400 Bad Request
            AppError::MissingField(_) | AppError::MalformedRequest(_) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_REQUEST",
                self.to_string(),
                None,
            ),
            AppError::RegistrationRejected(msg) => (
                StatusCode::BAD_REQUEST,
                "REGISTRATION_REJECTED",
                msg.clone(),
                None,
            ),

            // 409 Conflict
            AppError::UserAlreadyExists => (
                StatusCode::CONFLICT,
                "USER_EXISTS",
                "Username already exists".to_string(),
                None,
            ),

            // 415 Unsupported Media Type
            AppError::UnsupportedMediaType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                "Expected an XML request body".to_string(),
                None,
            ),

            // 502 Bad Gateway
            AppError::UpstreamUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "The authentication service could not process the request".to_string(),
                Some(msg.clone()),
            ),

            // 500 Internal Server Error
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
                Some(msg.clone()),
            ),
        }
    }

    // === Helper constructors ===
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::InternalServerError(msg.into())
    }

    #[cfg(test)]
    pub fn status_code(&self) -> StatusCode {
        self.get_error_info().0
    }
}

// === Conversions from lower-layer errors ===

impl From<XmlError> for AppError {
    fn from(err: XmlError) -> Self {
        match err {
            XmlError::Encode(msg) => AppError::internal(msg),
            other => AppError::malformed(other.to_string()),
        }
    }
}

impl From<RegistrarError> for AppError {
    fn from(err: RegistrarError) -> Self {
        match err {
            RegistrarError::Conflict(_) => AppError::UserAlreadyExists,
            RegistrarError::Rejected(msg) => AppError::RegistrationRejected(msg),
            RegistrarError::Unavailable(msg) => AppError::UpstreamUnavailable(msg),
        }
    }
}
