use std::time::Duration;

use async_trait::async_trait;
use auth_gateway_api::{ErrorResponse, RegisterRequest, from_xml, to_xml};
use reqwest::{Client, StatusCode, header};

use super::registrar::{Registrar, RegistrarError};
use crate::extract::XML_CONTENT_TYPE;

/// Forwards registrations to the auth service as `POST {base}/register`.
#[derive(Debug, Clone)]
pub struct UpstreamRegistrar {
    client: Client,
    register_url: String,
}

impl UpstreamRegistrar {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            register_url: format!("{}/register", base_url.trim_end_matches('/')),
        })
    }

    /// Prefers the `message` of an `errorResponse` body, falls back to raw text.
    fn rejection_message(status: StatusCode, body: String) -> String {
        if let Ok(error) = from_xml::<ErrorResponse>(&body) {
            return error.message;
        }
        if body.trim().is_empty() {
            return status
                .canonical_reason()
                .unwrap_or("Rejected by auth service")
                .to_string();
        }
        body
    }
}

#[async_trait]
impl Registrar for UpstreamRegistrar {
    async fn register(&self, request: &RegisterRequest) -> Result<(), RegistrarError> {
        let xml = to_xml(request).map_err(|e| RegistrarError::Unavailable(e.to_string()))?;

        tracing::debug!(url = %self.register_url, username = request.username(), "Forwarding registration");

        let response = self
            .client
            .post(&self.register_url)
            .header(header::CONTENT_TYPE, XML_CONTENT_TYPE)
            .body(xml)
            .send()
            .await
            .map_err(|e| RegistrarError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status == StatusCode::CONFLICT {
            return Err(RegistrarError::Conflict(request.username().to_string()));
        }

        if status.is_client_error() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, %status, "Failed to read auth service rejection body");
                    String::new()
                }
            };
            return Err(RegistrarError::Rejected(Self::rejection_message(status, body)));
        }

        Err(RegistrarError::Unavailable(format!(
            "auth service responded with {status}"
        )))
    }
}
