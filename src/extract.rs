use auth_gateway_api::{XmlRoot, from_xml, to_xml};
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const XML_CONTENT_TYPE: &str = "application/xml";

/// XML body extractor and response, the XML counterpart of `axum::Json`.
///
/// As an extractor it requires an XML `Content-Type` and decodes the body
/// against `T::ROOT`. As a response it encodes `T` and sets
/// `Content-Type: application/xml`.
#[derive(Debug, Clone)]
pub struct Xml<T>(pub T);

impl<T, S> FromRequest<S> for Xml<T>
where
    T: DeserializeOwned + XmlRoot,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_xml_content_type(req.headers()) {
            let received = req
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|h| h.to_str().ok())
                .unwrap_or("none")
                .to_string();
            return Err(AppError::UnsupportedMediaType(received));
        }

        let body = String::from_request(req, state)
            .await
            .map_err(|e| AppError::malformed(format!("Unreadable body: {e}")))?;

        let value = from_xml::<T>(&body)?;
        Ok(Xml(value))
    }
}

impl<T> IntoResponse for Xml<T>
where
    T: Serialize + XmlRoot,
{
    fn into_response(self) -> Response {
        match to_xml(&self.0) {
            Ok(xml) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))],
                xml,
            )
                .into_response(),
            Err(e) => AppError::from(e).into_response(),
        }
    }
}

/// `application/xml`, `text/xml`, and any `*/*+xml` (e.g. `application/soap+xml`)
fn has_xml_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/xml" || mime == "text/xml" || mime.ends_with("+xml")
}
