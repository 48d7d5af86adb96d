use serde::{Deserialize, Serialize};

use crate::xml::XmlRoot;

/// Public API error response format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl XmlRoot for ErrorResponse {
    const ROOT: &'static str = "errorResponse";
}
