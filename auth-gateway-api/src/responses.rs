use serde::{Deserialize, Serialize};

use crate::xml::XmlRoot;

/// Returned by the gateway once the auth service accepted a registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub username: String,
    pub message: String,
}

impl XmlRoot for RegisterResponse {
    const ROOT: &'static str = "registerResponse";
}

impl RegisterResponse {
    pub fn registered(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: "User registered successfully".to_string(),
        }
    }
}
