use std::fmt;

use serde::{Deserialize, Serialize};

use crate::xml::XmlRoot;

// -------- REQUEST DTOs --------

/// Registration payload: `<registerRequest><username/><password/></registerRequest>`.
///
/// Pure data carrier. Completeness (both fields set) is checked by whoever
/// consumes the request, never here.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RegisterRequest {
    username: String,
    password: String, // Plain text
}

impl XmlRoot for RegisterRequest {
    const ROOT: &'static str = "registerRequest";
}

impl RegisterRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }
}

// Keeps the plaintext password out of logs and panic messages.
impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
