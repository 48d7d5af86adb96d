//! # auth-gateway-api
//!
//! Shared wire types for the auth-gateway service.
//! This crate has no runtime dependencies beyond serde and quick-xml, so it
//! can be used by the gateway itself, by the downstream auth service, and by
//! clients (including WASM builds).
//!
//! ## Features
//!
//! - Request DTOs (`RegisterRequest`)
//! - Response DTOs (`RegisterResponse`)
//! - Error response format (`ErrorResponse`)
//! - XML codec keyed on each type's root element (`to_xml`, `from_xml`)
//!
//! ## Example
//!
//! ```rust
//! use auth_gateway_api::{RegisterRequest, from_xml, to_xml};
//!
//! let request = RegisterRequest::new("alice", "secret");
//! let xml = to_xml(&request).unwrap();
//! let decoded: RegisterRequest = from_xml(&xml).unwrap();
//! assert_eq!(decoded.username(), "alice");
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod xml;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
pub use xml::{XmlError, XmlRoot, from_xml, to_xml};
