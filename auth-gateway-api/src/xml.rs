//! XML codec for the wire types.
//!
//! Each type names its root element through [`XmlRoot`]. Fields are written as
//! child elements in declaration order. Every non-`Option` field is required
//! on decode: a missing element fails with [`XmlError::Malformed`].

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Binds a wire type to the name of its XML root element.
pub trait XmlRoot {
    const ROOT: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XmlError {
    #[error("XML document has no root element")]
    Empty,
    #[error("Unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
    #[error("Malformed XML: {0}")]
    Malformed(String),
    #[error("XML encoding failed: {0}")]
    Encode(String),
}

/// Serializes `value` under its `<ROOT>` element.
pub fn to_xml<T>(value: &T) -> Result<String, XmlError>
where
    T: Serialize + XmlRoot,
{
    quick_xml::se::to_string_with_root(T::ROOT, value).map_err(|e| XmlError::Encode(e.to_string()))
}

/// Parses a document whose root element must be `<ROOT>`.
///
/// A namespace prefix on the root (`<tns:registerRequest>`) is accepted.
pub fn from_xml<T>(xml: &str) -> Result<T, XmlError>
where
    T: DeserializeOwned + XmlRoot,
{
    let found = root_element(xml)?;
    if found != T::ROOT {
        return Err(XmlError::UnexpectedRoot {
            expected: T::ROOT,
            found,
        });
    }

    quick_xml::de::from_str(xml).map_err(|e| XmlError::Malformed(e.to_string()))
}

/// Local name of the single root element.
///
/// Walks the whole document: a second top-level element or stray text after
/// the root is rejected, since the deserializer stops once the root closes.
fn root_element(xml: &str) -> Result<String, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut root: Option<String> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    root = Some(top_level_element(root.as_deref(), e.local_name().as_ref())?);
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    root = Some(top_level_element(root.as_deref(), e.local_name().as_ref())?);
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Text(text)) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(XmlError::Malformed(
                        "text outside the root element".to_string(),
                    ));
                }
            }
            Ok(Event::CData(_)) if depth == 0 => {
                return Err(XmlError::Malformed(
                    "CDATA outside the root element".to_string(),
                ));
            }
            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(XmlError::Malformed("unclosed root element".to_string()));
                }
                return root.ok_or(XmlError::Empty);
            }
            Ok(_) => {}
            Err(e) => return Err(XmlError::Malformed(e.to_string())),
        }
    }
}

fn top_level_element(previous: Option<&str>, name: &[u8]) -> Result<String, XmlError> {
    let name = String::from_utf8_lossy(name).into_owned();
    match previous {
        Some(root) => Err(XmlError::Malformed(format!(
            "second root element <{name}> after <{root}>"
        ))),
        None => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorResponse, RegisterRequest, RegisterResponse};

    #[test]
    fn register_request_round_trips() {
        let request = RegisterRequest::new("alice", "secret");
        let xml = to_xml(&request).unwrap();
        let decoded: RegisterRequest = from_xml(&xml).unwrap();

        assert_eq!(decoded.username(), "alice");
        assert_eq!(decoded.password(), "secret");
    }

    #[test]
    fn register_request_writes_username_before_password() {
        let xml = to_xml(&RegisterRequest::new("alice", "secret")).unwrap();

        assert!(xml.starts_with("<registerRequest>"));
        assert!(xml.ends_with("</registerRequest>"));
        let username_at = xml.find("<username>alice</username>").unwrap();
        let password_at = xml.find("<password>secret</password>").unwrap();
        assert!(username_at < password_at);
    }

    #[test]
    fn decodes_positional_register_request() {
        let xml = "<registerRequest><username>bob</username><password>pw1</password></registerRequest>";
        let decoded: RegisterRequest = from_xml(xml).unwrap();

        assert_eq!(decoded.username(), "bob");
        assert_eq!(decoded.password(), "pw1");
    }

    #[test]
    fn decodes_with_declaration_and_whitespace() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <registerRequest>
                <username>bob</username>
                <password>pw1</password>
            </registerRequest>"#;
        let decoded: RegisterRequest = from_xml(xml).unwrap();

        assert_eq!(decoded, RegisterRequest::new("bob", "pw1"));
    }

    #[test]
    fn accepts_namespace_prefixed_root() {
        let xml = r#"<tns:registerRequest xmlns:tns="http://gateway.example/auth"><username>bob</username><password>pw1</password></tns:registerRequest>"#;
        let decoded: RegisterRequest = from_xml(xml).unwrap();

        assert_eq!(decoded.username(), "bob");
    }

    #[test]
    fn escapes_special_characters() {
        let request = RegisterRequest::new("a<b>&c", "p\"w'd&");
        let xml = to_xml(&request).unwrap();
        assert!(!xml.contains("a<b>"));

        let decoded: RegisterRequest = from_xml(&xml).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn round_trip_keeps_surrounding_whitespace() {
        let request = RegisterRequest::new(" alice ", "  pass word  ");
        let xml = to_xml(&request).unwrap();
        let decoded: RegisterRequest = from_xml(&xml).unwrap();

        assert_eq!(decoded, request);
    }

    #[test]
    fn rejects_trailing_root_element() {
        let xml = "<registerRequest><username>bob</username><password>pw1</password></registerRequest><other/>";
        let err = from_xml::<RegisterRequest>(xml).unwrap_err();

        assert!(matches!(err, XmlError::Malformed(ref msg) if msg.contains("other")));
    }

    #[test]
    fn rejects_trailing_text() {
        let xml = "<registerRequest><username>bob</username><password>pw1</password></registerRequest>junk";
        assert!(matches!(
            from_xml::<RegisterRequest>(xml),
            Err(XmlError::Malformed(_))
        ));
    }

    #[test]
    fn accepts_trailing_whitespace_and_comment() {
        let xml = "<registerRequest><username>bob</username><password>pw1</password></registerRequest>\n<!-- sent by gateway -->\n";
        let decoded: RegisterRequest = from_xml(xml).unwrap();

        assert_eq!(decoded, RegisterRequest::new("bob", "pw1"));
    }

    #[test]
    fn missing_password_is_malformed() {
        let xml = "<registerRequest><username>bob</username></registerRequest>";
        let err = from_xml::<RegisterRequest>(xml).unwrap_err();

        assert!(matches!(err, XmlError::Malformed(ref msg) if msg.contains("password")));
    }

    #[test]
    fn missing_username_is_malformed() {
        let xml = "<registerRequest><password>pw1</password></registerRequest>";
        let err = from_xml::<RegisterRequest>(xml).unwrap_err();

        assert!(matches!(err, XmlError::Malformed(ref msg) if msg.contains("username")));
    }

    #[test]
    fn rejects_wrong_root_element() {
        let xml = "<loginRequest><username>bob</username><password>pw1</password></loginRequest>";
        let err = from_xml::<RegisterRequest>(xml).unwrap_err();

        assert_eq!(
            err,
            XmlError::UnexpectedRoot {
                expected: "registerRequest",
                found: "loginRequest".to_string(),
            }
        );
    }

    #[test]
    fn rejects_empty_document() {
        assert_eq!(from_xml::<RegisterRequest>("").unwrap_err(), XmlError::Empty);
        assert_eq!(
            from_xml::<RegisterRequest>("   \n  ").unwrap_err(),
            XmlError::Empty
        );
    }

    #[test]
    fn rejects_unclosed_document() {
        let xml = "<registerRequest><username>bob</username><password>pw1</password>";
        assert!(matches!(
            from_xml::<RegisterRequest>(xml),
            Err(XmlError::Malformed(_))
        ));
    }

    #[test]
    fn register_response_uses_its_own_root() {
        let xml = to_xml(&RegisterResponse::registered("alice")).unwrap();
        assert!(xml.starts_with("<registerResponse>"));
        assert!(xml.contains("<username>alice</username>"));
    }

    #[test]
    fn error_response_omits_missing_details() {
        let body = ErrorResponse {
            error: "MALFORMED_REQUEST".to_string(),
            message: "Missing required field: password".to_string(),
            details: None,
        };
        let xml = to_xml(&body).unwrap();

        assert!(xml.starts_with("<errorResponse>"));
        assert!(xml.contains("<error>MALFORMED_REQUEST</error>"));
        assert!(!xml.contains("details"));

        let decoded: ErrorResponse = from_xml(&xml).unwrap();
        assert_eq!(decoded, body);
    }
}
