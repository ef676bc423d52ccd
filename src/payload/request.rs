//! PayloadRequest - the fields collected for one QR code.

use super::kind::{PayloadKind, SocialPlatform};
use crate::error::ValidationError;

/// Fields collected for one QR code, tagged by kind.
///
/// Optional fields holding an empty (or whitespace-only) string are treated
/// exactly like `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadRequest {
    Url {
        url: String,
    },
    Text {
        text: String,
    },
    Contact {
        name: String,
        phone: String,
        email: Option<String>,
        company: Option<String>,
    },
    Email {
        recipient: String,
        subject: Option<String>,
        body: Option<String>,
    },
    Sms {
        number: String,
        message: Option<String>,
    },
    Wifi {
        ssid: String,
        password: String,
        security: Option<String>,
    },
    Location {
        latitude: String,
        longitude: String,
        label: Option<String>,
    },
    Social {
        platform: SocialPlatform,
        handle: String,
        message: Option<String>,
    },
}

impl PayloadRequest {
    pub fn kind(&self) -> PayloadKind {
        match self {
            PayloadRequest::Url { .. } => PayloadKind::Url,
            PayloadRequest::Text { .. } => PayloadKind::Text,
            PayloadRequest::Contact { .. } => PayloadKind::Contact,
            PayloadRequest::Email { .. } => PayloadKind::Email,
            PayloadRequest::Sms { .. } => PayloadKind::Sms,
            PayloadRequest::Wifi { .. } => PayloadKind::Wifi,
            PayloadRequest::Location { .. } => PayloadKind::Location,
            PayloadRequest::Social { .. } => PayloadKind::Social,
        }
    }

    /// The field that names the record in its output filename, if any.
    ///
    /// Contact name, WiFi SSID and social platform qualify; the other kinds
    /// are named by prefix and token alone.
    pub fn identifying_name(&self) -> Option<&str> {
        match self {
            PayloadRequest::Contact { name, .. } => Some(name.as_str()),
            PayloadRequest::Wifi { ssid, .. } => Some(ssid.as_str()),
            PayloadRequest::Social { platform, .. } => Some(platform.name()),
            _ => None,
        }
    }

    /// Check that every required field is non-empty.
    ///
    /// Missing fields are reported together, in prompt order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: Vec<(&'static str, &str)> = match self {
            PayloadRequest::Url { url } => vec![("url", url.as_str())],
            PayloadRequest::Text { text } => vec![("text", text.as_str())],
            PayloadRequest::Contact { name, phone, .. } => {
                vec![("name", name.as_str()), ("phone", phone.as_str())]
            }
            PayloadRequest::Email { recipient, .. } => vec![("recipient", recipient.as_str())],
            PayloadRequest::Sms { number, .. } => vec![("number", number.as_str())],
            PayloadRequest::Wifi {
                ssid,
                password,
                security,
            } => {
                let open = present(security).is_some_and(|s| s.eq_ignore_ascii_case("nopass"));
                if open {
                    vec![("ssid", ssid.as_str())]
                } else {
                    vec![("ssid", ssid.as_str()), ("password", password.as_str())]
                }
            }
            PayloadRequest::Location {
                latitude,
                longitude,
                ..
            } => vec![
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
            ],
            PayloadRequest::Social { handle, .. } => vec![("handle", handle.as_str())],
        };

        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.kind(), missing))
        }
    }
}

/// Treat empty optional fields as absent.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str) -> PayloadRequest {
        PayloadRequest::Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            company: None,
        }
    }

    #[test]
    fn test_contact_requires_name_and_phone() {
        let err = contact("", "").validate().unwrap_err();
        assert_eq!(err.kind, PayloadKind::Contact);
        assert_eq!(err.missing, vec!["name", "phone"]);

        let err = contact("Ana", "  ").validate().unwrap_err();
        assert_eq!(err.missing, vec!["phone"]);

        assert!(contact("Ana", "555").validate().is_ok());
    }

    #[test]
    fn test_location_requires_coordinates() {
        let request = PayloadRequest::Location {
            latitude: "4.6".to_string(),
            longitude: String::new(),
            label: Some("Office".to_string()),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.missing, vec!["longitude"]);
    }

    #[test]
    fn test_wifi_nopass_allows_empty_password() {
        let request = PayloadRequest::Wifi {
            ssid: "Cafe".to_string(),
            password: String::new(),
            security: Some("nopass".to_string()),
        };
        assert!(request.validate().is_ok());

        let request = PayloadRequest::Wifi {
            ssid: "Cafe".to_string(),
            password: String::new(),
            security: None,
        };
        assert_eq!(request.validate().unwrap_err().missing, vec!["password"]);
    }

    #[test]
    fn test_identifying_name() {
        assert_eq!(contact("Ana Ruiz", "1").identifying_name(), Some("Ana Ruiz"));
        let social = PayloadRequest::Social {
            platform: SocialPlatform::Instagram,
            handle: "ana".to_string(),
            message: None,
        };
        assert_eq!(social.identifying_name(), Some("Instagram"));
        let text = PayloadRequest::Text {
            text: "hello".to_string(),
        };
        assert_eq!(text.identifying_name(), None);
    }

    #[test]
    fn test_present_treats_blank_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("  ".to_string())), None);
        assert_eq!(present(&Some("x".to_string())), Some("x"));
    }
}
