//! Formatting rules from a [`PayloadRequest`] to the string encoded in the QR symbol.

use std::fmt;

use super::kind::SocialPlatform;
use super::request::{present, PayloadRequest};
use crate::error::ValidationError;

/// The exact string encoded into a QR code.
///
/// Always produced by [`format`]; equal requests give equal payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payload(String);

impl Payload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a request and build its payload.
///
/// # Errors
/// Returns [`ValidationError`] naming every empty required field; no payload
/// is built in that case.
pub fn format(request: &PayloadRequest) -> Result<Payload, ValidationError> {
    request.validate()?;

    let payload = match request {
        PayloadRequest::Url { url } => url_payload(url),
        PayloadRequest::Text { text } => text.clone(),
        PayloadRequest::Contact {
            name,
            phone,
            email,
            company,
        } => vcard_payload(name, phone, present(email), present(company)),
        PayloadRequest::Email {
            recipient,
            subject,
            body,
        } => mailto_payload(recipient, present(subject), present(body)),
        PayloadRequest::Sms { number, message } => sms_payload(number, present(message)),
        PayloadRequest::Wifi {
            ssid,
            password,
            security,
        } => wifi_payload(ssid, password, present(security)),
        PayloadRequest::Location {
            latitude,
            longitude,
            label,
        } => geo_payload(latitude, longitude, present(label)),
        PayloadRequest::Social {
            platform,
            handle,
            message,
        } => social_payload(*platform, handle, present(message)),
    };

    Ok(Payload(payload))
}

fn url_payload(url: &str) -> String {
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn vcard_payload(name: &str, phone: &str, email: Option<&str>, company: Option<&str>) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", name),
        format!("TEL:{}", phone),
    ];
    if let Some(email) = email {
        lines.push(format!("EMAIL:{}", email));
    }
    if let Some(company) = company {
        lines.push(format!("ORG:{}", company));
    }
    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

fn mailto_payload(recipient: &str, subject: Option<&str>, body: Option<&str>) -> String {
    let mut out = format!("mailto:{}", recipient);
    let mut params = Vec::new();
    if let Some(subject) = subject {
        params.push(format!("subject={}", encode(subject)));
    }
    if let Some(body) = body {
        params.push(format!("body={}", encode(body)));
    }
    if !params.is_empty() {
        out.push('?');
        out.push_str(&params.join("&"));
    }
    out
}

fn sms_payload(number: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("sms:{}?body={}", number, encode(message)),
        None => format!("sms:{}", number),
    }
}

fn wifi_payload(ssid: &str, password: &str, security: Option<&str>) -> String {
    let security = security.unwrap_or("WPA").to_uppercase();
    format!("WIFI:T:{};S:{};P:{};;", security, ssid, password)
}

fn geo_payload(latitude: &str, longitude: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!(
            "geo:{lat},{lon}?q={lat},{lon}({label})",
            lat = latitude,
            lon = longitude,
            label = encode(label)
        ),
        None => format!("geo:{},{}", latitude, longitude),
    }
}

fn social_payload(platform: SocialPlatform, handle: &str, message: Option<&str>) -> String {
    let mut out = format!("{}{}", platform.profile_base(), handle);
    if platform.supports_message() {
        if let Some(message) = message {
            out.push_str("?text=");
            out.push_str(&encode(message));
        }
    }
    out
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
