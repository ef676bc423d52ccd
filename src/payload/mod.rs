//! Payload requests and the formatting rules that turn them into QR payloads.
//!
//! A [`PayloadRequest`] carries the fields the user typed for one kind of QR
//! code. [`format`] validates it and builds the canonical [`Payload`] string
//! (vCard, `mailto:`, `sms:`, `WIFI:`, `geo:` or a social profile URL).

mod format;
mod kind;
mod request;

pub use format::{format, Payload};
pub use kind::{PayloadKind, SocialPlatform};
pub use request::PayloadRequest;
