//! Filesystem-safe names for generated QR images.
//!
//! A name is `<prefix>_<token>` or `<prefix>_<slug>_<token>`, where the slug
//! comes from the record's identifying field and the token is a millisecond
//! timestamp that never repeats within a process.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::payload::PayloadRequest;

/// Image file extension.
pub const IMAGE_EXTENSION: &str = "png";

/// Filename stem for one generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName(String);

impl OutputName {
    /// Build a name for `request` with the given uniqueness token.
    pub fn new(request: &PayloadRequest, token: u128) -> Self {
        let prefix = request.kind().file_prefix();
        let slug = request.identifying_name().map(slugify).unwrap_or_default();
        if slug.is_empty() {
            Self(format!("{}_{}", prefix, token))
        } else {
            Self(format!("{}_{}_{}", prefix, slug, token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full image path inside `dir`.
    pub fn image_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.0, IMAGE_EXTENSION))
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn free text into a whitespace-free, separator-free filename fragment.
///
/// Whitespace runs and filename-hostile characters collapse to a single `_`;
/// leading and trailing `_`/`.` are removed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;

    for c in text.chars() {
        if c.is_whitespace() || is_reserved(c) {
            pending_sep = true;
            continue;
        }
        if pending_sep && !slug.is_empty() {
            slug.push('_');
        }
        pending_sep = false;
        slug.push(c);
    }

    slug.trim_matches(|c| c == '_' || c == '.').to_string()
}

fn is_reserved(c: char) -> bool {
    c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// Source of strictly increasing millisecond tokens.
#[derive(Debug, Default)]
pub struct TokenSource {
    last: Option<u128>,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next token from the system clock.
    pub fn next_token(&mut self) -> u128 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.next_after(now)
    }

    /// Next token given the current time; bumps past the previous token if
    /// the clock has not moved forward.
    pub fn next_after(&mut self, now_millis: u128) -> u128 {
        let token = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(token);
        token
    }
}
