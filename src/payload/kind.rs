//! Payload kinds and social platforms, with their menu numbers.

use std::fmt;

use crate::error::InvalidSelectionError;

/// The eight kinds of QR payload the tool can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Url,
    Text,
    Contact,
    Email,
    Sms,
    Wifi,
    Location,
    Social,
}

impl PayloadKind {
    /// All kinds in main-menu order.
    pub const ALL: [PayloadKind; 8] = [
        PayloadKind::Url,
        PayloadKind::Text,
        PayloadKind::Contact,
        PayloadKind::Email,
        PayloadKind::Sms,
        PayloadKind::Wifi,
        PayloadKind::Location,
        PayloadKind::Social,
    ];

    /// Human-readable label shown in menus and reports.
    pub fn label(&self) -> &'static str {
        match self {
            PayloadKind::Url => "URL",
            PayloadKind::Text => "Text",
            PayloadKind::Contact => "Contact",
            PayloadKind::Email => "Email",
            PayloadKind::Sms => "SMS",
            PayloadKind::Wifi => "WiFi",
            PayloadKind::Location => "Location",
            PayloadKind::Social => "Social",
        }
    }

    /// Longer description used as the main-menu entry.
    pub fn menu_entry(&self) -> &'static str {
        match self {
            PayloadKind::Url => "URL / Web page",
            PayloadKind::Text => "Text message",
            PayloadKind::Contact => "Contact (vCard)",
            PayloadKind::Email => "Email",
            PayloadKind::Sms => "SMS",
            PayloadKind::Wifi => "WiFi",
            PayloadKind::Location => "GPS location",
            PayloadKind::Social => "Social networks",
        }
    }

    /// Filename prefix for generated images.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            PayloadKind::Url => "url",
            PayloadKind::Text => "text",
            PayloadKind::Contact => "contact",
            PayloadKind::Email => "email",
            PayloadKind::Sms => "sms",
            PayloadKind::Wifi => "wifi",
            PayloadKind::Location => "location",
            PayloadKind::Social => "social",
        }
    }

    /// Main-menu number (1-8).
    pub fn menu_number(&self) -> u8 {
        match self {
            PayloadKind::Url => 1,
            PayloadKind::Text => 2,
            PayloadKind::Contact => 3,
            PayloadKind::Email => 4,
            PayloadKind::Sms => 5,
            PayloadKind::Wifi => 6,
            PayloadKind::Location => 7,
            PayloadKind::Social => 8,
        }
    }

    /// Look up a kind by its main-menu number.
    pub fn from_menu_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.menu_number() == number)
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Social networks with a known profile URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    WhatsApp,
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
}

impl SocialPlatform {
    /// All platforms in sub-menu order.
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::WhatsApp,
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::LinkedIn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SocialPlatform::WhatsApp => "WhatsApp",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::LinkedIn => "LinkedIn",
        }
    }

    /// Question asked for the handle on this platform.
    pub fn handle_prompt(&self) -> &'static str {
        match self {
            SocialPlatform::WhatsApp => "WhatsApp number (with country code): ",
            SocialPlatform::Instagram => "Instagram username: ",
            SocialPlatform::Facebook => "Facebook user or page: ",
            SocialPlatform::Twitter => "Twitter/X username: ",
            SocialPlatform::LinkedIn => "LinkedIn username: ",
        }
    }

    /// Profile URL base; the handle is appended verbatim.
    pub fn profile_base(&self) -> &'static str {
        match self {
            SocialPlatform::WhatsApp => "https://wa.me/",
            SocialPlatform::Instagram => "https://instagram.com/",
            SocialPlatform::Facebook => "https://facebook.com/",
            SocialPlatform::Twitter => "https://twitter.com/",
            SocialPlatform::LinkedIn => "https://linkedin.com/in/",
        }
    }

    /// Whether the platform accepts a prefilled message.
    pub fn supports_message(&self) -> bool {
        matches!(self, SocialPlatform::WhatsApp)
    }

    /// Parse a sub-menu answer (`1`-`5`).
    pub fn from_choice(input: &str) -> Result<Self, InvalidSelectionError> {
        let invalid = || InvalidSelectionError::new(input, Self::ALL.len());
        let trimmed = input.trim();
        Self::ALL
            .iter()
            .zip(1usize..)
            .find(|(_, n)| n.to_string() == trimmed)
            .map(|(platform, _)| *platform)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
