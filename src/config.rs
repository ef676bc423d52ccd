//! Configuration file handling for qr-forge.
//!
//! Loads configuration from `~/.config/qr-forge/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for qr-forge.
/// Loaded from ~/.config/qr-forge/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// Module color, `#RRGGBB`
    #[serde(default = "default_dark")]
    pub dark: String,
    /// Background color, `#RRGGBB`
    #[serde(default = "default_light")]
    pub light: String,
    /// Quiet zone around the symbol, in modules
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Image width and height in pixels
    #[serde(default = "default_width")]
    pub width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dark: default_dark(),
            light: default_light(),
            margin: default_margin(),
            width: default_width(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("qr_codes")
}

fn default_dark() -> String {
    "#000000".to_string()
}

fn default_light() -> String {
    "#FFFFFF".to_string()
}

/// Largest accepted `[render] width`, in pixels.
pub const MAX_IMAGE_WIDTH: u32 = 8192;

/// Largest accepted `[render] margin`, in modules.
pub const MAX_MARGIN: u32 = 64;

fn default_margin() -> u32 {
    2
}

fn default_width() -> u32 {
    400
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| match e {
                ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text and check its render values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        parse_hex_color(&config.render.dark)?;
        parse_hex_color(&config.render.light)?;
        config.render.check_limits()?;
        Ok(config)
    }
}

impl RenderConfig {
    /// Reject sizes the renderer cannot allocate.
    pub fn check_limits(&self) -> Result<(), ConfigError> {
        check_range("width", self.width, 1, MAX_IMAGE_WIDTH)?;
        check_range("margin", self.margin, 0, MAX_MARGIN)
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into RGB bytes.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        value: value.to_string(),
    };
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidColor {
        value: String,
    },
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidColor { value } => {
                write!(
                    f,
                    "Invalid color '{}'. Use the #RRGGBB format, e.g. #000000",
                    value
                )
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid render {} {}. Use a value from {} to {}",
                    field, value, min, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidColor { .. } | ConfigError::OutOfRange { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("qr-forge").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/qr-forge/config.toml")
        })
}

/// Commented default config written by `qr-forge config init`.
pub const DEFAULT_CONFIG_TOML: &str = r##"# qr-forge configuration

[output]
# Directory for generated PNG files (relative to the working directory)
dir = "qr_codes"

[render]
# Module and background colors (#RRGGBB)
dark = "#000000"
light = "#FFFFFF"
# Quiet zone around the code, in modules
margin = 2
# Image width and height in pixels
width = 400

[ui]
# Clear the terminal before each screen
clear_screen = true
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.dir, PathBuf::from("qr_codes"));
        assert_eq!(config.render.dark, "#000000");
        assert_eq!(config.render.light, "#FFFFFF");
        assert_eq!(config.render.margin, 2);
        assert_eq!(config.render.width, 400);
        assert!(config.ui.clear_screen);
    }

    #[test]
    fn test_default_config_toml_matches_defaults() {
        let config = Config::parse(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse("[render]\nwidth = 800\n").unwrap();
        assert_eq!(config.render.width, 800);
        assert_eq!(config.render.margin, 2);
        assert_eq!(config.output.dir, PathBuf::from("qr_codes"));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = Config::parse("[render]\ndark = \"black\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
        assert!(err.to_string().contains("black"));
    }

    #[test]
    fn test_oversized_width_rejected() {
        let err = Config::parse("[render]\nwidth = 4294967295\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "width",
                value: 4294967295,
                ..
            }
        ));
        assert!(err.to_string().contains("from 1 to 8192"));
        assert!(Config::parse("[render]\nwidth = 200000\n").is_err());
        assert!(Config::parse("[render]\nwidth = 0\n").is_err());
        assert!(Config::parse("[render]\nwidth = 8192\n").is_ok());
    }

    #[test]
    fn test_oversized_margin_rejected() {
        let err = Config::parse("[render]\nmargin = 65\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "margin",
                ..
            }
        ));
        assert!(Config::parse("[render]\nmargin = 0\n").is_ok());
        assert!(Config::parse("[render]\nmargin = 64\n").is_ok());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex_color("FF8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_hex_color("#ffffff").unwrap(), [255, 255, 255]);
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render\nwidth = ").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_custom_output_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndir = \"codes\"\n[ui]\nclear_screen = false\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("codes"));
        assert!(!config.ui.clear_screen);
    }
}
