//! QR rendering collaborator.
//!
//! The menu controller only sees the [`QrRenderer`] trait. [`QrCodeRenderer`]
//! is the production implementation: the `qrcode` crate builds the symbol,
//! and this module draws it as terminal half-blocks or as a PNG via `image`.

use image::{Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode};
use std::path::Path;

use crate::config::{parse_hex_color, ConfigError, RenderConfig, MAX_IMAGE_WIDTH};
use crate::error::RenderError;
use crate::payload::Payload;

/// Quiet zone, in modules, around the terminal rendering.
const TERMINAL_BORDER: usize = 2;

/// Turns a payload into something a phone can scan.
pub trait QrRenderer {
    /// Text rendering suitable for printing to a terminal.
    fn render_terminal(&self, payload: &Payload) -> Result<String, RenderError>;

    /// Write a PNG image of the payload to `path` and return its side length
    /// in pixels.
    fn render_png(&self, payload: &Payload, path: &Path) -> Result<u32, RenderError>;
}

/// Image options for [`QrCodeRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub dark: [u8; 3],
    pub light: [u8; 3],
    /// Quiet zone in modules
    pub margin: u32,
    /// Width and height in pixels
    pub width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark: [0, 0, 0],
            light: [255, 255, 255],
            margin: 2,
            width: 400,
        }
    }
}

impl TryFrom<&RenderConfig> for RenderOptions {
    type Error = ConfigError;

    fn try_from(config: &RenderConfig) -> Result<Self, Self::Error> {
        config.check_limits()?;
        Ok(Self {
            dark: parse_hex_color(&config.dark)?,
            light: parse_hex_color(&config.light)?,
            margin: config.margin,
            width: config.width,
        })
    }
}

/// Renderer backed by the `qrcode` and `image` crates.
#[derive(Debug, Clone, Default)]
pub struct QrCodeRenderer {
    options: RenderOptions,
}

impl QrCodeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn encode(&self, payload: &Payload) -> Result<QrCode, RenderError> {
        Ok(QrCode::with_error_correction_level(
            payload.as_str(),
            EcLevel::M,
        )?)
    }

    /// Draw the symbol into an image buffer.
    ///
    /// The image is `width` pixels square unless the symbol plus margin has
    /// more modules than that, in which case each module gets one pixel.
    pub fn image(&self, payload: &Payload) -> Result<RgbImage, RenderError> {
        let code = self.encode(payload)?;
        draw_image(&code, &self.options)
    }
}

impl QrRenderer for QrCodeRenderer {
    fn render_terminal(&self, payload: &Payload) -> Result<String, RenderError> {
        let code = self.encode(payload)?;
        Ok(draw_half_blocks(&code, TERMINAL_BORDER))
    }

    fn render_png(&self, payload: &Payload, path: &Path) -> Result<u32, RenderError> {
        let img = self.image(payload)?;
        img.save(path)?;
        log::info!(
            "Saved {}x{} QR image to {}",
            img.width(),
            img.height(),
            path.display()
        );
        Ok(img.width())
    }
}

fn is_dark(code: &QrCode, x: isize, y: isize) -> bool {
    let size = code.width() as isize;
    if x < 0 || y < 0 || x >= size || y >= size {
        return false;
    }
    code[(x as usize, y as usize)] == Color::Dark
}

fn draw_image(code: &QrCode, options: &RenderOptions) -> Result<RgbImage, RenderError> {
    let margin = options.margin as usize;
    let modules = margin
        .checked_mul(2)
        .and_then(|m| m.checked_add(code.width()))
        .ok_or(RenderError::ImageTooLarge {
            max: MAX_IMAGE_WIDTH,
        })?;
    let width = (options.width as usize).max(modules);
    if width > MAX_IMAGE_WIDTH as usize {
        return Err(RenderError::ImageTooLarge {
            max: MAX_IMAGE_WIDTH,
        });
    }
    let side = width as u32;

    Ok(RgbImage::from_fn(side, side, |x, y| {
        // Nearest-neighbour: map each pixel back onto the module grid.
        let mx = (x as usize * modules / width) as isize - margin as isize;
        let my = (y as usize * modules / width) as isize - margin as isize;
        if is_dark(code, mx, my) {
            Rgb(options.dark)
        } else {
            Rgb(options.light)
        }
    }))
}

/// Two module rows per text line using upper/lower half blocks.
fn draw_half_blocks(code: &QrCode, border: usize) -> String {
    let size = code.width() as isize;
    let border = border as isize;
    let mut out = String::new();

    let mut y = -border;
    while y < size + border {
        for x in -border..size + border {
            let top = is_dark(code, x, y);
            let bottom = is_dark(code, x, y + 1);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
        y += 2;
    }

    out
}
