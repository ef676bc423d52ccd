//! Text screens: banner, menus, render report and session summary.

use std::io::{self, Write};
use std::path::Path;

use super::choice::EXIT_CHOICE;
use crate::payload::{Payload, PayloadKind, SocialPlatform};
use crate::session::{list_images, Session};

const RULE_WIDTH: usize = 60;

/// ANSI clear screen + cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

pub fn clear(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", CLEAR)
}

pub fn title(out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^width$}", "QR CODE GENERATOR", width = RULE_WIDTH)?;
    writeln!(
        out,
        "{:^width$}",
        "Turn any information into a QR code",
        width = RULE_WIDTH
    )?;
    writeln!(out, "{}", rule)?;
    writeln!(out)
}

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "What kind of QR code do you want to generate?")?;
    writeln!(out)?;
    for kind in PayloadKind::ALL {
        writeln!(out, "{}. {}", kind.menu_number(), kind.menu_entry())?;
    }
    writeln!(out, "{}. Exit", EXIT_CHOICE)?;
    writeln!(out)
}

pub fn main_menu_prompt() -> String {
    format!("Select an option (1-{}): ", EXIT_CHOICE)
}

/// Header shown above a collection screen.
pub fn kind_header(out: &mut impl Write, kind: PayloadKind) -> io::Result<()> {
    writeln!(out, "{} QR CODE", kind.label().to_uppercase())?;
    writeln!(out)?;
    if kind == PayloadKind::Wifi {
        writeln!(
            out,
            "Creates a QR code that joins your WiFi network automatically."
        )?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn social_menu(out: &mut impl Write) -> io::Result<()> {
    for (i, platform) in SocialPlatform::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, platform)?;
    }
    writeln!(out)
}

pub fn social_menu_prompt() -> String {
    format!("Select the social network (1-{}): ", SocialPlatform::ALL.len())
}

pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "Error: {}", message)?;
    writeln!(out)
}

pub fn warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "Warning: {}", message)
}

pub fn generating(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Generating QR code...")?;
    writeln!(out)
}

/// Terminal rendering followed by the saved-file report.
pub fn render_report(
    out: &mut impl Write,
    terminal: &str,
    path: &Path,
    kind: PayloadKind,
    width: u32,
    payload: &Payload,
) -> io::Result<()> {
    writeln!(out, "Your QR code:")?;
    writeln!(out, "{}", terminal)?;
    writeln!(out, "QR code generated successfully!")?;
    writeln!(out, "Saved to: {}", path.display())?;
    writeln!(out, "Type: {}", kind.label())?;
    writeln!(out, "Size: {}x{} px", width, width)?;
    writeln!(out, "Format: PNG")?;
    writeln!(out)?;
    writeln!(out, "Encoded data:")?;
    writeln!(out, "\"{}\"", payload)?;
    writeln!(out)
}

pub fn repeat_prompt() -> &'static str {
    "Generate another QR code? (y/n): "
}

/// Closing screen: this session's files, the directory contents and tips.
pub fn summary(out: &mut impl Write, session: &Session, output_dir: &Path) -> io::Result<()> {
    writeln!(out, "SESSION COMPLETE")?;
    writeln!(out)?;
    writeln!(out, "QR codes generated this session: {}", session.count())?;
    for (i, file) in session.generated().iter().enumerate() {
        writeln!(out, "   {}. [{}] {}", i + 1, file.kind, file.path.display())?;
    }
    writeln!(out, "Location: {}", output_dir.display())?;
    writeln!(out)?;

    match list_images(output_dir) {
        Ok(names) => {
            writeln!(out, "Images in output directory: {}", names.len())?;
            for (i, name) in names.iter().enumerate() {
                writeln!(out, "   {}. {}", i + 1, name)?;
            }
        }
        Err(e) => {
            log::warn!("{}", e);
            writeln!(out, "No files could be listed.")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Tips for using your QR codes:")?;
    writeln!(out, "   - Scan them with your phone camera")?;
    writeln!(out, "   - Share them on social networks")?;
    writeln!(out, "   - Print them on business cards")?;
    writeln!(out, "   - Use them on restaurant menus")?;
    writeln!(out, "   - Add them to your presentations")?;
    writeln!(out)?;
    writeln!(out, "Thanks for using qr-forge!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_main_menu_lists_nine_options() {
        let text = render(|out| main_menu(out));
        for n in 1..=9 {
            assert!(text.contains(&format!("{}. ", n)), "missing option {}", n);
        }
        assert!(text.contains("9. Exit"));
        assert!(text.contains("3. Contact (vCard)"));
    }

    #[test]
    fn test_wifi_header_has_explanation() {
        let text = render(|out| kind_header(out, PayloadKind::Wifi));
        assert!(text.contains("WIFI QR CODE"));
        assert!(text.contains("joins your WiFi"));
        let text = render(|out| kind_header(out, PayloadKind::Url));
        assert!(!text.contains("joins your WiFi"));
    }

    #[test]
    fn test_summary_lists_session_and_directory() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("url_1.png"), b"").unwrap();
        let mut session = Session::new();
        session.record(PayloadKind::Url, tmp.path().join("url_1.png"));

        let text = render(|out| summary(out, &session, tmp.path()));
        assert!(text.contains("QR codes generated this session: 1"));
        assert!(text.contains("[URL]"));
        assert!(text.contains("Images in output directory: 1"));
        assert!(text.contains("url_1.png"));
    }

    #[test]
    fn test_summary_degrades_when_listing_fails() {
        let session = Session::new();
        let missing = PathBuf::from("/definitely/not/here/qr_codes");
        let text = render(|out| summary(out, &session, &missing));
        assert!(text.contains("QR codes generated this session: 0"));
        assert!(text.contains("No files could be listed."));
    }
}
