//! Subcommand handlers for config actions.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};

/// Handle config subcommand actions.
///
/// `config_path` is the `--config` override, if any.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<(), String> {
    let path = config_path.map(PathBuf::from).unwrap_or_else(default_path);
    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&path)).map_err(|e| e.to_string())?;
            let stdout = std::io::stdout();
            show_config(&mut stdout.lock(), &config, &path).map_err(|e| e.to_string())
        }
        ConfigAction::Init => {
            init_config(&path)?;
            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}

/// Print the effective settings and where they came from.
pub fn show_config(out: &mut impl Write, config: &Config, path: &Path) -> std::io::Result<()> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Output directory: {}", config.output.dir.display())?;
    writeln!(out, "  Dark color: {}", config.render.dark)?;
    writeln!(out, "  Light color: {}", config.render.light)?;
    writeln!(out, "  Margin: {} modules", config.render.margin)?;
    writeln!(
        out,
        "  Image size: {}x{} px",
        config.render.width, config.render.width
    )?;
    writeln!(
        out,
        "  Clear screen: {}",
        if config.ui.clear_screen { "yes" } else { "no" }
    )?;
    writeln!(out)?;

    if path.exists() {
        writeln!(out, "Config file: {} (exists)", path.display())
    } else {
        writeln!(out, "Config file: {} (not found)", path.display())
    }
}

/// Write the commented default config to `path`, refusing to overwrite.
pub fn init_config(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!(
            "Config file already exists: {}\nUse 'qr-forge config show' to view current settings.",
            path.display()
        ));
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating config directory: {}", e))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML)
        .map_err(|e| format!("Error writing config file: {}", e))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}
