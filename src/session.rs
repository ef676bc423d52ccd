//! Session - the files generated during one run of the program.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;
use crate::output_name::IMAGE_EXTENSION;
use crate::payload::PayloadKind;

/// One successfully rendered QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: PayloadKind,
    pub path: PathBuf,
}

/// Record of every image generated in this process.
///
/// Only successful renders are recorded.
#[derive(Debug, Default)]
pub struct Session {
    generated: Vec<GeneratedFile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: PayloadKind, path: PathBuf) {
        log::debug!("Recorded {} QR code: {}", kind, path.display());
        self.generated.push(GeneratedFile { kind, path });
    }

    pub fn count(&self) -> usize {
        self.generated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }

    pub fn generated(&self) -> &[GeneratedFile] {
        &self.generated
    }
}

/// Create the output directory if it is missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), FilesystemError> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| FilesystemError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    log::info!("Created output directory {}", dir.display());
    Ok(())
}

/// Names of the PNG files currently in `dir`, sorted.
pub fn list_images(dir: &Path) -> Result<Vec<String>, FilesystemError> {
    let list_err = |source| FilesystemError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(IMAGE_EXTENSION));
        if is_image {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
