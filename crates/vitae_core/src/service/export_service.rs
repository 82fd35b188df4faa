//! Snapshot export and print delegation seams.
//!
//! # Responsibility
//! - Define the opaque collaborator contracts for rasterization and the
//!   platform print dialog.
//! - Turn rendered markup into the exported artifact file.
//!
//! # Invariants
//! - The artifact is a single page at a fixed 210 mm width with a fixed
//!   `.pdf` extension, named after the person (fallback `Resume`).
//! - Export failures are reported, never retried automatically.

use crate::model::document::Document;
use crate::template::registry::TemplateRegistry;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Capture width applied to the preview while a snapshot is taken.
pub const PAGE_WIDTH_MM: u32 = 210;

/// Extension of the exported artifact.
pub const ARTIFACT_EXTENSION: &str = "pdf";

/// Artifact base name used when the document has no full name.
pub const FALLBACK_BASENAME: &str = "Resume";

/// Rasterization failure reported by a snapshot renderer.
#[derive(Debug)]
pub struct SnapshotError {
    pub message: String,
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot failed: {}", self.message)
    }
}

impl Error for SnapshotError {}

/// Opaque rasterizer turning rendered markup into the bytes of a
/// single-page image-based document.
///
/// The engine treats the renderer as a black box; the embedding shell
/// supplies the real implementation.
pub trait SnapshotRenderer {
    fn rasterize(&self, markup: &str, page_width_mm: u32) -> Result<Vec<u8>, SnapshotError>;
}

/// Opaque platform print service. Delegated to with no parameters.
pub trait PrintDialog {
    fn open(&self);
}

/// Export failure taxonomy.
#[derive(Debug)]
pub enum ExportError {
    Snapshot(SnapshotError),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write artifact: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<SnapshotError> for ExportError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// File name of the exported artifact for this document.
pub fn artifact_file_name(document: &Document) -> String {
    let base = if document.full_name.is_empty() {
        FALLBACK_BASENAME
    } else {
        document.full_name.as_str()
    };
    format!("{base}.{ARTIFACT_EXTENSION}")
}

/// Renders the document, rasterizes the markup and writes the artifact
/// into `out_dir`. Returns the artifact path.
pub fn export_document(
    document: &Document,
    registry: &TemplateRegistry,
    renderer: &dyn SnapshotRenderer,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let markup = registry.render(document);
    let bytes = renderer.rasterize(&markup, PAGE_WIDTH_MM)?;
    let path = out_dir.join(artifact_file_name(document));
    fs::write(&path, &bytes)?;
    info!(
        "event=export module=export status=ok bytes={} path={}",
        bytes.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::artifact_file_name;
    use crate::model::document::Document;

    #[test]
    fn artifact_name_uses_full_name_with_fallback() {
        let mut document = Document::default();
        assert_eq!(artifact_file_name(&document), "Resume.pdf");
        document.full_name = "Ada Lovelace".to_string();
        assert_eq!(artifact_file_name(&document), "Ada Lovelace.pdf");
    }
}
