//! Core state/render engine for the vitae resume editor.
//! This crate is the single source of truth for document invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod template;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Document, EducationEntry, WorkEntry, DEFAULT_COLOR, DEFAULT_TEMPLATE};
pub use model::mutation::{Change, Mutation, Section};
pub use render::orchestrator::RenderOrchestrator;
pub use render::surface::{
    EditorListSurface, PreviewSurface, StatusSurface, SAVED_INDICATOR_VISIBLE,
};
pub use repo::document_repo::{
    DocumentRepository, RepoError, RepoResult, SqliteDocumentRepository, DOCUMENT_KEY,
};
pub use service::assist::assist_reply;
pub use service::export_service::{
    ExportError, PrintDialog, SnapshotError, SnapshotRenderer, ARTIFACT_EXTENSION, PAGE_WIDTH_MM,
};
pub use service::input_binding::{bind, InputEvent};
pub use template::registry::{TemplateFn, TemplateRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
