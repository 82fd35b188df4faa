//! Render orchestrator: the single subscriber to document mutations.
//!
//! # Responsibility
//! - Own the session document from bootstrap to shutdown.
//! - React to every applied mutation: persist, acknowledge, rebuild the
//!   list on structural changes, then re-render.
//! - Run the export capture with guaranteed restoration of transient
//!   presentation state.
//!
//! # Invariants
//! - `render` is idempotent and never mutates the document.
//! - Call sites dispatch mutations; they never hand-roll save/render
//!   sequences of their own.
//! - All work is synchronous run-to-completion; the document needs no
//!   locking because no two events are ever in flight at once.

use crate::model::document::Document;
use crate::model::mutation::{Change, Mutation, Section};
use crate::render::surface::{
    EditorListSurface, PreviewSurface, StatusSurface, SAVED_INDICATOR_VISIBLE,
};
use crate::repo::document_repo::{DocumentRepository, RepoResult};
use crate::service::export_service::{
    self, ExportError, PrintDialog, SnapshotRenderer, PAGE_WIDTH_MM,
};
use crate::service::input_binding::{bind, InputEvent};
use crate::template::registry::TemplateRegistry;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Orchestrates the one document of the editing session.
///
/// Dependencies are injected at construction; nothing here is reachable
/// through ambient globals, so each collaborator can be faked in tests.
pub struct RenderOrchestrator<R, P, L, S>
where
    R: DocumentRepository,
    P: PreviewSurface,
    L: EditorListSurface,
    S: StatusSurface,
{
    document: Document,
    repo: R,
    registry: TemplateRegistry,
    preview: P,
    editor_list: L,
    status: S,
}

impl<R, P, L, S> RenderOrchestrator<R, P, L, S>
where
    R: DocumentRepository,
    P: PreviewSurface,
    L: EditorListSurface,
    S: StatusSurface,
{
    /// Loads the stored document, or seeds a first-run one, and brings
    /// every surface up to date.
    ///
    /// A seeded first run is persisted immediately, so the next session
    /// starts from storage like any other.
    pub fn bootstrap(
        repo: R,
        registry: TemplateRegistry,
        preview: P,
        editor_list: L,
        mut status: S,
    ) -> RepoResult<Self> {
        let (document, seeded) = match repo.load()? {
            Some(document) => (document, false),
            None => (Document::first_run(), true),
        };
        if seeded {
            repo.save(&document)?;
            status.flash_saved(SAVED_INDICATOR_VISIBLE);
        }
        info!(
            "event=bootstrap module=render status=ok source={}",
            if seeded { "defaults" } else { "storage" }
        );

        let mut orchestrator = Self {
            document,
            repo,
            registry,
            preview,
            editor_list,
            status,
        };
        orchestrator.editor_list.rebuild(&orchestrator.document);
        orchestrator.render();
        Ok(orchestrator)
    }

    /// Read access for shells and tests.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Markup the preview currently shows for this document.
    pub fn preview_markup(&self) -> String {
        self.registry.render(&self.document)
    }

    /// Re-renders the preview from current document state.
    ///
    /// Total and idempotent: rendering twice with no mutation in between
    /// pushes byte-identical markup both times.
    pub fn render(&mut self) {
        let markup = self.preview_markup();
        self.preview.show(&markup);
    }

    /// Applies one mutation and reacts to what changed.
    ///
    /// `Noop` changes (stale index, unbound field) are swallowed without
    /// a save or re-render. Everything else persists, flashes the saved
    /// indicator, rebuilds the editor list when indices shifted, and
    /// re-renders the preview.
    pub fn dispatch(&mut self, mutation: Mutation) -> RepoResult<Change> {
        let change = self.document.apply(mutation);
        debug!("event=dispatch module=render change={change:?}");

        if change == Change::Noop {
            return Ok(change);
        }

        self.repo.save(&self.document)?;
        self.status.flash_saved(SAVED_INDICATOR_VISIBLE);
        if matches!(change, Change::Structural(_)) {
            self.editor_list.rebuild(&self.document);
        }
        self.render();
        Ok(change)
    }

    /// Binds one raw control event and dispatches the resulting mutation.
    pub fn handle_input(&mut self, event: InputEvent) -> RepoResult<Change> {
        match bind(event) {
            Some(mutation) => self.dispatch(mutation),
            None => Ok(Change::Noop),
        }
    }

    /// Appends a placeholder work entry.
    pub fn add_experience(&mut self) -> RepoResult<Change> {
        self.dispatch(Mutation::EntryAppend {
            section: Section::Work,
        })
    }

    /// Appends a placeholder education entry.
    pub fn add_education(&mut self) -> RepoResult<Change> {
        self.dispatch(Mutation::EntryAppend {
            section: Section::Education,
        })
    }

    /// Removes the entry at `index`; out-of-range indices are no-ops.
    pub fn remove_item(&mut self, section: Section, index: usize) -> RepoResult<Change> {
        self.dispatch(Mutation::EntryRemove { section, index })
    }

    /// Switches the active template. Unknown ids are stored as-is and
    /// fall back to the default at render time.
    pub fn set_template(&mut self, id: impl Into<String>) -> RepoResult<Change> {
        self.dispatch(Mutation::ScalarEdit {
            key: "template".to_string(),
            value: id.into(),
        })
    }

    /// Changes the accent color.
    pub fn set_color(&mut self, value: impl Into<String>) -> RepoResult<Change> {
        self.dispatch(Mutation::ScalarEdit {
            key: "color".to_string(),
            value: value.into(),
        })
    }

    /// Exports a snapshot of the current preview into `out_dir`.
    ///
    /// The capture width and the busy marker are transient presentation
    /// state: they are restored on every path, success or failure, before
    /// the result is interpreted. The snapshot reflects document state at
    /// capture start; edits racing a slow rasterizer land in the next
    /// export. Failures are reported once through the status surface and
    /// returned; there is no automatic retry.
    pub fn export(
        &mut self,
        renderer: &dyn SnapshotRenderer,
        out_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        self.preview.set_capture_width(PAGE_WIDTH_MM);
        self.status.set_export_busy(true);

        let result =
            export_service::export_document(&self.document, &self.registry, renderer, out_dir);

        self.preview.clear_capture_width();
        self.status.set_export_busy(false);

        if let Err(err) = &result {
            self.status.show_error(&err.to_string());
        }
        result
    }

    /// Hands the page to the platform print dialog, no parameters.
    pub fn print(&self, dialog: &dyn PrintDialog) {
        info!("event=print module=render status=delegated");
        dialog.open();
    }
}
