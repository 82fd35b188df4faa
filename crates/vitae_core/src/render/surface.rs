//! Display surface contracts implemented by the embedding shell.
//!
//! The engine never draws; it pushes state into these sinks and trusts
//! the shell to present it. All calls are synchronous and must not block.

use crate::model::document::Document;
use std::time::Duration;

/// How long the transient saved acknowledgment stays visible before the
/// surface auto-hides it.
pub const SAVED_INDICATOR_VISIBLE: Duration = Duration::from_secs(2);

/// Sink for rendered preview markup.
pub trait PreviewSurface {
    /// Replaces the displayed preview with `markup`.
    fn show(&mut self, markup: &str);
    /// Forces a fixed width ahead of a snapshot capture.
    fn set_capture_width(&mut self, width_mm: u32);
    /// Restores the natural preview width after a capture.
    fn clear_capture_width(&mut self);
}

/// Sink for the repeated-section input lists.
///
/// Rebuilt after every structural change: entry indices shift on
/// add/remove, and previously generated controls would otherwise address
/// the wrong entries.
pub trait EditorListSurface {
    fn rebuild(&mut self, document: &Document);
}

/// Sink for transient acknowledgments and error notifications.
pub trait StatusSurface {
    /// Shows the saved acknowledgment; the surface hides it after
    /// `visible_for`.
    fn flash_saved(&mut self, visible_for: Duration);
    /// Marks the export control busy/idle while a snapshot runs.
    fn set_export_busy(&mut self, busy: bool);
    /// Shows one blocking error notification.
    fn show_error(&mut self, message: &str);
}
