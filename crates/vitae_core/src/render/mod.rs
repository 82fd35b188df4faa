//! Render orchestration over injected display surfaces.
//!
//! # Responsibility
//! - Own the session's document and run the mutate/persist/render cycle
//!   for every editor event.
//! - Keep the preview, the editor list and the status indicator in sync
//!   with the document.

pub mod orchestrator;
pub mod surface;
