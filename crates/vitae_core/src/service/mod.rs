//! Editing use-case services.
//!
//! # Responsibility
//! - Translate free-form editor events into typed mutations.
//! - Provide the export/print seams and the assist stub.

pub mod assist;
pub mod export_service;
pub mod input_binding;
