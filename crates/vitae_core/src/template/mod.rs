//! Template dispatch for preview and export markup.
//!
//! # Responsibility
//! - Map template ids to pure rendering functions.
//! - Guarantee a default template for unknown ids.
//!
//! # Invariants
//! - Rendering functions are side-effect free: identical `(document,
//!   color)` inputs produce byte-identical markup (the export path
//!   snapshots rendered output and relies on this).
//! - Every template reads all scalar fields and iterates `work` and
//!   `education` in array order; empty fields render as empty.

pub mod builtin;
pub mod registry;
