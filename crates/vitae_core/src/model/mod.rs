//! Canonical resume document model and mutation rules.
//!
//! # Responsibility
//! - Define the single record every other layer reads and writes.
//! - Interpret tagged mutation requests through one exhaustive apply path.
//!
//! # Invariants
//! - Entry identity is positional: display order equals array order, and
//!   removal shifts later indices down by one.
//! - No mutation can leave the record structurally invalid.

pub mod document;
pub mod mutation;
