//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the document store contract used by the render orchestrator.
//! - Isolate SQLite and encoding details from editing/rendering logic.
//!
//! # Invariants
//! - Load paths degrade undecodable payloads to "absent" instead of
//!   returning partially-typed documents.

pub mod document_repo;
