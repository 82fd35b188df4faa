//! Tagged mutation requests and the single apply interpreter.
//!
//! # Responsibility
//! - Express every editor write as one value of the `Mutation` sum type.
//! - Centralize the index-shift contract for repeated sections in
//!   `Document::apply`.
//!
//! # Invariants
//! - `apply` is synchronous and total over well-formed input: out-of-range
//!   indices and unknown entry fields degrade to `Change::Noop`, never to
//!   an error or panic.
//! - Removal shifts all later indices down by one; callers must address
//!   entries by their current index.

use crate::model::document::{Document, EducationEntry, WorkEntry};

/// A repeated section of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Work,
    Education,
}

impl Section {
    /// Serialized section tag, as carried by editor controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
        }
    }

    /// Parses a control-supplied section tag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "work" => Some(Self::Work),
            "education" => Some(Self::Education),
            _ => None,
        }
    }
}

/// One editor write, ready for `Document::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Top-level scalar write. Unknown keys are accepted (tolerant write).
    ScalarEdit { key: String, value: String },
    /// Field write on one entry of a repeated section.
    EntryFieldEdit {
        section: Section,
        index: usize,
        field: String,
        value: String,
    },
    /// Appends the section's placeholder entry.
    EntryAppend { section: Section },
    /// Removes the entry at `index`; later entries shift down by one.
    EntryRemove { section: Section, index: usize },
}

/// What a mutation changed, for the orchestrator to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A scalar changed; the preview must re-render.
    Scalar,
    /// An existing entry changed in place; the preview must re-render.
    EntryField(Section),
    /// An entry was added or removed; editor-list indices shifted, so the
    /// list UI must be rebuilt before the preview re-renders.
    Structural(Section),
    /// Nothing changed (stale index or unbound field).
    Noop,
}

impl Document {
    /// Applies one mutation and reports what changed.
    ///
    /// This is the only write path into the document; every branch below
    /// either mutates or returns `Change::Noop`, keeping the record
    /// structurally valid in all cases.
    pub fn apply(&mut self, mutation: Mutation) -> Change {
        match mutation {
            Mutation::ScalarEdit { key, value } => {
                self.set_scalar(&key, value);
                Change::Scalar
            }
            Mutation::EntryFieldEdit {
                section,
                index,
                field,
                value,
            } => {
                let written = match section {
                    Section::Work => self
                        .work
                        .get_mut(index)
                        .is_some_and(|entry| entry.set_field(&field, value)),
                    Section::Education => self
                        .education
                        .get_mut(index)
                        .is_some_and(|entry| entry.set_field(&field, value)),
                };
                if written {
                    Change::EntryField(section)
                } else {
                    log::debug!(
                        "event=mutation_noop module=model section={} index={} field={}",
                        section.as_str(),
                        index,
                        field
                    );
                    Change::Noop
                }
            }
            Mutation::EntryAppend { section } => {
                match section {
                    Section::Work => self.work.push(WorkEntry::placeholder()),
                    Section::Education => self.education.push(EducationEntry::placeholder()),
                }
                Change::Structural(section)
            }
            Mutation::EntryRemove { section, index } => {
                let removed = match section {
                    Section::Work => {
                        if index < self.work.len() {
                            self.work.remove(index);
                            true
                        } else {
                            false
                        }
                    }
                    Section::Education => {
                        if index < self.education.len() {
                            self.education.remove(index);
                            true
                        } else {
                            false
                        }
                    }
                };
                if removed {
                    Change::Structural(section)
                } else {
                    // Stale index from a rapid double-click on a remove
                    // control; list membership already changed.
                    log::debug!(
                        "event=mutation_noop module=model section={} index={} op=remove",
                        section.as_str(),
                        index
                    );
                    Change::Noop
                }
            }
        }
    }
}
