//! Input binding: free-form control events to typed mutations.
//!
//! # Responsibility
//! - Apply the dispatch rule of the editor surface: a control tagged with
//!   a section targets `document[section][index][field]`; otherwise the
//!   control's name is the top-level field key.
//!
//! # Invariants
//! - Binding never mutates; it only classifies. Events that carry neither
//!   a complete section tag nor a name bind to nothing and are dropped.

use crate::model::mutation::{Mutation, Section};
use log::debug;

/// A change event from one editor control, as raw as the surface emits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEvent {
    /// Control name, when the control is a top-level scalar input.
    pub name: Option<String>,
    /// Section tag carried by repeated-section controls.
    pub section: Option<String>,
    /// Entry index within the section. Must reflect the current list
    /// order; the binding does not compensate for stale indices.
    pub index: Option<usize>,
    /// Entry field name within the section.
    pub field: Option<String>,
    /// New control value.
    pub value: String,
}

impl InputEvent {
    /// Event from a plain named control.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Event from a `(section, index, field)` tagged control.
    pub fn sectioned(
        section: impl Into<String>,
        index: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            section: Some(section.into()),
            index: Some(index),
            field: Some(field.into()),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// Classifies one event into a mutation, or `None` when the event is not
/// bound to any document field.
pub fn bind(event: InputEvent) -> Option<Mutation> {
    if let (Some(section), Some(index), Some(field)) = (event.section, event.index, event.field) {
        let Some(section) = Section::parse(&section) else {
            debug!("event=bind_dropped module=input_binding reason=unknown_section tag={section}");
            return None;
        };
        return Some(Mutation::EntryFieldEdit {
            section,
            index,
            field,
            value: event.value,
        });
    }

    let name = event.name?;
    Some(Mutation::ScalarEdit {
        key: name,
        value: event.value,
    })
}
