//! Resume document model.
//!
//! # Responsibility
//! - Define the canonical resume record shared by editing, persistence and
//!   rendering.
//! - Provide first-run seeding and placeholder entry constructors.
//!
//! # Invariants
//! - Every scalar key is always present; missing stored values decode to
//!   the field default (`serde(default)`), never to an absent state.
//! - `work` and `education` are order-significant; array position is the
//!   only entry identity.
//! - Unknown top-level string keys are retained in `extra` and survive a
//!   storage round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template id used when no stored document exists or when the stored id
/// is missing from storage.
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Accent color used when no stored document exists.
pub const DEFAULT_COLOR: &str = "#2563eb";

/// One position in the work-history section.
///
/// All fields are free text; ordering and formatting are the concern of
/// templates, not the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl WorkEntry {
    /// Example-valued entry appended by the add-experience entry point so
    /// the user sees the expected shape of each field.
    pub fn placeholder() -> Self {
        Self {
            title: "Job Title".to_string(),
            company: "Company Name".to_string(),
            start_date: "2022".to_string(),
            end_date: "Present".to_string(),
            description: "Describe your responsibilities and achievements...".to_string(),
        }
    }

    /// Writes one named field. Returns `false` when `field` is not a
    /// work-entry field; the caller treats that as a no-op.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "title" => self.title = value,
            "company" => self.company = value,
            "startDate" => self.start_date = value,
            "endDate" => self.end_date = value,
            "description" => self.description = value,
            _ => return false,
        }
        true
    }
}

/// One position in the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(rename = "gradDate", default)]
    pub grad_date: String,
}

impl EducationEntry {
    /// Example-valued entry appended by the add-education entry point.
    pub fn placeholder() -> Self {
        Self {
            school: "University Name".to_string(),
            degree: "Degree / Major".to_string(),
            grad_date: "2024".to_string(),
        }
    }

    /// Writes one named field. Returns `false` for unknown field names.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "school" => self.school = value,
            "degree" => self.degree = value,
            "gradDate" => self.grad_date = value,
            _ => return false,
        }
        true
    }
}

/// The full resume record.
///
/// Field names in the serialized form are the storage compatibility
/// surface; renames below keep the on-disk JSON identical to what earlier
/// versions of the editor wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "jobTitle", default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Tolerant-write overflow: top-level keys the editor does not know
    /// about are stored here instead of being rejected.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for Document {
    fn default() -> Self {
        Self {
            template: default_template(),
            color: default_color(),
            full_name: String::new(),
            job_title: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            website: String::new(),
            summary: String::new(),
            skills: String::new(),
            work: Vec::new(),
            education: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Document {
    /// First-run document: defaults plus one placeholder entry per
    /// repeated section, so a fresh editor never opens on empty lists.
    pub fn first_run() -> Self {
        let mut document = Self::default();
        document.work.push(WorkEntry::placeholder());
        document.education.push(EducationEntry::placeholder());
        document
    }

    /// Reads one top-level scalar by its serialized key name.
    ///
    /// Unknown keys resolve through the tolerant-write overflow map.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        let value = match key {
            "template" => &self.template,
            "color" => &self.color,
            "fullName" => &self.full_name,
            "jobTitle" => &self.job_title,
            "email" => &self.email,
            "phone" => &self.phone,
            "location" => &self.location,
            "website" => &self.website,
            "summary" => &self.summary,
            "skills" => &self.skills,
            _ => return self.extra.get(key).map(String::as_str),
        };
        Some(value.as_str())
    }

    /// Writes one top-level scalar by its serialized key name.
    ///
    /// Unknown keys are accepted and stored in the overflow map
    /// (tolerant-write), matching free-form form behavior.
    pub fn set_scalar(&mut self, key: &str, value: String) {
        match key {
            "template" => self.template = value,
            "color" => self.color = value,
            "fullName" => self.full_name = value,
            "jobTitle" => self.job_title = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "location" => self.location = value,
            "website" => self.website = value,
            "summary" => self.summary = value,
            "skills" => self.skills = value,
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}
