//! In-memory template registry with a guaranteed default.

use crate::model::document::Document;
use crate::template::builtin;
use log::debug;
use std::collections::BTreeMap;

/// A pure rendering function: `(document, accent color) -> markup`.
pub type TemplateFn = fn(&Document, &str) -> String;

/// Registry of named templates.
///
/// Construction always installs a default entry, so `resolve` is total:
/// unknown ids silently fall back instead of failing render.
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateFn>,
    default_id: String,
}

impl TemplateRegistry {
    /// Creates a registry seeded with its default template.
    pub fn new(default_id: impl Into<String>, default_template: TemplateFn) -> Self {
        let default_id = default_id.into();
        let mut templates = BTreeMap::new();
        templates.insert(default_id.clone(), default_template);
        Self {
            templates,
            default_id,
        }
    }

    /// Registry preloaded with the built-in templates; `modern` is the
    /// default.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new("modern", builtin::modern as TemplateFn);
        registry.register("classic", builtin::classic);
        registry.register("minimal", builtin::minimal);
        registry
    }

    /// Adds or replaces one template.
    pub fn register(&mut self, id: impl Into<String>, template: TemplateFn) {
        self.templates.insert(id.into(), template);
    }

    /// Id of the fallback template.
    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Registered template ids, in stable order.
    pub fn ids(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Resolves an id to its rendering function, falling back to the
    /// default for unknown ids.
    pub fn resolve(&self, id: &str) -> TemplateFn {
        if let Some(template) = self.templates.get(id) {
            return *template;
        }
        debug!("event=template_fallback module=template requested={id} used={}", self.default_id);
        self.templates[&self.default_id]
    }

    /// Renders the document with its selected template and accent color.
    pub fn render(&self, document: &Document) -> String {
        self.resolve(&document.template)(document, &document.color)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
