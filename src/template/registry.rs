//! Template registry for storing and selecting resume templates

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::resume::{SectionTitles, TitleOverride};
use crate::sections::{Section, TitledSection};
use crate::style::StyleOptions;

/// Id of the built-in template
pub const DEFAULT_TEMPLATE_ID: &str = "default";

/// Errors that can occur when loading or registering templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("failed to read template file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template file is not valid TOML or has the wrong shape
    #[error("failed to parse template TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Template has an empty id
    #[error("template id must not be empty")]
    MissingId,

    /// A template with this id is already registered
    #[error("duplicate template definition: {id}")]
    Duplicate { id: String },

    /// The section order lists a section twice
    #[error("template {id} lists section '{section}' more than once")]
    DuplicateSection { id: String, section: String },
}

/// Defaults a template contributes below the resume's own settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefaults {
    #[serde(default)]
    pub style: Option<StyleOptions>,
    #[serde(default)]
    pub section_titles: Option<SectionTitles>,
}

/// A named section sequence plus default style and titles
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Sections in render order
    pub sections: Vec<Section>,
    pub defaults: TemplateDefaults,
}

impl Template {
    /// The built-in layout: every section in the default order
    pub fn builtin_default() -> Self {
        let mut titles = SectionTitles::default();
        for section in TitledSection::ALL {
            titles.set(
                section,
                TitleOverride::Text(section.fallback_title().to_string()),
            );
        }

        Self {
            id: DEFAULT_TEMPLATE_ID.to_string(),
            name: "Default resume layout".to_string(),
            sections: Section::DEFAULT_ORDER.to_vec(),
            defaults: TemplateDefaults {
                style: None,
                section_titles: Some(titles),
            },
        }
    }

    /// Check the invariants a registered template must hold
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.id.trim().is_empty() {
            return Err(TemplateError::MissingId);
        }

        for (i, section) in self.sections.iter().enumerate() {
            if self.sections[..i].contains(section) {
                return Err(TemplateError::DuplicateSection {
                    id: self.id.clone(),
                    section: section.id().to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Registry of available templates.
///
/// The built-in default is always present, so lookups with an unknown or
/// missing id still resolve to a template.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    default: Template,
    templates: HashMap<String, Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Create a registry holding only the built-in template
    pub fn new() -> Self {
        Self {
            default: Template::builtin_default(),
            templates: HashMap::new(),
        }
    }

    /// Register an additional template
    pub fn register(&mut self, template: Template) -> Result<(), TemplateError> {
        template.validate()?;
        if self.contains(&template.id) {
            return Err(TemplateError::Duplicate {
                id: template.id.clone(),
            });
        }
        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&Template> {
        if id == self.default.id {
            return Some(&self.default);
        }
        self.templates.get(id)
    }

    /// Get a template by id, falling back to the built-in default
    pub fn get_or_default(&self, id: Option<&str>) -> &Template {
        id.and_then(|id| self.get(id)).unwrap_or(&self.default)
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = std::iter::once(self.default.id.as_str())
            .chain(self.templates.keys().map(|s| s.as_str()))
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> Template {
        Template {
            id: "compact".into(),
            name: "Compact".into(),
            sections: vec![Section::Contact, Section::Experience],
            defaults: TemplateDefaults::default(),
        }
    }

    #[test]
    fn test_builtin_default() {
        let template = Template::builtin_default();
        assert_eq!(template.id, "default");
        assert_eq!(template.sections, Section::DEFAULT_ORDER.to_vec());
        let titles = template.defaults.section_titles.unwrap();
        assert_eq!(
            titles.get(TitledSection::Certifications),
            Some(&TitleOverride::Text("Certifications and Courses".into()))
        );
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.get_or_default(Some("nope")).id, "default");
        assert_eq!(registry.get_or_default(None).id, "default");
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_register_and_select() {
        let mut registry = TemplateRegistry::new();
        registry.register(compact()).expect("Should register");
        assert_eq!(registry.get_or_default(Some("compact")).name, "Compact");
        assert_eq!(registry.ids(), vec!["compact", "default"]);
    }

    #[test]
    fn test_duplicate_error() {
        let mut registry = TemplateRegistry::new();
        registry.register(compact()).expect("First register should succeed");
        let result = registry.register(compact());
        assert!(matches!(result, Err(TemplateError::Duplicate { .. })));

        let result = registry.register(Template::builtin_default());
        assert!(matches!(result, Err(TemplateError::Duplicate { .. })));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let mut template = compact();
        template.sections.push(Section::Contact);
        assert!(matches!(
            template.validate(),
            Err(TemplateError::DuplicateSection { .. })
        ));
    }
}
