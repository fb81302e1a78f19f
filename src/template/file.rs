//! Loading template definitions from TOML

use std::path::Path;

use serde::Deserialize;

use crate::resume::SectionTitles;
use crate::sections::Section;
use crate::style::StyleOptions;

use super::registry::{Template, TemplateDefaults, TemplateError};

/// TOML structure for deserializing templates
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TomlTemplate {
    id: String,
    name: Option<String>,
    sections: Option<Vec<Section>>,
    style: Option<StyleOptions>,
    section_titles: Option<SectionTitles>,
}

impl Template {
    /// Load a template from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load a template from a TOML string
    ///
    /// Keys follow the resume document: `[style]` takes the same knobs as a
    /// resume's `style` block and `[sectionTitles]` the same overrides.
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        let parsed: TomlTemplate = toml::from_str(content)?;

        let template = Template {
            name: parsed.name.unwrap_or_else(|| parsed.id.clone()),
            id: parsed.id,
            sections: parsed
                .sections
                .unwrap_or_else(|| Section::DEFAULT_ORDER.to_vec()),
            defaults: TemplateDefaults {
                style: parsed.style,
                section_titles: parsed.section_titles,
            },
        };
        template.validate()?;
        Ok(template)
    }
}
