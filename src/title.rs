//! Section heading resolution

use crate::resume::{SectionTitles, TitleOverride};
use crate::sections::TitledSection;

/// Resolves the heading text for a section.
///
/// Lookup order: resume override, template default, caller fallback. A
/// hidden override at either level yields an empty title, which renderers
/// treat as "no heading".
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleResolver<'a> {
    resume: Option<&'a SectionTitles>,
    template: Option<&'a SectionTitles>,
}

impl<'a> TitleResolver<'a> {
    pub fn new(resume: Option<&'a SectionTitles>, template: Option<&'a SectionTitles>) -> Self {
        Self { resume, template }
    }

    /// Get the effective heading for `section`
    pub fn resolve(&self, section: TitledSection, fallback: &str) -> String {
        let found = self
            .resume
            .and_then(|titles| titles.get(section))
            .or_else(|| self.template.and_then(|titles| titles.get(section)));

        match found {
            Some(TitleOverride::Hidden) => String::new(),
            Some(TitleOverride::Text(text)) => text.clone(),
            None => fallback.to_string(),
        }
    }
}
