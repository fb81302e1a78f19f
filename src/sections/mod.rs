//! Section renderers
//!
//! Each resume section is one variant of [`Section`]. Rendering a section
//! produces a self-contained HTML fragment, or an empty string when the
//! resume has no data for it.

mod certifications;
mod contact;
mod education;
mod experience;
pub mod icons;
pub mod markup;
mod projects;
mod skills;
mod summary;

use std::fmt;

use serde::Deserialize;

use crate::resume::Resume;
use crate::style::ResolvedStyle;
use crate::title::TitleResolver;

use markup::{escape_html, MarkupBuilder};

/// Sections that carry a heading and can be retitled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitledSection {
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl TitledSection {
    pub const ALL: [TitledSection; 6] = [
        TitledSection::Summary,
        TitledSection::Skills,
        TitledSection::Experience,
        TitledSection::Projects,
        TitledSection::Education,
        TitledSection::Certifications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TitledSection::Summary => "summary",
            TitledSection::Skills => "skills",
            TitledSection::Experience => "experience",
            TitledSection::Projects => "projects",
            TitledSection::Education => "education",
            TitledSection::Certifications => "certifications",
        }
    }

    /// Heading used when neither the resume nor the template sets one
    pub fn fallback_title(self) -> &'static str {
        match self {
            TitledSection::Summary => "Professional Summary",
            TitledSection::Skills => "Technical Skills",
            TitledSection::Experience => "Professional Experience",
            TitledSection::Projects => "Projects",
            TitledSection::Education => "Education",
            TitledSection::Certifications => "Certifications and Courses",
        }
    }
}

impl fmt::Display for TitledSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every renderable section, in the default document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Contact,
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl Section {
    /// Default order used by the built-in template
    pub const DEFAULT_ORDER: [Section; 7] = [
        Section::Contact,
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Certifications,
    ];

    pub fn id(self) -> &'static str {
        match self.titled() {
            Some(titled) => titled.as_str(),
            None => "contact",
        }
    }

    /// The retitleable identity of this section; `None` for the header
    pub fn titled(self) -> Option<TitledSection> {
        match self {
            Section::Contact => None,
            Section::Summary => Some(TitledSection::Summary),
            Section::Skills => Some(TitledSection::Skills),
            Section::Experience => Some(TitledSection::Experience),
            Section::Projects => Some(TitledSection::Projects),
            Section::Education => Some(TitledSection::Education),
            Section::Certifications => Some(TitledSection::Certifications),
        }
    }

    /// Render this section, or return an empty string if it has no data
    pub fn render(self, ctx: &SectionContext<'_>) -> String {
        match self {
            Section::Contact => contact::render(ctx),
            Section::Summary => summary::render(ctx),
            Section::Skills => skills::render(ctx),
            Section::Experience => experience::render(ctx),
            Section::Projects => projects::render(ctx),
            Section::Education => education::render(ctx),
            Section::Certifications => certifications::render(ctx),
        }
    }
}

/// Everything a section renderer may read
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub resume: &'a Resume,
    pub style: &'a ResolvedStyle,
    pub titles: TitleResolver<'a>,
}

impl<'a> SectionContext<'a> {
    pub fn new(resume: &'a Resume, style: &'a ResolvedStyle, titles: TitleResolver<'a>) -> Self {
        Self {
            resume,
            style,
            titles,
        }
    }
}

/// Wrap a section body in `<section class="section-{id}">` with its heading.
///
/// The `<h2>` is left out when the resolved title is empty.
fn titled_section(
    ctx: &SectionContext<'_>,
    section: TitledSection,
    body: impl FnOnce(&mut MarkupBuilder),
) -> String {
    let title = ctx.titles.resolve(section, section.fallback_title());

    let mut builder = MarkupBuilder::new();
    builder.open(format!(r#"<section class="section-{}">"#, section.as_str()));
    if !title.is_empty() {
        builder.line(format!("<h2>{}</h2>", escape_html(&title)));
    }
    body(&mut builder);
    builder.close("</section>");
    builder.finish()
}

/// `base` plus `base-inline` when the inline variant is active
fn item_class(base: &str, inline: bool) -> String {
    if inline {
        format!("{base} {base}-inline")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::resume::{ContactInfo, Resume};
    use crate::style::ResolvedStyle;
    use crate::title::TitleResolver;

    use super::{Section, SectionContext};

    pub fn ada() -> Resume {
        Resume {
            contact: ContactInfo {
                full_name: "Ada Lovelace".into(),
                city: "London".into(),
                phone: "+44 000".into(),
                email: "ada@example.com".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn render(section: Section, resume: &Resume, style: &ResolvedStyle) -> String {
        let titles = TitleResolver::new(resume.section_titles.as_ref(), None);
        section.render(&SectionContext::new(resume, style, titles))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{ada, render};
    use super::*;
    use crate::resume::{SectionTitles, TitleOverride};

    #[test]
    fn test_default_order() {
        let ids: Vec<&str> = Section::DEFAULT_ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            [
                "contact",
                "summary",
                "skills",
                "experience",
                "projects",
                "education",
                "certifications"
            ]
        );
    }

    #[test]
    fn test_empty_sections_render_nothing() {
        let style = ResolvedStyle::default();
        let mut resume = ada();
        for section in &Section::DEFAULT_ORDER[1..] {
            assert_eq!(render(*section, &resume, &style), "", "{:?}", section);
        }

        resume.skills = Some(vec![]);
        resume.experience = Some(vec![]);
        resume.projects = Some(vec![]);
        resume.education = Some(vec![]);
        resume.certifications = Some(vec![]);
        for section in &Section::DEFAULT_ORDER[1..] {
            assert_eq!(render(*section, &resume, &style), "", "{:?}", section);
        }
    }

    #[test]
    fn test_hidden_title_drops_heading() {
        let mut resume = ada();
        resume.summary = Some(crate::resume::Summary {
            text: "Analyst.".into(),
        });
        let mut titles = SectionTitles::default();
        titles.set(TitledSection::Summary, TitleOverride::Hidden);
        resume.section_titles = Some(titles);

        let html = render(Section::Summary, &resume, &ResolvedStyle::default());
        assert!(html.starts_with(r#"<section class="section-summary">"#));
        assert!(!html.contains("<h2>"));
        assert!(html.contains("Analyst."));
    }

    #[test]
    fn test_item_class() {
        assert_eq!(item_class("education-item", false), "education-item");
        assert_eq!(
            item_class("education-item", true),
            "education-item education-item-inline"
        );
    }
}
