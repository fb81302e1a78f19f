//! Document assembly
//!
//! Picks a template, resolves style and titles, renders every section in
//! template order and wraps the result in a standalone HTML page.

use crate::resume::Resume;
use crate::sections::markup::escape_html;
use crate::sections::SectionContext;
use crate::style::{generate_css, resolve_style, ResolvedStyle};
use crate::template::{Template, TemplateRegistry};
use crate::title::TitleResolver;

const SECTION_INDENT: &str = "    ";

/// Options for HTML generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Template id; takes precedence over the resume's own `template`
    pub template: Option<String>,
}

impl GenerateOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a template by id
    pub fn with_template(mut self, id: impl Into<String>) -> Self {
        self.template = Some(id.into());
        self
    }
}

fn select_template<'r>(
    resume: &Resume,
    registry: &'r TemplateRegistry,
    options: &GenerateOptions,
) -> &'r Template {
    let id = options.template.as_deref().or(resume.template.as_deref());
    registry.get_or_default(id)
}

fn style_for(resume: &Resume, template: &Template) -> ResolvedStyle {
    resolve_style(resume.style.as_ref(), template.defaults.style.as_ref())
}

/// The style a document for `resume` is rendered with
pub fn resolved_style_for(
    resume: &Resume,
    registry: &TemplateRegistry,
    options: &GenerateOptions,
) -> ResolvedStyle {
    style_for(resume, select_template(resume, registry, options))
}

/// Generate a complete HTML document using the built-in templates
pub fn generate_html(resume: &Resume, options: &GenerateOptions) -> String {
    generate_html_with_registry(resume, &TemplateRegistry::new(), options)
}

/// Generate a complete HTML document, selecting the template from `registry`
pub fn generate_html_with_registry(
    resume: &Resume,
    registry: &TemplateRegistry,
    options: &GenerateOptions,
) -> String {
    let template = select_template(resume, registry, options);
    let style = style_for(resume, template);
    let titles = TitleResolver::new(
        resume.section_titles.as_ref(),
        template.defaults.section_titles.as_ref(),
    );
    let ctx = SectionContext::new(resume, &style, titles);

    let sections_html = template
        .sections
        .iter()
        .map(|section| section.render(&ctx))
        .filter_map(|html| {
            let trimmed = html.trim();
            (!trimmed.is_empty()).then(|| indent_block(trimmed, SECTION_INDENT))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - Resume</title>
  <style>{css}</style>
</head>
<body>
  <div class="container">
{sections}
  </div>
</body>
</html>"#,
        title = escape_html(&resume.contact.full_name),
        css = generate_css(&style),
        sections = sections_html,
    )
}

/// Prefix every non-empty line of `html` with `indentation`
pub fn indent_block(html: &str, indentation: &str) -> String {
    html.split('\n')
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{indentation}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
