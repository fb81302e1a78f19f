//! User-facing style knobs
//!
//! Every field is optional. The same shape is used for the `style` block of
//! a resume and for the style defaults carried by a template.

use serde::Deserialize;

use crate::sections::TitledSection;

/// How contact details are arranged under the name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactLayout {
    /// Wrap details left to right
    #[default]
    Left,
    /// One detail per line
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeShape {
    #[default]
    Rounded,
    Rectangular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    #[default]
    Filled,
    Outlined,
    Link,
}

/// Line height preset for the whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    Dense,
    Compact,
    #[default]
    Default,
    Spaced,
}

impl LineSpacing {
    /// Unitless CSS `line-height` for this preset
    pub fn line_height(self) -> &'static str {
        match self {
            LineSpacing::Dense => "1.4",
            LineSpacing::Compact => "1.5",
            LineSpacing::Default => "1.6",
            LineSpacing::Spaced => "1.8",
        }
    }
}

/// Page break directives for print output
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBreakOptions {
    /// Force a page break before this section
    pub before_section: Option<TitledSection>,
    pub avoid_break_in_experience: Option<bool>,
    pub avoid_break_in_projects: Option<bool>,
    /// Also applies to certification items
    pub avoid_break_in_education: Option<bool>,
}

/// PDF page margins in pixels
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMargins {
    pub first_page_top: Option<f64>,
    pub other_pages_top: Option<f64>,
    pub bottom: Option<f64>,
    /// Applied as container padding, not as a page margin
    pub left: Option<f64>,
    /// Applied as container padding, not as a page margin
    pub right: Option<f64>,
}

/// Style overrides as written by the user or a template
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    pub show_header_border: Option<bool>,
    pub show_title_border: Option<bool>,
    pub show_card_side_border: Option<bool>,
    pub use_icons: Option<bool>,
    pub accent_color: Option<String>,

    pub title_font: Option<String>,
    pub body_font: Option<String>,
    pub list_font: Option<String>,

    pub base_font_size: Option<String>,
    pub document_title_size: Option<String>,
    pub title_size: Option<String>,
    pub sub_title_size: Option<String>,
    pub body_text_size: Option<String>,

    pub section_spacing: Option<String>,
    pub item_spacing: Option<String>,
    pub title_spacing: Option<String>,
    pub sub_title_spacing: Option<String>,

    pub contact_layout: Option<ContactLayout>,
    pub badge_shape: Option<BadgeShape>,
    pub badge_style: Option<BadgeStyle>,
    pub inline_skills: Option<bool>,
    pub inline_contact_header: Option<bool>,
    pub inline_experience: Option<bool>,
    pub inline_education: Option<bool>,
    pub inline_projects: Option<bool>,
    pub contact_items_per_line: Option<u32>,
    pub line_spacing: Option<LineSpacing>,
    pub page_breaks: Option<PageBreakOptions>,
    pub page_margins: Option<PageMargins>,

    /// Legacy name for `base_font_size`
    pub body_font_size: Option<String>,
    /// Legacy name for `title_size`
    pub section_title_size: Option<String>,
}

impl StyleOptions {
    /// `base_font_size`, falling back to its legacy name
    pub(crate) fn canonical_base_font_size(&self) -> Option<&str> {
        non_blank(&self.base_font_size).or_else(|| non_blank(&self.body_font_size))
    }

    /// `title_size`, falling back to its legacy name
    pub(crate) fn canonical_title_size(&self) -> Option<&str> {
        non_blank(&self.title_size).or_else(|| non_blank(&self.section_title_size))
    }
}

/// A string knob counts as set only when it is non-empty
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_keys() {
        let style: StyleOptions = serde_yaml::from_str(
            r##"
accentColor: "#ff0000"
showHeaderBorder: false
badgeStyle: outlined
lineSpacing: dense
contactLayout: stack
pageBreaks:
  beforeSection: projects
  avoidBreakInExperience: true
pageMargins:
  left: 10
"##,
        )
        .unwrap();

        assert_eq!(style.accent_color.as_deref(), Some("#ff0000"));
        assert_eq!(style.show_header_border, Some(false));
        assert_eq!(style.badge_style, Some(BadgeStyle::Outlined));
        assert_eq!(style.line_spacing, Some(LineSpacing::Dense));
        assert_eq!(style.contact_layout, Some(ContactLayout::Stack));
        let breaks = style.page_breaks.unwrap();
        assert_eq!(breaks.before_section, Some(TitledSection::Projects));
        assert_eq!(breaks.avoid_break_in_experience, Some(true));
        assert_eq!(style.page_margins.unwrap().left, Some(10.0));
    }

    #[test]
    fn test_line_height_lookup() {
        assert_eq!(LineSpacing::Dense.line_height(), "1.4");
        assert_eq!(LineSpacing::Compact.line_height(), "1.5");
        assert_eq!(LineSpacing::Default.line_height(), "1.6");
        assert_eq!(LineSpacing::Spaced.line_height(), "1.8");
    }

    #[test]
    fn test_canonical_sizes_prefer_new_names() {
        let style = StyleOptions {
            base_font_size: Some("14px".into()),
            body_font_size: Some("12px".into()),
            section_title_size: Some("1.3em".into()),
            ..Default::default()
        };
        assert_eq!(style.canonical_base_font_size(), Some("14px"));
        assert_eq!(style.canonical_title_size(), Some("1.3em"));
    }
}
