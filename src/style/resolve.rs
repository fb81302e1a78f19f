//! Style resolution
//!
//! Each knob is resolved independently with the precedence
//! resume style > template style > built-in fallback. Nested page break and
//! page margin blocks are merged key by key under the same rule.

use crate::sections::TitledSection;

use super::options::{
    non_blank, BadgeShape, BadgeStyle, ContactLayout, LineSpacing, PageBreakOptions, PageMargins,
    StyleOptions,
};

/// Font stack used when no title/body/list font is configured
pub const DEFAULT_FONT: &str =
    r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#;

pub const DEFAULT_ACCENT_COLOR: &str = "#3498db";

/// Fully populated style: every knob has a concrete value
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub show_header_border: bool,
    pub show_title_border: bool,
    pub show_card_side_border: bool,
    pub use_icons: bool,
    pub accent_color: String,

    pub title_font: String,
    pub body_font: String,
    pub list_font: String,

    pub base_font_size: String,
    pub document_title_size: String,
    pub title_size: String,
    pub sub_title_size: String,
    pub body_text_size: String,

    pub section_spacing: String,
    pub item_spacing: String,
    pub title_spacing: String,
    pub sub_title_spacing: String,

    pub contact_layout: ContactLayout,
    pub badge_shape: BadgeShape,
    pub badge_style: BadgeStyle,
    pub inline_skills: bool,
    pub inline_contact_header: bool,
    pub inline_experience: bool,
    pub inline_education: bool,
    pub inline_projects: bool,
    /// 0 lets contact details wrap naturally
    pub contact_items_per_line: u32,
    pub line_spacing: LineSpacing,
    pub page_breaks: ResolvedPageBreaks,
    pub page_margins: ResolvedPageMargins,
}

impl ResolvedStyle {
    /// Legacy name for [`ResolvedStyle::base_font_size`]
    pub fn body_font_size(&self) -> &str {
        &self.base_font_size
    }

    /// Legacy name for [`ResolvedStyle::title_size`]
    pub fn section_title_size(&self) -> &str {
        &self.title_size
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        resolve_style(None, None)
    }
}

/// Page break directives after merging; only set directives emit CSS
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPageBreaks {
    pub before_section: Option<TitledSection>,
    pub avoid_break_in_experience: bool,
    pub avoid_break_in_projects: bool,
    pub avoid_break_in_education: bool,
}

/// Page margins in pixels with every side present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPageMargins {
    pub first_page_top: f64,
    pub other_pages_top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for ResolvedPageMargins {
    fn default() -> Self {
        Self {
            first_page_top: 0.0,
            other_pages_top: 40.0,
            bottom: 40.0,
            left: 60.0,
            right: 60.0,
        }
    }
}

/// Two-level view over optional style blocks
struct Tiers<'a> {
    resume: Option<&'a StyleOptions>,
    template: Option<&'a StyleOptions>,
}

impl<'a> Tiers<'a> {
    fn flag(&self, get: impl Fn(&StyleOptions) -> Option<bool>, fallback: bool) -> bool {
        self.resume
            .and_then(&get)
            .or_else(|| self.template.and_then(&get))
            .unwrap_or(fallback)
    }

    fn text(&self, get: impl Fn(&StyleOptions) -> &Option<String>, fallback: &str) -> String {
        self.text_with(|style| non_blank(get(style)), fallback)
    }

    fn text_with(
        &self,
        get: impl Fn(&'a StyleOptions) -> Option<&'a str>,
        fallback: &str,
    ) -> String {
        self.resume
            .and_then(&get)
            .or_else(|| self.template.and_then(&get))
            .unwrap_or(fallback)
            .to_string()
    }

    fn choice<T: Copy + Default>(&self, get: impl Fn(&StyleOptions) -> Option<T>) -> T {
        self.resume
            .and_then(&get)
            .or_else(|| self.template.and_then(&get))
            .unwrap_or_default()
    }
}

/// Merge resume and template styles with built-in fallbacks.
///
/// `false` and `0` are real values; only absent fields (and empty strings for
/// string knobs) fall through to the next tier.
pub fn resolve_style(
    resume: Option<&StyleOptions>,
    template: Option<&StyleOptions>,
) -> ResolvedStyle {
    let tiers = Tiers { resume, template };

    ResolvedStyle {
        show_header_border: tiers.flag(|s| s.show_header_border, true),
        show_title_border: tiers.flag(|s| s.show_title_border, true),
        show_card_side_border: tiers.flag(|s| s.show_card_side_border, true),
        use_icons: tiers.flag(|s| s.use_icons, true),
        accent_color: tiers.text(|s| &s.accent_color, DEFAULT_ACCENT_COLOR),

        title_font: tiers.text(|s| &s.title_font, DEFAULT_FONT),
        body_font: tiers.text(|s| &s.body_font, DEFAULT_FONT),
        list_font: tiers.text(|s| &s.list_font, DEFAULT_FONT),

        base_font_size: tiers.text_with(StyleOptions::canonical_base_font_size, "16px"),
        document_title_size: tiers.text(|s| &s.document_title_size, "2.5em"),
        title_size: tiers.text_with(StyleOptions::canonical_title_size, "1.5em"),
        sub_title_size: tiers.text(|s| &s.sub_title_size, "1.2em"),
        body_text_size: tiers.text(|s| &s.body_text_size, "1em"),

        section_spacing: tiers.text(|s| &s.section_spacing, "35px"),
        item_spacing: tiers.text(|s| &s.item_spacing, "25px"),
        title_spacing: tiers.text(|s| &s.title_spacing, "15px"),
        sub_title_spacing: tiers.text(|s| &s.sub_title_spacing, "4px"),

        contact_layout: tiers.choice(|s| s.contact_layout),
        badge_shape: tiers.choice(|s| s.badge_shape),
        badge_style: tiers.choice(|s| s.badge_style),
        inline_skills: tiers.flag(|s| s.inline_skills, false),
        inline_contact_header: tiers.flag(|s| s.inline_contact_header, false),
        inline_experience: tiers.flag(|s| s.inline_experience, false),
        inline_education: tiers.flag(|s| s.inline_education, false),
        inline_projects: tiers.flag(|s| s.inline_projects, false),
        contact_items_per_line: tiers.choice(|s| s.contact_items_per_line),
        line_spacing: tiers.choice(|s| s.line_spacing),
        page_breaks: resolve_page_breaks(
            resume.and_then(|s| s.page_breaks.as_ref()),
            template.and_then(|s| s.page_breaks.as_ref()),
        ),
        page_margins: resolve_margins(
            resume.and_then(|s| s.page_margins.as_ref()),
            template.and_then(|s| s.page_margins.as_ref()),
        ),
    }
}

fn resolve_page_breaks(
    resume: Option<&PageBreakOptions>,
    template: Option<&PageBreakOptions>,
) -> ResolvedPageBreaks {
    let pick = |get: fn(&PageBreakOptions) -> Option<bool>| {
        resume
            .and_then(get)
            .or_else(|| template.and_then(get))
            .unwrap_or(false)
    };

    ResolvedPageBreaks {
        before_section: resume
            .and_then(|b| b.before_section)
            .or_else(|| template.and_then(|b| b.before_section)),
        avoid_break_in_experience: pick(|b| b.avoid_break_in_experience),
        avoid_break_in_projects: pick(|b| b.avoid_break_in_projects),
        avoid_break_in_education: pick(|b| b.avoid_break_in_education),
    }
}

fn resolve_margins(resume: Option<&PageMargins>, template: Option<&PageMargins>) -> ResolvedPageMargins {
    let defaults = ResolvedPageMargins::default();
    let pick = |get: fn(&PageMargins) -> Option<f64>, fallback: f64| {
        resume
            .and_then(get)
            .or_else(|| template.and_then(get))
            .unwrap_or(fallback)
    };

    ResolvedPageMargins {
        first_page_top: pick(|m| m.first_page_top, defaults.first_page_top),
        other_pages_top: pick(|m| m.other_pages_top, defaults.other_pages_top),
        bottom: pick(|m| m.bottom, defaults.bottom),
        left: pick(|m| m.left, defaults.left),
        right: pick(|m| m.right, defaults.right),
    }
}
