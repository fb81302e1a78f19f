//! Stylesheet generation from a resolved style

use crate::sections::TitledSection;

use super::options::{BadgeShape, BadgeStyle, ContactLayout};
use super::resolve::{ResolvedPageBreaks, ResolvedStyle};

/// Static rules shared by every document
pub const BASE_CSS: &str = include_str!("base.css");

/// Generate the complete stylesheet for a resolved style.
///
/// Output order: custom properties, base stylesheet, toggle-driven
/// structural rules, then page break rules.
pub fn generate_css(style: &ResolvedStyle) -> String {
    [
        css_variables(style),
        BASE_CSS.trim_end().to_string(),
        structural_rules(style),
        page_break_rules(&style.page_breaks),
    ]
    .into_iter()
    .filter(|block| !block.is_empty())
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// `:root` custom properties for typography and spacing
fn css_variables(style: &ResolvedStyle) -> String {
    let vars = [
        ("accent-color", style.accent_color.as_str()),
        ("title-font", style.title_font.as_str()),
        ("body-font", style.body_font.as_str()),
        ("list-font", style.list_font.as_str()),
        ("base-font-size", style.base_font_size.as_str()),
        ("document-title-size", style.document_title_size.as_str()),
        ("level1-title-size", style.title_size.as_str()),
        ("level2-title-size", style.sub_title_size.as_str()),
        ("body-text-size", style.body_text_size.as_str()),
        ("section-spacing", style.section_spacing.as_str()),
        ("item-spacing", style.item_spacing.as_str()),
        ("title-spacing", style.title_spacing.as_str()),
        ("subtitle-spacing", style.sub_title_spacing.as_str()),
        ("line-height", style.line_spacing.line_height()),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push('}');
    css
}

fn rule(selector: &str, declarations: &[&str]) -> String {
    let mut css = format!("{} {{\n", selector);
    for declaration in declarations {
        css.push_str(&format!("  {};\n", declaration));
    }
    css.push('}');
    css
}

/// Rules gated by border, contact layout and badge settings
fn structural_rules(style: &ResolvedStyle) -> String {
    let mut rules = vec![];

    if style.show_header_border {
        rules.push(rule("header", &["border-bottom: 3px solid #2c3e50"]));
    }

    if style.show_title_border {
        rules.push(rule("h2", &["border-bottom: 2px solid #ecf0f1"]));
    }

    if style.show_card_side_border {
        rules.push(rule(
            ".experience-item, .project-item, .education-item, .certification-item",
            &["padding-left: 20px", "border-left: 3px solid #ecf0f1"],
        ));
    }

    match style.contact_layout {
        ContactLayout::Stack => {
            rules.push(rule(
                ".contact-info",
                &[
                    "flex-direction: column",
                    "align-items: flex-start",
                    "flex-wrap: nowrap",
                ],
            ));
            rules.push(rule(".contact-info span", &["width: 100%"]));
        }
        ContactLayout::Left => {
            rules.push(rule(
                ".contact-info",
                &["justify-content: flex-start", "flex-wrap: wrap"],
            ));
            rules.push(rule(".contact-info span", &["flex: 0 1 auto"]));

            if !style.inline_contact_header && style.contact_items_per_line > 0 {
                let width = format!(
                    "calc({}% - 15px)",
                    100.0 / f64::from(style.contact_items_per_line)
                );
                let basis = format!("flex-basis: {}", width);
                let max_width = format!("max-width: {}", width);
                rules.push(rule(
                    ".contact-info span",
                    &[basis.as_str(), max_width.as_str()],
                ));
            }
        }
    }

    rules.push(badge_rule(style));

    rules.join("\n\n")
}

/// Badge appearance for `.tech-tag`, keyed by shape and style
fn badge_rule(style: &ResolvedStyle) -> String {
    let accent = &style.accent_color;
    let radius = match style.badge_shape {
        BadgeShape::Rounded => "6px",
        BadgeShape::Rectangular => "0",
    };

    let mut declarations = vec![format!("border-radius: {}", radius)];
    match style.badge_style {
        BadgeStyle::Filled => {
            declarations.push(format!("background: {}", accent));
            declarations.push("color: #ffffff".to_string());
            declarations.push("border: none".to_string());
        }
        BadgeStyle::Outlined => {
            declarations.push("background: transparent".to_string());
            declarations.push(format!("color: {}", accent));
            declarations.push(format!("border: 1px solid {}", accent));
        }
        BadgeStyle::Link => {
            declarations.push("background: transparent".to_string());
            declarations.push(format!("color: {}", accent));
            declarations.push("border: none".to_string());
            declarations.push("padding: 2px 8px".to_string());
            declarations.push("text-decoration: underline".to_string());
            declarations.push("text-decoration-style: dotted".to_string());
        }
    }

    let refs: Vec<&str> = declarations.iter().map(String::as_str).collect();
    rule(".tech-tag", &refs)
}

/// Print rules for the directives that were actually set
fn page_break_rules(breaks: &ResolvedPageBreaks) -> String {
    const AVOID: [&str; 2] = ["page-break-inside: avoid", "break-inside: avoid"];
    let mut rules = vec![];

    if let Some(section) = breaks.before_section {
        rules.push(rule(
            &section_selector(section),
            &[
                "page-break-before: always",
                "break-before: page",
                "padding-top: 40px",
            ],
        ));
    }

    if breaks.avoid_break_in_experience {
        rules.push(rule(".experience-item", &AVOID));
    }

    if breaks.avoid_break_in_projects {
        rules.push(rule(".project-item", &AVOID));
    }

    if breaks.avoid_break_in_education {
        rules.push(rule(".education-item, .certification-item", &AVOID));
    }

    rules.join("\n\n")
}

fn section_selector(section: TitledSection) -> String {
    format!(".section-{}", section.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::resolve::resolve_style;
    use crate::style::{LineSpacing, PageBreakOptions, StyleOptions};

    fn css_for(options: StyleOptions) -> String {
        generate_css(&resolve_style(Some(&options), None))
    }

    #[test]
    fn test_variables_block() {
        let css = generate_css(&ResolvedStyle::default());
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --accent-color: #3498db;\n"));
        assert!(css.contains("  --base-font-size: 16px;\n"));
        assert!(css.contains("  --level1-title-size: 1.5em;\n"));
        assert!(css.contains("  --level2-title-size: 1.2em;\n"));
        assert!(css.contains("  --subtitle-spacing: 4px;\n"));
        assert!(css.contains("  --line-height: 1.6;\n"));
    }

    #[test]
    fn test_line_spacing_preset() {
        let css = css_for(StyleOptions {
            line_spacing: Some(LineSpacing::Spaced),
            ..Default::default()
        });
        assert!(css.contains("--line-height: 1.8;"));
    }

    #[test]
    fn test_base_stylesheet_included() {
        let css = generate_css(&ResolvedStyle::default());
        assert!(css.contains(BASE_CSS.trim_end()));
    }

    #[test]
    fn test_border_toggles() {
        let css = generate_css(&ResolvedStyle::default());
        assert!(css.contains("border-bottom: 3px solid #2c3e50"));
        assert!(css.contains("border-bottom: 2px solid #ecf0f1"));
        assert!(css.contains("border-left: 3px solid #ecf0f1"));

        let css = css_for(StyleOptions {
            show_header_border: Some(false),
            show_title_border: Some(false),
            show_card_side_border: Some(false),
            ..Default::default()
        });
        assert!(!css.contains("border-bottom: 3px solid #2c3e50"));
        assert!(!css.contains("border-bottom: 2px solid #ecf0f1"));
        assert!(!css.contains("border-left: 3px solid #ecf0f1"));
    }

    #[test]
    fn test_items_per_line() {
        let css = css_for(StyleOptions {
            contact_items_per_line: Some(3),
            inline_contact_header: Some(false),
            ..Default::default()
        });
        assert!(css.contains("flex-basis: calc(33.333333333333336% - 15px);"));
        assert!(css.contains("max-width: calc(33.333333333333336% - 15px);"));

        let css = css_for(StyleOptions {
            contact_items_per_line: Some(4),
            ..Default::default()
        });
        assert!(css.contains("flex-basis: calc(25% - 15px);"));
    }

    #[test]
    fn test_items_per_line_ignored_for_inline_header_and_stack() {
        let inline = css_for(StyleOptions {
            contact_items_per_line: Some(3),
            inline_contact_header: Some(true),
            ..Default::default()
        });
        assert!(!inline.contains("flex-basis"));

        let stacked = css_for(StyleOptions {
            contact_items_per_line: Some(3),
            contact_layout: Some(ContactLayout::Stack),
            ..Default::default()
        });
        assert!(!stacked.contains("flex-basis"));
        assert!(stacked.contains("flex-direction: column;"));
    }

    #[test]
    fn test_badge_variants() {
        let filled = generate_css(&ResolvedStyle::default());
        assert!(filled.contains("border-radius: 6px;"));
        assert!(filled.contains("background: #3498db;"));

        let outlined = css_for(StyleOptions {
            badge_style: Some(BadgeStyle::Outlined),
            badge_shape: Some(BadgeShape::Rectangular),
            accent_color: Some("#e67e22".into()),
            ..Default::default()
        });
        assert!(outlined.contains("border-radius: 0;"));
        assert!(outlined.contains("border: 1px solid #e67e22;"));
        assert!(outlined.contains("color: #e67e22;"));

        let link = css_for(StyleOptions {
            badge_style: Some(BadgeStyle::Link),
            ..Default::default()
        });
        assert!(link.contains("text-decoration-style: dotted;"));
        assert!(link.contains("padding: 2px 8px;"));
    }

    #[test]
    fn test_page_breaks_only_when_set() {
        let css = generate_css(&ResolvedStyle::default());
        assert!(!css.contains("break-before: page"));
        assert!(!css.contains("break-inside: avoid"));

        let css = css_for(StyleOptions {
            page_breaks: Some(PageBreakOptions {
                before_section: Some(TitledSection::Projects),
                avoid_break_in_education: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(css.contains(".section-projects {\n  page-break-before: always;"));
        assert!(css.contains(".education-item, .certification-item {\n  page-break-inside: avoid;"));
        assert!(!css.contains(".experience-item {\n  page-break-inside"));
    }

    #[test]
    fn test_page_break_rule_snapshot() {
        let breaks = ResolvedPageBreaks {
            avoid_break_in_projects: true,
            ..Default::default()
        };
        insta::assert_snapshot!(
            page_break_rules(&breaks).replace('\n', " "),
            @".project-item {   page-break-inside: avoid;   break-inside: avoid; }"
        );
    }

    #[test]
    fn test_deterministic() {
        let style = ResolvedStyle::default();
        assert_eq!(generate_css(&style), generate_css(&style));
    }
}
