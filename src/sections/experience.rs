use crate::resume::{non_empty, Experience};

use super::markup::{escape_html, text_element, MarkupBuilder};
use super::{item_class, titled_section, SectionContext, TitledSection};

const SEPARATOR: &str = r#"<span class="separator">|</span>"#;

/// Description paragraph and achievement bullets, shared by both layouts
fn render_details(builder: &mut MarkupBuilder, experience: &Experience) {
    if let Some(description) = experience.description.as_deref().filter(|d| !d.is_empty()) {
        builder.line(text_element("p", Some("experience-description"), description));
    }

    let achievements = experience.achievements.as_deref().unwrap_or_default();
    if !achievements.is_empty() {
        builder.open("<ul>");
        for achievement in achievements {
            builder.line(format!("<li>{}</li>", escape_html(achievement)));
        }
        builder.close("</ul>");
    }
}

fn render_entry(builder: &mut MarkupBuilder, experience: &Experience, inline: bool) {
    builder.open(format!(
        r#"<div class="{}">"#,
        item_class("experience-item", inline)
    ));
    builder.line(text_element("h3", None, &experience.position));

    let company = text_element("span", Some("company"), &experience.company);
    let period = text_element("span", Some("period"), &experience.period);
    if inline {
        builder.line(SEPARATOR);
        builder.line(company);
        builder.line(SEPARATOR);
        builder.line(period);
    } else {
        builder.open(r#"<div class="meta-info">"#);
        builder.line(company);
        builder.line(SEPARATOR);
        builder.line(period);
        builder.close("</div>");
    }

    render_details(builder, experience);
    builder.close("</div>");
}

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let Some(entries) = non_empty(&ctx.resume.experience) else {
        return String::new();
    };

    titled_section(ctx, TitledSection::Experience, |builder| {
        for entry in entries {
            render_entry(builder, entry, ctx.style.inline_experience);
        }
    })
}
