use crate::resume::{non_empty, Education};

use super::markup::{text_element, MarkupBuilder};
use super::{item_class, titled_section, SectionContext, TitledSection};

const SEPARATOR: &str = r#"<span class="separator">|</span>"#;

fn render_entry(builder: &mut MarkupBuilder, education: &Education, inline: bool) {
    builder.open(format!(
        r#"<div class="{}">"#,
        item_class("education-item", inline)
    ));
    builder.line(text_element("h3", None, &education.degree));

    let institution = text_element("span", Some("institution"), &education.institution);
    let year = text_element("span", Some("year"), &education.year);
    if inline {
        builder.line(SEPARATOR);
        builder.line(institution);
        builder.line(SEPARATOR);
        builder.line(year);
    } else {
        builder.open(r#"<div class="meta-info">"#);
        builder.line(institution);
        builder.line(SEPARATOR);
        builder.line(year);
        builder.close("</div>");
    }

    builder.close("</div>");
}

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let Some(entries) = non_empty(&ctx.resume.education) else {
        return String::new();
    };

    titled_section(ctx, TitledSection::Education, |builder| {
        for entry in entries {
            render_entry(builder, entry, ctx.style.inline_education);
        }
    })
}
