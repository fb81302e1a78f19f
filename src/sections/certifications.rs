use crate::resume::{non_empty, Certification};

use super::markup::{text_element, MarkupBuilder};
use super::{titled_section, SectionContext, TitledSection};

fn render_entry(builder: &mut MarkupBuilder, certification: &Certification) {
    builder.open(r#"<div class="certification-item">"#);
    builder.line(text_element("h3", None, &certification.name));
    builder.line(text_element("div", Some("issuer"), &certification.issuer));
    if let Some(year) = certification.year.as_deref().filter(|y| !y.is_empty()) {
        builder.line(text_element("div", Some("year"), year));
    }
    builder.close("</div>");
}

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let Some(entries) = non_empty(&ctx.resume.certifications) else {
        return String::new();
    };

    titled_section(ctx, TitledSection::Certifications, |builder| {
        for entry in entries {
            render_entry(builder, entry);
        }
    })
}
