use super::markup::text_element;
use super::{titled_section, SectionContext, TitledSection};

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let Some(summary) = &ctx.resume.summary else {
        return String::new();
    };

    titled_section(ctx, TitledSection::Summary, |builder| {
        builder.line(text_element("p", Some("summary"), &summary.text));
    })
}
