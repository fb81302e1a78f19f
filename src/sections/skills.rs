use crate::resume::{non_empty, SkillCategory};

use super::markup::{badges, text_element, MarkupBuilder};
use super::{item_class, titled_section, SectionContext, TitledSection};

fn render_category(builder: &mut MarkupBuilder, category: &SkillCategory, inline: bool) {
    builder.open(format!(
        r#"<div class="{}">"#,
        item_class("skill-category", inline)
    ));
    builder.line(text_element("h3", None, &category.category));
    if inline {
        for skill in &category.skills {
            builder.line(text_element("span", Some("tech-tag"), skill));
        }
    } else {
        builder.open(r#"<div class="skills-list">"#);
        builder.line(badges(&category.skills));
        builder.close("</div>");
    }
    builder.close("</div>");
}

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let Some(categories) = non_empty(&ctx.resume.skills) else {
        return String::new();
    };

    titled_section(ctx, TitledSection::Skills, |builder| {
        for category in categories {
            render_category(builder, category, ctx.style.inline_skills);
        }
    })
}
