use crate::resume::{non_empty, Project};

use super::icons::Icon;
use super::markup::{badges, escape_html, text_element, MarkupBuilder};
use super::{item_class, titled_section, SectionContext, TitledSection};

/// Demo and repository links, pipe separated. Empty when neither is set.
fn links_cluster(project: &Project, use_icons: bool) -> String {
    let candidates = [
        (&project.link, Icon::Link, "Demo"),
        (&project.repo, Icon::GitHub, "Repository"),
    ];

    let items: Vec<String> = candidates
        .into_iter()
        .filter_map(|(url, icon, label)| {
            let url = url.as_deref().filter(|u| !u.is_empty())?;
            Some(format!(
                r#"<span class="project-link-item"><a href="{}" target="_blank">{}{}</a></span>"#,
                escape_html(url),
                icon.render_if(use_icons),
                label
            ))
        })
        .collect();

    if items.is_empty() {
        return String::new();
    }

    format!(
        r#"<span class="project-links">{}</span>"#,
        items.join(r#"<span class="project-link-separator">|</span>"#)
    )
}

fn render_item(builder: &mut MarkupBuilder, project: &Project, use_icons: bool, inline: bool) {
    let links = links_cluster(project, use_icons);

    builder.open(format!(
        r#"<div class="{}">"#,
        item_class("project-item", inline)
    ));

    if inline {
        builder.open(r#"<div class="project-header-inline">"#);
        builder.line(text_element("h3", None, &project.name));
        if !links.is_empty() {
            builder.line(format!(r#"<span class="separator">–</span>{}"#, links));
        }
        builder.close("</div>");
        builder.open(r#"<div class="project-content-inline">"#);
        builder.line(text_element(
            "span",
            Some("project-description-inline"),
            &project.description,
        ));
        builder.line(badges(&project.technologies));
        builder.close("</div>");
    } else {
        builder.open(r#"<div class="project-heading">"#);
        builder.line(text_element("h3", None, &project.name));
        builder.line(links);
        builder.close("</div>");
        builder.line(text_element("p", None, &project.description));
        builder.open(r#"<div class="technologies">"#);
        builder.line(badges(&project.technologies));
        builder.close("</div>");
    }

    builder.close("</div>");
}

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let Some(projects) = non_empty(&ctx.resume.projects) else {
        return String::new();
    };

    titled_section(ctx, TitledSection::Projects, |builder| {
        for project in projects {
            render_item(
                builder,
                project,
                ctx.style.use_icons,
                ctx.style.inline_projects,
            );
        }
    })
}
