//! Header with the name and contact details

use crate::resume::ContactInfo;

use super::icons::Icon;
use super::markup::{escape_html, text_element, MarkupBuilder};
use super::SectionContext;

/// One contact detail, in display order
#[derive(Debug, Clone, PartialEq)]
struct Detail<'a> {
    icon: Icon,
    label: &'a str,
    href: Option<String>,
}

fn build_details(contact: &ContactInfo) -> Vec<Detail<'_>> {
    let mut details = vec![];

    if !contact.city.is_empty() {
        details.push(Detail {
            icon: Icon::Location,
            label: &contact.city,
            href: None,
        });
    }

    if !contact.phone.is_empty() {
        details.push(Detail {
            icon: Icon::Phone,
            label: &contact.phone,
            href: None,
        });
    }

    if !contact.email.is_empty() {
        details.push(Detail {
            icon: Icon::Email,
            label: &contact.email,
            href: Some(format!("mailto:{}", contact.email)),
        });
    }

    let profiles = [
        (Icon::LinkedIn, "LinkedIn", &contact.linkedin),
        (Icon::GitHub, "GitHub", &contact.github),
        (Icon::Website, "Website", &contact.website),
    ];
    for (icon, label, url) in profiles {
        if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
            details.push(Detail {
                icon,
                label,
                href: Some(url.to_string()),
            });
        }
    }

    details
}

fn render_detail(detail: &Detail<'_>, use_icons: bool) -> String {
    let icon = detail.icon.render_if(use_icons);
    let content = match &detail.href {
        // Mail links open in the mail client, everything else in a new tab
        Some(href) if href.starts_with("mailto:") => {
            format!(r#"<a href="{}">{}</a>"#, escape_html(href), escape_html(detail.label))
        }
        Some(href) => format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            escape_html(href),
            escape_html(detail.label)
        ),
        None => escape_html(detail.label),
    };
    format!("<span>{}{}</span>", icon, content)
}

pub(super) fn render(ctx: &SectionContext<'_>) -> String {
    let contact = &ctx.resume.contact;
    let details: Vec<String> = build_details(contact)
        .iter()
        .map(|detail| render_detail(detail, ctx.style.use_icons))
        .collect();

    let mut builder = MarkupBuilder::new();
    if ctx.style.inline_contact_header {
        builder.open(r#"<header class="contact-inline">"#);
        builder.line(text_element("h1", None, &contact.full_name));
        for detail in &details {
            builder.line(detail);
        }
    } else {
        builder.open("<header>");
        builder.line(text_element("h1", None, &contact.full_name));
        builder.open(r#"<div class="contact-info">"#);
        for detail in &details {
            builder.line(detail);
        }
        builder.close("</div>");
    }
    builder.close("</header>");
    builder.finish()
}
