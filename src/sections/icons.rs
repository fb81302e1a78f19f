//! Inline SVG glyphs for contact details and project links

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Location,
    Phone,
    Email,
    LinkedIn,
    GitHub,
    Website,
    Link,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Location => "location",
            Icon::Phone => "phone",
            Icon::Email => "email",
            Icon::LinkedIn => "linkedin",
            Icon::GitHub => "github",
            Icon::Website => "website",
            Icon::Link => "link",
        }
    }

    fn shapes(self) -> &'static str {
        match self {
            Icon::Location => {
                r#"<path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::Email => {
                r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/>"#
            }
            Icon::LinkedIn => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#
            }
            Icon::GitHub => {
                r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>"#
            }
            Icon::Website => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#
            }
            Icon::Link => {
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#
            }
        }
    }

    /// Complete `<svg>` element, styled through the `.icon` class
    pub fn svg(self) -> String {
        format!(
            r#"<svg class="icon icon-{}" viewBox="0 0 24 24" aria-hidden="true">{}</svg>"#,
            self.name(),
            self.shapes()
        )
    }

    /// The glyph when icons are enabled, otherwise nothing
    pub fn render_if(self, enabled: bool) -> String {
        if enabled {
            self.svg()
        } else {
            String::new()
        }
    }
}
