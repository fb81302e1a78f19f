//! Style options, resolution and stylesheet generation
//!
//! User overrides and template defaults are merged into a [`ResolvedStyle`],
//! which [`generate_css`] compiles into the document stylesheet.

pub mod css;
pub mod options;
pub mod resolve;

pub use css::{generate_css, BASE_CSS};
pub use options::{
    BadgeShape, BadgeStyle, ContactLayout, LineSpacing, PageBreakOptions, PageMargins,
    StyleOptions,
};
pub use resolve::{
    resolve_style, ResolvedPageBreaks, ResolvedPageMargins, ResolvedStyle, DEFAULT_ACCENT_COLOR,
    DEFAULT_FONT,
};
