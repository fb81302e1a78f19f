//! cvault - Render YAML resumes to styled HTML and PDF
//!
//! This library provides the resume model, a YAML loader, style resolution,
//! section renderers, a CSS generator and a PDF export seam.
//!
//! # Example
//!
//! ```rust
//! use cvault::{generate_html, parse_resume, GenerateOptions};
//!
//! let resume = parse_resume(
//!     "contact:\n  fullName: Ada Lovelace\n  email: ada@example.com\n",
//! )
//! .unwrap();
//! let html = generate_html(&resume, &GenerateOptions::new());
//! assert!(html.contains("<title>Ada Lovelace - Resume</title>"));
//! ```

pub mod error;
pub mod generator;
pub mod loader;
pub mod pdf;
pub mod resume;
pub mod sections;
pub mod style;
pub mod template;
pub mod title;

pub use error::LoadError;
pub use generator::{
    generate_html, generate_html_with_registry, indent_block, resolved_style_for, GenerateOptions,
};
pub use loader::{load_resume, parse_resume};
pub use pdf::{export_pdf, ChromeRasterizer, ExportError, PaperFormat, PdfOptions, Rasterizer};
pub use resume::Resume;
pub use sections::{Section, TitledSection};
pub use style::{generate_css, resolve_style, ResolvedStyle, StyleOptions};
pub use template::{Template, TemplateError, TemplateRegistry};
pub use title::TitleResolver;

use thiserror::Error;

/// Errors from any stage of the resume pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Error while loading the resume document
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Error while loading or registering a template
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Error while exporting a PDF
    #[error("PDF export failed: {0}")]
    Export(#[from] ExportError),

    /// Error while writing output
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
