//! PDF export
//!
//! A generated HTML file is handed to a [`Rasterizer`] together with a print
//! stylesheet that controls page margins. The rasterizer is a seam: the
//! shipped implementation drives a headless Chromium, tests substitute
//! their own.

mod chrome;
mod config;
mod error;

use std::path::{Path, PathBuf};

pub use chrome::ChromeRasterizer;
pub use config::{PaperFormat, PdfOptions};
pub use error::ExportError;

/// One rasterization request
#[derive(Debug, Clone)]
pub struct RasterJob<'a> {
    /// Absolute path of the HTML input
    pub html_path: PathBuf,
    /// Absolute path of the PDF to write
    pub pdf_path: PathBuf,
    /// Stylesheet to inject before capture
    pub stylesheet: String,
    pub options: &'a PdfOptions,
}

/// Renders an HTML file to a paginated PDF
pub trait Rasterizer {
    fn rasterize(&self, job: &RasterJob<'_>) -> Result<(), ExportError>;
}

/// Stylesheet injected at rasterization time.
///
/// Only the top margin differs between the first and later pages. Left and
/// right margins become container padding since per-page side margins are
/// not applied reliably.
pub fn print_stylesheet(options: &PdfOptions) -> String {
    let m = &options.margins;
    let mut css = format!(
        r#"@page {{
  size: {size};
  margin: {other_top}px 0px {bottom}px 0px;
}}
@page :first {{
  margin: {first_top}px 0px {bottom}px 0px;
}}
body {{
  padding: 0 !important;
  background: white !important;
}}
.container {{
  box-shadow: none !important;
  padding-left: {left}px !important;
  padding-right: {right}px !important;
}}"#,
        size = options.format.css_size(),
        other_top = m.other_pages_top,
        first_top = m.first_page_top,
        bottom = m.bottom,
        left = m.left,
        right = m.right,
    );

    if options.print_background {
        css.push_str(
            "\n* {\n  -webkit-print-color-adjust: exact !important;\n  print-color-adjust: exact !important;\n}",
        );
    }

    css
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Export an HTML file to PDF.
///
/// Fails with [`ExportError::HtmlNotFound`] before the rasterizer is touched
/// when `html` does not exist.
pub fn export_pdf(
    html: &Path,
    pdf: &Path,
    options: &PdfOptions,
    rasterizer: &dyn Rasterizer,
) -> Result<(), ExportError> {
    let html_path = absolute(html);
    let pdf_path = absolute(pdf);

    if !html_path.is_file() {
        return Err(ExportError::HtmlNotFound { path: html_path });
    }

    log::debug!(
        "exporting {} -> {} ({}, background: {})",
        html_path.display(),
        pdf_path.display(),
        options.format,
        options.print_background
    );

    let job = RasterJob {
        html_path,
        pdf_path,
        stylesheet: print_stylesheet(options),
        options,
    };
    rasterizer.rasterize(&job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ResolvedPageMargins;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingRasterizer {
        calls: Cell<usize>,
    }

    impl Rasterizer for CountingRasterizer {
        fn rasterize(&self, job: &RasterJob<'_>) -> Result<(), ExportError> {
            self.calls.set(self.calls.get() + 1);
            std::fs::write(&job.pdf_path, b"%PDF-1.4")?;
            Ok(())
        }
    }

    #[test]
    fn test_print_stylesheet_margins() {
        let options = PdfOptions::new().with_margins(ResolvedPageMargins {
            first_page_top: 0.0,
            other_pages_top: 40.0,
            bottom: 40.0,
            left: 10.0,
            right: 60.0,
        });
        let css = print_stylesheet(&options);
        assert!(css.contains("@page {\n  size: A4;\n  margin: 40px 0px 40px 0px;\n}"));
        assert!(css.contains("@page :first {\n  margin: 0px 0px 40px 0px;\n}"));
        assert!(css.contains("padding-left: 10px !important;"));
        assert!(css.contains("padding-right: 60px !important;"));
        assert!(css.contains("box-shadow: none !important;"));
        assert!(css.contains("print-color-adjust: exact"));
    }

    #[test]
    fn test_print_stylesheet_without_background() {
        let options = PdfOptions::new()
            .with_format(PaperFormat::Letter)
            .with_background(false);
        let css = print_stylesheet(&options);
        assert!(css.contains("size: letter;"));
        assert!(!css.contains("print-color-adjust"));
    }

    #[test]
    fn test_missing_html_never_rasterizes() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = CountingRasterizer::default();
        let err = export_pdf(
            &dir.path().join("missing.html"),
            &dir.path().join("out.pdf"),
            &PdfOptions::default(),
            &rasterizer,
        )
        .unwrap_err();

        assert!(matches!(err, ExportError::HtmlNotFound { .. }));
        assert!(err.to_string().starts_with("HTML file not found: "));
        assert!(err.to_string().ends_with("missing.html"));
        assert_eq!(rasterizer.calls.get(), 0);
    }

    #[test]
    fn test_export_hands_job_to_rasterizer() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("resume.html");
        let pdf = dir.path().join("resume.pdf");
        std::fs::write(&html, "<html></html>").unwrap();

        let rasterizer = CountingRasterizer::default();
        export_pdf(&html, &pdf, &PdfOptions::default(), &rasterizer).unwrap();
        assert_eq!(rasterizer.calls.get(), 1);
        assert!(pdf.exists());
    }
}
