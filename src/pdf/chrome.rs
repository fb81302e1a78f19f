//! Headless Chromium rasterizer

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{ExportError, RasterJob, Rasterizer};

const CANDIDATES: [&str; 4] = [
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
];

const BROWSER_ARGS: [&str; 7] = [
    "--headless",
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--font-render-hinting=none",
    "--disable-font-subpixel-positioning",
    "--disable-gpu",
    "--no-pdf-header-footer",
];

/// Prints HTML to PDF with a Chromium or Chrome binary
#[derive(Debug, Clone, Default)]
pub struct ChromeRasterizer {
    browser: Option<PathBuf>,
}

impl ChromeRasterizer {
    /// Use the first browser found on `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific browser binary
    pub fn with_browser(mut self, path: impl Into<PathBuf>) -> Self {
        self.browser = Some(path.into());
        self
    }

    fn detect_browser(&self) -> Result<PathBuf, ExportError> {
        if let Some(path) = &self.browser {
            return Ok(path.clone());
        }

        CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .ok_or_else(|| ExportError::BrowserNotFound {
                tried: CANDIDATES.iter().map(|s| s.to_string()).collect(),
            })
    }
}

impl Rasterizer for ChromeRasterizer {
    fn rasterize(&self, job: &RasterJob<'_>) -> Result<(), ExportError> {
        let browser = self.detect_browser()?;
        let html = fs::read_to_string(&job.html_path)?;

        // Sibling copy so relative asset paths keep resolving; removed on drop.
        let dir = job.html_path.parent().unwrap_or_else(|| Path::new("."));
        let mut print_copy = tempfile::Builder::new()
            .prefix(".print-")
            .suffix(".html")
            .tempfile_in(dir)?;
        print_copy.write_all(inject_stylesheet(&html, &job.stylesheet).as_bytes())?;
        print_copy.flush()?;

        // A PDF left over from an earlier run must not pass for fresh output
        match fs::remove_file(&job.pdf_path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }

        let budget = job.options.settle_delay.as_millis();
        log::debug!(
            "running {} with a {}ms settle budget",
            browser.display(),
            budget
        );

        let output = Command::new(&browser)
            .args(BROWSER_ARGS)
            .arg(format!("--virtual-time-budget={budget}"))
            .arg(format!("--print-to-pdf={}", job.pdf_path.display()))
            .arg(file_url(print_copy.path()))
            .output()
            .map_err(|source| ExportError::Launch {
                browser: browser.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExportError::BrowserFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        match fs::metadata(&job.pdf_path) {
            Ok(meta) if meta.len() > 0 => Ok(()),
            _ => Err(ExportError::EmptyOutput {
                path: job.pdf_path.clone(),
            }),
        }
    }
}

/// Insert a `<style>` block at the end of `<head>`, or at the top if the
/// document has none.
fn inject_stylesheet(html: &str, css: &str) -> String {
    let style = format!("<style>\n{css}\n</style>\n");
    match html.find("</head>") {
        Some(at) => format!("{}{}{}", &html[..at], style, &html[at..]),
        None => format!("{style}{html}"),
    }
}

/// `file://` URL for an absolute path, percent-encoding reserved bytes
fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut url = String::with_capacity(raw.len() + 7);
    url.push_str("file://");
    if !raw.starts_with('/') {
        url.push('/');
    }
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                url.push(byte as char)
            }
            b'\\' => url.push('/'),
            _ => url.push_str(&format!("%{byte:02X}")),
        }
    }
    url
}
