//! Error types for PDF export

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a PDF
#[derive(Debug, Error)]
pub enum ExportError {
    /// The HTML input does not exist
    #[error("HTML file not found: {}", path.display())]
    HtmlNotFound { path: PathBuf },

    /// No usable browser binary
    #[error("no headless browser found (tried: {})", tried.join(", "))]
    BrowserNotFound { tried: Vec<String> },

    /// Browser process could not be started
    #[error("failed to launch browser '{browser}': {source}")]
    Launch {
        browser: String,
        #[source]
        source: std::io::Error,
    },

    /// Browser exited unsuccessfully
    #[error("browser exited with {status}: {stderr}")]
    BrowserFailed { status: String, stderr: String },

    /// Browser reported success but wrote nothing usable
    #[error("browser produced no PDF at {}", path.display())]
    EmptyOutput { path: PathBuf },

    /// Filesystem error while preparing the print copy
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}
