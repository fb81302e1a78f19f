//! Configuration for PDF export

use std::fmt;
use std::time::Duration;

use crate::style::ResolvedPageMargins;

/// Paper size passed to the rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperFormat {
    #[default]
    A4,
    Letter,
}

impl PaperFormat {
    /// Lenient parse: `letter` in any case is Letter, anything else is A4
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("letter") {
            PaperFormat::Letter
        } else {
            PaperFormat::A4
        }
    }

    /// Value for the CSS `@page { size }` property
    pub fn css_size(self) -> &'static str {
        match self {
            PaperFormat::A4 => "A4",
            PaperFormat::Letter => "letter",
        }
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperFormat::A4 => f.write_str("A4"),
            PaperFormat::Letter => f.write_str("Letter"),
        }
    }
}

/// Configuration options for PDF export
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub format: PaperFormat,

    /// Print background colours and images
    pub print_background: bool,

    /// Page margins in pixels
    pub margins: ResolvedPageMargins,

    /// Time allowed for layout and font loading before capture
    pub settle_delay: Duration,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            format: PaperFormat::A4,
            print_background: true,
            margins: ResolvedPageMargins::default(),
            settle_delay: Duration::from_millis(300),
        }
    }
}

impl PdfOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paper format
    pub fn with_format(mut self, format: PaperFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether backgrounds are printed
    pub fn with_background(mut self, print_background: bool) -> Self {
        self.print_background = print_background;
        self
    }

    /// Set the page margins
    pub fn with_margins(mut self, margins: ResolvedPageMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the settle delay before capture
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}
