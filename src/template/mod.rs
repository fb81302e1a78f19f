//! Resume templates
//!
//! A template fixes which sections are rendered and in what order, and may
//! carry default style knobs and section titles that sit between the
//! resume's own settings and the built-in fallbacks. One template ships
//! with the crate; others can be loaded from TOML.
//!
//! # Example
//!
//! ```text
//! id = "compact"
//! sections = ["contact", "experience", "skills"]
//!
//! [style]
//! inlineExperience = true
//!
//! [sectionTitles]
//! skills = ""
//! ```

mod file;
mod registry;

pub use registry::{
    Template, TemplateDefaults, TemplateError, TemplateRegistry, DEFAULT_TEMPLATE_ID,
};
