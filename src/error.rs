//! Error types for loading resume documents

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read resume file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resume YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Contact information is required")]
    MissingContact,

    #[error("Full name and email are required in contact information")]
    MissingNameOrEmail,
}
