//! @acp:module "Errors"
//! @acp:summary "Error types for config and catalog loading"
//! @acp:domain cli
//! @acp:layer types
//!
//! Resolution itself never fails. These errors only cover the edges:
//! reading files, parsing them, and looking up pages or categories by name.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or addressing site content.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported file format: {0:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// No page with this name in the site config.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// Category name did not parse.
    #[error("unknown content category: {0}")]
    UnknownCategory(String),

    /// Config loaded but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Two entries of one category share an identifier.
    #[error("duplicate {category} id: {id}")]
    DuplicateEntryId { category: String, id: String },
}

pub type Result<T> = std::result::Result<T, FolioError>;
