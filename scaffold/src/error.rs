//! Error types for component scaffolding.
//!
//! Covers configuration loading, option validation, and filesystem writes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scaffolding a component.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Neither `--functional` nor `--class` was given.
    #[error("provide -f or -c for component to be functional or class")]
    MissingStyle,

    /// The component name cannot be used as a directory or identifier.
    #[error("invalid component name: {0:?}")]
    InvalidComponentName(String),

    /// The component directory exists and `--force` was not given.
    #[error("component already exists at {}; use --force to replace the component", .0.display())]
    AlreadyExists(PathBuf),

    /// `--type` named a language other than TypeScript or JavaScript.
    #[error("unsupported component type {0:?}; expected typescript or javascript")]
    UnsupportedLanguage(String),
}

/// Convenience alias for results with [`ScaffoldError`].
pub type Result<T> = std::result::Result<T, ScaffoldError>;
