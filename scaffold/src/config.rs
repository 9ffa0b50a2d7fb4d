//! Project-level scaffolding defaults.
//!
//! Loaded from an optional YAML file (`.argot.yml` by default) in the
//! directory the tool runs in. Every field may be omitted.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! output_dir: src/components
//! language: typescript
//! css_extension: scss
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::spec::Language;

/// File name looked up by [`ScaffoldConfig::discover`].
pub const CONFIG_FILE_NAME: &str = ".argot.yml";

/// Defaults applied to the `component` command.
///
/// # Examples
///
/// ```
/// # use argot_scaffold::{Language, ScaffoldConfig};
/// let config: ScaffoldConfig = serde_yaml::from_str("css_extension: scss").unwrap();
/// assert_eq!(config.css_extension, "scss");
/// assert_eq!(config.language, Language::TypeScript);
/// assert_eq!(config.output_dir, std::path::PathBuf::from("."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Directory new component folders are created in.
    pub output_dir: PathBuf,
    /// Default for `--type`.
    pub language: Language,
    /// Default for `--cssext`.
    pub css_extension: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            output_dir: PathBuf::from("."),
            language: Language::TypeScript,
            css_extension: "css".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ScaffoldError::Io) if the file cannot be read,
    /// or [`Yaml`](crate::ScaffoldError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Loads `dir/.argot.yml`, or returns defaults when the file is absent.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "No scaffold config, using defaults");
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "Loading scaffold config");
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
output_dir: src/components
language: javascript
css_extension: scss
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: ScaffoldConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.output_dir, PathBuf::from("src/components"));
        assert_eq!(config.language, Language::JavaScript);
        assert_eq!(config.css_extension, "scss");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: ScaffoldConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::discover(dir.path()).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let original: ScaffoldConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let loaded = ScaffoldConfig::discover(dir.path()).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_rejects_bad_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "language: cobol\n").unwrap();

        assert!(matches!(
            ScaffoldConfig::load(&path),
            Err(crate::ScaffoldError::Yaml(_))
        ));
    }
}
