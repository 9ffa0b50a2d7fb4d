//! Writing component files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, ScaffoldError};
use crate::spec::ComponentSpec;
use crate::template::render_component;

/// Paths written for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFiles {
    pub dir: PathBuf,
    pub source: PathBuf,
    pub stylesheet: PathBuf,
}

/// Creates `root/<name>/` holding the component source and an empty
/// stylesheet.
///
/// # Errors
///
/// Returns [`ScaffoldError::AlreadyExists`] when the path exists and either
/// `spec.force` is not set or the path is not a directory, or
/// [`ScaffoldError::Io`] when a write fails.
pub fn write_component(root: impl AsRef<Path>, spec: &ComponentSpec) -> Result<ComponentFiles> {
    let dir = root.as_ref().join(&spec.name);

    if dir.exists() {
        // force only ever replaces a component directory
        if !spec.force || !dir.is_dir() {
            return Err(ScaffoldError::AlreadyExists(dir));
        }
        warn!(path = %dir.display(), "Replacing existing component");
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;

    let source = dir.join(format!("{}.{}", spec.name, spec.language.extension()));
    fs::write(&source, render_component(spec))?;

    let stylesheet = dir.join(format!("{}.{}", spec.name, spec.css_extension));
    fs::write(&stylesheet, "")?;

    info!(component = %spec.name, path = %dir.display(), "Component created");
    Ok(ComponentFiles {
        dir,
        source,
        stylesheet,
    })
}
