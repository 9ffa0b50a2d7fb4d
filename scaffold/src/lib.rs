//! React component scaffolding.
//!
//! The `component` command of the `argot` binary hands its parsed values to
//! this crate:
//!
//! - [`ComponentSpec::from_options`] decodes the option map.
//! - [`render_component`] renders the component source.
//! - [`write_component`] creates the component directory and files.
//! - [`ScaffoldConfig`] supplies per-project defaults from `.argot.yml`.
//!
//! # Example
//!
//! ```no_run
//! use argot_scaffold::{ComponentSpec, ScaffoldConfig, write_component};
//! use argot_core::{OptionValues, Value};
//!
//! let config = ScaffoldConfig::discover(".").unwrap();
//! let mut options = OptionValues::new();
//! options.insert("functional".into(), Value::Bool(true));
//!
//! let spec = ComponentSpec::from_options("user-card", &options).unwrap();
//! let files = write_component(&config.output_dir, &spec).unwrap();
//! println!("wrote {}", files.source.display());
//! ```

mod config;
mod error;
mod spec;
mod template;
mod writer;

pub use config::{CONFIG_FILE_NAME, ScaffoldConfig};
pub use error::{Result, ScaffoldError};
pub use spec::{ComponentSpec, Language, Style, component_identifier};
pub use template::render_component;
pub use writer::{ComponentFiles, write_component};
