//! Descriptor-driven command-line parsing.
//!
//! This crate declares a command from compact descriptor strings and parses
//! invocation tokens against it:
//!
//! - [`Command`]: built with [`create_command`](Command::create_command),
//!   [`create_option`](Command::create_option), and
//!   [`create_argument`](Command::create_argument); parses tokens with
//!   [`parse_tokens`](Command::parse_tokens).
//! - [`Argument`]: a positional or option value slot.
//! - [`CliOption`]: a flag with short/long forms and an optional value.
//! - [`Value`] / [`ValueKind`]: string, boolean, or list values.
//! - [`Registry`]: owns every command, renders help, and runs actions.
//!
//! Descriptor syntax: `<name>` is required, `[name]` is optional, and a
//! trailing `...` inside the brackets makes the value a list. Options look
//! like `-t --type [type]`; the canonical name of `--redux-connect` is
//! `reduxConnect`.
//!
//! # Example
//!
//! ```
//! use argot_core::*;
//!
//! let mut command = Command::new();
//! command
//!     .create_command("component <component_name>", "Creates a component")?
//!     .create_option("-f --functional", "Functional component", false)?
//!     .create_option("-c --class", "Class component", false)?
//!     .create_option("-t --type [type]", "Language", "typescript")?;
//!
//! let mut registry = Registry::new("argot");
//! registry.register(command);
//!
//! let mut help = Vec::new();
//! let result = registry.parse_command("component", &["component", "widget", "-cf"], &mut help)?;
//! assert_eq!(result.arg_values, vec![Value::from("widget")]);
//! assert!(result.flag("functional") && result.flag("class"));
//! assert_eq!(result.option("type"), Some(&Value::from("typescript")));
//! # Ok::<(), argot_core::Error>(())
//! ```

mod command;
pub mod descriptor;
mod error;
pub mod help;
mod parser;
mod registry;
mod types;

pub use command::{Action, Command};
pub use error::{ActionError, Error, Result};
pub use parser::Outcome;
pub use registry::{HELP_OPTION, HelpOption, Registry};
pub use types::*;
