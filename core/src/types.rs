//! Value and declaration types for commands.
//!
//! This module defines the data model shared by the descriptor parser, the
//! token parser, and the help renderer. Declarations are immutable once a
//! [`Command`](crate::Command) has built them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Declared kind of an argument value.
///
/// Tokens are validated against the declared kind, not against the runtime
/// shape of a default value.
///
/// # Examples
///
/// ```
/// use argot_core::ValueKind;
///
/// assert!(ValueKind::String.accepts("anything"));
/// assert!(ValueKind::Boolean.accepts("true"));
/// assert!(!ValueKind::Boolean.accepts("yes"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueKind {
    /// Single string value (the default).
    #[default]
    String,
    /// `true` or `false`.
    Boolean,
    /// Ordered list of strings, filled one token at a time.
    List,
}

impl ValueKind {
    /// Returns `true` when `token` is a valid value of this kind.
    pub fn accepts(self, token: &str) -> bool {
        match self {
            ValueKind::String | ValueKind::List => true,
            ValueKind::Boolean => matches!(token, "true" | "false"),
        }
    }
}

/// A parsed or default value.
///
/// # Examples
///
/// ```
/// use argot_core::Value;
///
/// let v = Value::from("typescript");
/// assert_eq!(v.as_str(), Some("typescript"));
/// assert_eq!(Value::from(false).to_string(), "false");
/// assert_eq!(Value::list(["a", "b"]).to_string(), "[a, b]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    List(Vec<String>),
}

impl Value {
    /// Builds a list value from any string-like items.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Empty list value.
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Whether this value counts as supplied.
    ///
    /// Empty strings and empty lists count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Bool(_) => true,
            Value::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Option values keyed by canonical (camelCase) option name, in declaration
/// order.
pub type OptionValues = IndexMap<String, Value>;

/// A value slot declared by a command descriptor or an option descriptor.
///
/// # Examples
///
/// ```
/// use argot_core::{Argument, Value, ValueKind};
///
/// let arg = Argument::required("component_name", ValueKind::String, Value::from(""))?;
/// assert!(arg.required);
/// assert_eq!(arg.placeholder(), "<component_name>");
///
/// let files = Argument::optional("files", ValueKind::List, Value::empty_list())?;
/// assert_eq!(files.placeholder(), "[files...]");
///
/// // a list slot needs a list default
/// assert!(Argument::optional("files", ValueKind::List, Value::from("oops")).is_err());
/// # Ok::<(), argot_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Identifier, without the `...` list marker.
    pub name: String,
    /// `true` for `<name>`, `false` for `[name]`.
    pub required: bool,
    /// Declared value kind.
    pub kind: ValueKind,
    /// Fallback for optional arguments. Never consulted when `required`.
    pub default: Value,
}

impl Argument {
    /// Declares a `<name>` slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefaultMismatch`] when `kind` is [`ValueKind::List`]
    /// and `default` is not a list, or the other way round.
    pub fn required(name: &str, kind: ValueKind, default: Value) -> Result<Self> {
        Self::new(name, true, kind, default)
    }

    /// Declares a `[name]` slot; errors as [`Argument::required`].
    pub fn optional(name: &str, kind: ValueKind, default: Value) -> Result<Self> {
        Self::new(name, false, kind, default)
    }

    fn new(name: &str, required: bool, kind: ValueKind, default: Value) -> Result<Self> {
        if (kind == ValueKind::List) != default.is_list() {
            return Err(Error::DefaultMismatch(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            required,
            kind,
            default,
        })
    }

    pub fn is_list(&self) -> bool {
        self.kind == ValueKind::List
    }

    /// Descriptor spelling: `<name>` or `[name]`, with `...` for lists.
    pub fn placeholder(&self) -> String {
        let marker = if self.is_list() { "..." } else { "" };
        if self.required {
            format!("<{}{marker}>", self.name)
        } else {
            format!("[{}{marker}]", self.name)
        }
    }
}

/// A named flag declared on a command.
///
/// An option without an [`Argument`] is a boolean switch.
///
/// # Examples
///
/// ```
/// use argot_core::{CliOption, Value};
///
/// let force = CliOption::switch(None, "force", "--force", "Replace existing files");
/// assert!(force.matches_long("--force"));
/// assert!(force.matches_long("force"));
/// assert_eq!(force.default, Value::Bool(false));
/// assert_eq!(force.display_name(), "--force");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliOption {
    /// Short form character (e.g. `f` for `-f`).
    pub short: Option<char>,
    /// Canonical lower-camel-case name (e.g. `reduxConnect`).
    pub name: String,
    /// Literal long spelling (e.g. `--redux-connect`); empty for short-only options.
    pub long: String,
    /// Description shown in help.
    pub description: String,
    /// Declared default, shown in help and used for switches.
    pub default: Value,
    /// Attached value argument, if any.
    pub argument: Option<Argument>,
}

impl CliOption {
    /// Creates a boolean switch defaulting to `false`.
    pub fn switch(short: Option<char>, name: &str, long: &str, description: &str) -> Self {
        Self {
            short,
            name: name.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            default: Value::Bool(false),
            argument: None,
        }
    }

    /// Attaches a value argument.
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.argument = Some(argument);
        self
    }

    /// Sets the declared default.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    /// Checks a long token, given either with or without the leading `--`.
    ///
    /// Both the literal spelling (`--redux-connect`) and the canonical name
    /// (`--reduxConnect`) are accepted.
    pub fn matches_long(&self, token: &str) -> bool {
        let bare = token.strip_prefix("--").unwrap_or(token);
        (!self.long.is_empty() && self.long.trim_start_matches('-') == bare) || self.name == bare
    }

    /// Help spelling: `-t, --type [type]`.
    pub fn display_name(&self) -> String {
        let mut out = match (self.short, self.long.is_empty()) {
            (Some(short), false) => format!("-{short}, {}", self.long),
            (Some(short), true) => format!("-{short}"),
            (None, _) => self.long.clone(),
        };
        if let Some(arg) = &self.argument {
            out.push(' ');
            out.push_str(&arg.placeholder());
        }
        out
    }
}

/// Parsed values for one command invocation.
///
/// The empty result (no positional values and no option values) means no
/// action should run, e.g. after help was rendered.
///
/// # Examples
///
/// ```
/// use argot_core::ParseResult;
///
/// let empty = ParseResult::empty();
/// assert!(empty.is_empty());
/// assert!(!empty.should_invoke());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Positional values aligned with the command's arguments.
    pub arg_values: Vec<Value>,
    /// Option values keyed by canonical name.
    pub option_values: OptionValues,
}

impl ParseResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.arg_values.is_empty() && self.option_values.is_empty()
    }

    /// Returns `true` when both positional and option values are present.
    pub fn should_invoke(&self) -> bool {
        !self.arg_values.is_empty() && !self.option_values.is_empty()
    }

    /// Looks up an option value by canonical name.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.option_values.get(name)
    }

    /// Convenience accessor for switch options; absent or non-boolean is `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.option(name).and_then(Value::as_bool).unwrap_or(false)
    }
}
