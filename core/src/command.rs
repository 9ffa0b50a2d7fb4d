//! Command declaration from descriptor strings.

use std::fmt;

use futures::future::BoxFuture;
use tracing::debug;

use crate::descriptor;
use crate::error::{ActionError, Error, Result};
use crate::types::{Argument, CliOption, OptionValues, Value, ValueKind};

type SyncAction = dyn Fn(&[Value], &OptionValues) -> std::result::Result<(), ActionError> + Send + Sync;
type AsyncAction = dyn Fn(Vec<Value>, OptionValues) -> BoxFuture<'static, std::result::Result<(), ActionError>>
    + Send
    + Sync;

/// Callback run with a command's parsed values.
pub enum Action {
    /// Placeholder installed by [`Command::new`].
    Unset,
    /// Runs to completion on the caller's thread.
    Sync(Box<SyncAction>),
    /// Returns a future awaited by [`Registry::run_async`](crate::Registry::run_async).
    Async(Box<AsyncAction>),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Unset => f.write_str("Action::Unset"),
            Action::Sync(_) => f.write_str("Action::Sync(..)"),
            Action::Async(_) => f.write_str("Action::Async(..)"),
        }
    }
}

/// A command declared from descriptor strings.
///
/// # Examples
///
/// ```
/// use argot_core::{Command, Value};
///
/// let mut command = Command::new();
/// command
///     .create_command("component <component_name>", "Creates a component")?
///     .create_option("-f --functional", "Functional component", false)?
///     .create_option("-t --type [type]", "Component language", "typescript")?;
///
/// assert_eq!(command.name, "component");
/// assert_eq!(command.arguments[0].name, "component_name");
/// assert!(command.find_short('f').is_some());
/// assert!(command.find_long("--type").is_some());
/// # Ok::<(), argot_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Command {
    /// First token of the command descriptor.
    pub name: String,
    pub description: String,
    /// Positional arguments in matching order.
    pub arguments: Vec<Argument>,
    /// Declared options in declaration order.
    pub options: Vec<CliOption>,
    pub(crate) action: Action,
}

impl Default for Command {
    fn default() -> Self {
        Self::new()
    }
}

impl Command {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            arguments: Vec::new(),
            options: Vec::new(),
            action: Action::Unset,
        }
    }

    /// Declares the command name and its positional arguments.
    ///
    /// `descriptor` is split on whitespace: the first token is the name and
    /// every later token must be `<name>` or `[name]`, optionally ending in
    /// `...` inside the brackets for a list argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DescriptorSyntax`] for an empty descriptor or a token
    /// that is neither placeholder form.
    pub fn create_command(&mut self, descriptor: &str, description: &str) -> Result<&mut Self> {
        let mut tokens = descriptor.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| Error::DescriptorSyntax(descriptor.to_string()))?;

        let mut arguments = Vec::new();
        for token in tokens {
            let placeholder = descriptor::positional(token)
                .ok_or_else(|| Error::DescriptorSyntax(token.to_string()))?;
            let (kind, default) = if placeholder.list {
                (ValueKind::List, Value::empty_list())
            } else {
                (ValueKind::String, Value::String(String::new()))
            };
            arguments.push(Argument {
                name: placeholder.name,
                required: placeholder.required,
                kind,
                default,
            });
        }

        debug!(command = name, arguments = arguments.len(), "Declared command");
        self.name = name.to_string();
        self.description = description.to_string();
        self.arguments = arguments;
        Ok(self)
    }

    /// Extracts an argument placeholder from anywhere inside `arg_string`.
    ///
    /// When `is_option_arg` is `false` the argument is also appended to the
    /// positional arguments. Returns `None` when `arg_string` holds no
    /// placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefaultMismatch`] when a list placeholder gets a
    /// non-list default or none at all, or a scalar placeholder gets a list
    /// default.
    pub fn create_argument(
        &mut self,
        arg_string: &str,
        is_option_arg: bool,
        default: Option<Value>,
    ) -> Result<Option<Argument>> {
        let Some(placeholder) = descriptor::embedded(arg_string) else {
            return Ok(None);
        };

        let mismatched = match &default {
            Some(given) => placeholder.list != given.is_list(),
            None => placeholder.list,
        };
        if mismatched {
            return Err(Error::DefaultMismatch(arg_string.to_string()));
        }

        let kind = if placeholder.list {
            ValueKind::List
        } else if !is_option_arg && matches!(default, Some(Value::Bool(_))) {
            ValueKind::Boolean
        } else {
            ValueKind::String
        };
        let default = default.unwrap_or_else(|| {
            if is_option_arg {
                Value::Bool(false)
            } else {
                Value::String(String::new())
            }
        });

        let argument = Argument {
            name: placeholder.name,
            required: placeholder.required,
            kind,
            default,
        };
        if !is_option_arg {
            self.arguments.push(argument.clone());
        }
        Ok(Some(argument))
    }

    /// Declares an option such as `-t --type [type]`.
    ///
    /// The canonical name is the camel-cased long form, or the short form
    /// when no long form is given. Any placeholder in the descriptor becomes
    /// the option's value argument, with `default` as its default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DescriptorSyntax`] when the descriptor has neither a
    /// short nor a long form, and [`Error::DefaultMismatch`] as described in
    /// [`create_argument`](Self::create_argument).
    pub fn create_option(
        &mut self,
        option_string: &str,
        description: &str,
        default: impl Into<Value>,
    ) -> Result<&mut Self> {
        let default = default.into();
        let short = descriptor::descriptor_short(option_string);
        let long = descriptor::descriptor_long(option_string).unwrap_or_default();

        let name = if long.is_empty() {
            short
                .map(String::from)
                .ok_or_else(|| Error::DescriptorSyntax(option_string.to_string()))?
        } else {
            descriptor::kebab_to_camel(&long[2..])
        };

        let argument = self.create_argument(option_string, true, Some(default.clone()))?;
        debug!(option = %name, takes_value = argument.is_some(), "Declared option");

        self.options.push(CliOption {
            short,
            name,
            long: long.to_string(),
            description: description.to_string(),
            default,
            argument,
        });
        Ok(self)
    }

    /// Installs a synchronous action, called with positional values followed
    /// by the option map.
    pub fn create_action<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&[Value], &OptionValues) -> std::result::Result<(), ActionError> + Send + Sync + 'static,
    {
        self.action = Action::Sync(Box::new(action));
        self
    }

    /// Installs an action whose future is awaited after parsing.
    pub fn create_async_action<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(Vec<Value>, OptionValues) -> BoxFuture<'static, std::result::Result<(), ActionError>>
            + Send
            + Sync
            + 'static,
    {
        self.action = Action::Async(Box::new(action));
        self
    }

    /// Finds an option by its short form.
    pub fn find_short(&self, short: char) -> Option<&CliOption> {
        self.options.iter().find(|o| o.short == Some(short))
    }

    /// Finds an option by long spelling or canonical name.
    pub fn find_long(&self, token: &str) -> Option<&CliOption> {
        self.options.iter().find(|o| o.matches_long(token))
    }

    /// Usage fragment: `name [options] <req> [opt]`.
    pub fn usage(&self) -> String {
        let mut usage = format!("{} [options]", self.name);
        for arg in &self.arguments {
            usage.push(' ');
            usage.push_str(&arg.placeholder());
        }
        usage
    }
}
