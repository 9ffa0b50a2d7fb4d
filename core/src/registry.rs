//! Command registry and dispatch.
//!
//! A [`Registry`] is built once at program start, before any parsing. It
//! owns every declared [`Command`], supplies the global help listing, and
//! runs actions. Parsing takes `&self`, so the set of commands cannot change
//! once dispatch begins.

use std::io::Write;

use tracing::{debug, info};

use crate::command::{Action, Command};
use crate::error::{Error, Result};
use crate::help;
use crate::parser::Outcome;
use crate::types::ParseResult;

/// The single built-in help flag, recognized for every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpOption {
    pub short: char,
    /// Long form without the leading dashes.
    pub long: &'static str,
    pub description: &'static str,
}

impl HelpOption {
    /// Returns `true` for `-h` or `--help`.
    pub fn matches_token(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.long;
        }
        token
            .strip_prefix('-')
            .is_some_and(|rest| rest.len() == 1 && rest.starts_with(self.short))
    }
}

/// `-h, --help`.
pub const HELP_OPTION: HelpOption = HelpOption {
    short: 'h',
    long: "help",
    description: "Display help for command",
};

/// Owns every declared command for a program.
///
/// # Examples
///
/// ```
/// use argot_core::{Command, Registry};
///
/// let mut command = Command::new();
/// command
///     .create_command("greet <name>", "Says hello")?
///     .create_option("-l --loud", "Shout", false)?;
///
/// let mut registry = Registry::new("demo");
/// registry.register(command);
///
/// let mut out = Vec::new();
/// let result = registry.parse_command("greet", &["greet", "ada", "-l"], &mut out)?;
/// assert!(result.flag("loud"));
/// assert!(out.is_empty());
///
/// // help is rendered to the sink and yields the empty result
/// let result = registry.parse_command("greet", &["--help"], &mut out)?;
/// assert!(result.is_empty());
/// assert!(String::from_utf8(out).unwrap().contains("greet [options] <name>"));
/// # Ok::<(), argot_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Registry {
    program: String,
    commands: Vec<Command>,
}

impl Registry {
    /// Creates an empty registry; `program` is shown in usage lines.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            commands: Vec::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Adds a command and returns a reference to it.
    pub fn register(&mut self, command: Command) -> &Command {
        debug!(command = %command.name, "Registered command");
        self.commands.push(command);
        &self.commands[self.commands.len() - 1]
    }

    /// Every registered command in registration order.
    pub fn list_all(&self) -> &[Command] {
        &self.commands
    }

    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    fn get(&self, name: &str) -> Result<&Command> {
        self.find(name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))
    }

    /// Parses `tokens` for the command named `command`.
    ///
    /// Help outcomes are rendered to `out` and return the empty result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] when no such command is registered,
    /// any parse error from [`Command::parse_tokens`], or [`Error::Io`] when
    /// help cannot be written.
    pub fn parse_command<S, W>(&self, command: &str, tokens: &[S], out: &mut W) -> Result<ParseResult>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let target = self.get(command)?;
        match target.parse_tokens(tokens)? {
            Outcome::GlobalHelp => {
                help::render_global_help(self, out)?;
                Ok(ParseResult::empty())
            }
            Outcome::CommandHelp => {
                help::render_command_help(&self.program, target, out)?;
                Ok(ParseResult::empty())
            }
            Outcome::Parsed(result) => Ok(result),
        }
    }

    /// Parses `tokens` and runs the command's synchronous action.
    ///
    /// The action only runs when the result carries both positional and
    /// option values. Async actions must go through [`run_async`](Self::run_async).
    pub fn run<S, W>(&self, command: &str, tokens: &[S], out: &mut W) -> Result<ParseResult>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let result = self.parse_command(command, tokens, out)?;
        if !result.should_invoke() {
            return Ok(result);
        }

        let target = self.get(command)?;
        match &target.action {
            Action::Unset => info!(command = %target.name, "This command doesn't do anything yet!"),
            Action::Sync(action) => {
                action(&result.arg_values, &result.option_values).map_err(|source| Error::Action {
                    command: target.name.clone(),
                    source,
                })?
            }
            Action::Async(action) => {
                futures::executor::block_on(action(
                    result.arg_values.clone(),
                    result.option_values.clone(),
                ))
                .map_err(|source| Error::Action {
                    command: target.name.clone(),
                    source,
                })?
            }
        }
        Ok(result)
    }

    /// Parses `tokens` and awaits the command's action.
    pub async fn run_async<S, W>(&self, command: &str, tokens: &[S], out: &mut W) -> Result<ParseResult>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let result = self.parse_command(command, tokens, out)?;
        if !result.should_invoke() {
            return Ok(result);
        }

        let target = self.get(command)?;
        let outcome = match &target.action {
            Action::Unset => {
                info!(command = %target.name, "This command doesn't do anything yet!");
                Ok(())
            }
            Action::Sync(action) => action(&result.arg_values, &result.option_values),
            Action::Async(action) => {
                action(result.arg_values.clone(), result.option_values.clone()).await
            }
        };
        outcome.map_err(|source| Error::Action {
            command: target.name.clone(),
            source,
        })?;
        Ok(result)
    }
}
