//! Token-stream parsing.
//!
//! Tokens are classified one at a time into a queue of entries. Option
//! tokens and the command-name token each open a new entry; every other
//! token is a value attached to the most recent entry, so values bind to
//! whatever preceded them rather than to an absolute position.

use tracing::debug;

use crate::command::Command;
use crate::descriptor;
use crate::error::{Error, Result};
use crate::registry::HELP_OPTION;
use crate::types::{OptionValues, ParseResult, Value, ValueKind};

/// What a token stream asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty input or a leading `-h`/`--help`: list every command.
    GlobalHelp,
    /// `-h`/`--help` after the first token: describe this command.
    CommandHelp,
    /// Values for the command's action.
    Parsed(ParseResult),
}

impl Outcome {
    /// Collapses help outcomes into the empty result.
    pub fn into_result(self) -> ParseResult {
        match self {
            Outcome::Parsed(result) => result,
            Outcome::GlobalHelp | Outcome::CommandHelp => ParseResult::empty(),
        }
    }
}

/// Accumulated state for one command or option token.
#[derive(Debug)]
enum Entry {
    Command {
        values: Vec<Option<Value>>,
        next: usize,
    },
    Option {
        index: usize,
        value: Option<Value>,
    },
}

enum Step {
    Continue,
    Help,
}

impl Command {
    /// Parses invocation tokens (program name excluded) against this command.
    ///
    /// # Errors
    ///
    /// Fails on unknown options, misplaced or mistyped positional values, a
    /// missing required argument, a missing required option argument, or a
    /// token stream without exactly one command-name token.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{Command, Outcome, Value};
    ///
    /// let mut command = Command::new();
    /// command
    ///     .create_command("component <component_name>", "")?
    ///     .create_option("-f --functional", "", false)?
    ///     .create_option("-t --type [type]", "", "typescript")?;
    ///
    /// let Outcome::Parsed(result) = command.parse_tokens(&["component", "widget", "-f"])? else {
    ///     panic!("expected values");
    /// };
    /// assert_eq!(result.arg_values, vec![Value::from("widget")]);
    /// assert_eq!(result.option("functional"), Some(&Value::Bool(true)));
    /// assert_eq!(result.option("type"), Some(&Value::from("typescript")));
    /// # Ok::<(), argot_core::Error>(())
    /// ```
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Outcome> {
        let Some(first) = tokens.first() else {
            return Ok(Outcome::GlobalHelp);
        };
        if HELP_OPTION.matches_token(first.as_ref()) {
            return Ok(Outcome::GlobalHelp);
        }

        let mut queue: Vec<Entry> = Vec::new();
        for raw in tokens {
            let token = descriptor::strip_quotes(raw.as_ref());
            if let Step::Help = self.scan_token(&token, &mut queue)? {
                debug!(command = %self.name, "Command help requested");
                return Ok(Outcome::CommandHelp);
            }
        }

        self.resolve(queue).map(Outcome::Parsed)
    }

    fn scan_token(&self, token: &str, queue: &mut Vec<Entry>) -> Result<Step> {
        if let Some(cluster) = descriptor::short_cluster(token) {
            for ch in cluster.chars() {
                match self.options.iter().position(|o| o.short == Some(ch)) {
                    Some(index) => queue.push(Entry::Option { index, value: None }),
                    None if ch == HELP_OPTION.short => return Ok(Step::Help),
                    None => return Err(Error::UnknownShortOption(ch)),
                }
            }
            return Ok(Step::Continue);
        }

        if let Some(long) = descriptor::long_token(token) {
            match self.options.iter().position(|o| o.matches_long(long)) {
                Some(index) => queue.push(Entry::Option { index, value: None }),
                None if long == HELP_OPTION.long => return Ok(Step::Help),
                None => return Err(Error::UnknownLongOption(token.to_string())),
            }
            return Ok(Step::Continue);
        }

        if token == self.name {
            queue.push(Entry::Command {
                values: vec![None; self.arguments.len()],
                next: 0,
            });
            return Ok(Step::Continue);
        }

        match queue.last_mut() {
            Some(entry) => self.attach_value(entry, token)?,
            None => debug!(token, "Ignoring value before any command or option"),
        }
        Ok(Step::Continue)
    }

    fn attach_value(&self, entry: &mut Entry, token: &str) -> Result<()> {
        match entry {
            Entry::Command { values, next } => {
                let argument =
                    self.arguments
                        .get(*next)
                        .ok_or_else(|| Error::UnexpectedPositional {
                            command: self.name.clone(),
                            value: token.to_string(),
                        })?;
                if !argument.kind.accepts(token) {
                    return Err(Error::PositionalTypeMismatch {
                        command: self.name.clone(),
                        argument: argument.name.clone(),
                        value: token.to_string(),
                    });
                }
                match argument.kind {
                    ValueKind::List => push_item(&mut values[*next], token),
                    ValueKind::Boolean => {
                        values[*next] = Some(Value::Bool(token == "true"));
                        *next += 1;
                    }
                    ValueKind::String => {
                        values[*next] = Some(Value::from(token));
                        *next += 1;
                    }
                }
            }
            Entry::Option { index, value } => {
                let option = &self.options[*index];
                let argument =
                    option
                        .argument
                        .as_ref()
                        .ok_or_else(|| Error::UnexpectedOptionValue {
                            option: option.name.clone(),
                            value: token.to_string(),
                        })?;
                if argument.is_list() {
                    push_item(value, token);
                } else {
                    *value = Some(Value::from(token));
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, queue: Vec<Entry>) -> Result<ParseResult> {
        let mut command_values = None;
        let mut supplied: Vec<Vec<Option<Value>>> = vec![Vec::new(); self.options.len()];

        for entry in queue {
            match entry {
                Entry::Command { values, .. } => {
                    if command_values.replace(values).is_some() {
                        return Err(Error::RepeatedCommand(self.name.clone()));
                    }
                }
                Entry::Option { index, value } => supplied[index].push(value),
            }
        }

        let values = command_values.ok_or_else(|| Error::InvalidCommand(self.name.clone()))?;

        let mut arg_values = Vec::with_capacity(self.arguments.len());
        for (argument, value) in self.arguments.iter().zip(values) {
            match value {
                Some(value) if value.is_present() => arg_values.push(value),
                _ if argument.required => return Err(Error::MissingArgument(argument.name.clone())),
                _ => arg_values.push(argument.default.clone()),
            }
        }

        let mut option_values = OptionValues::new();
        for (option, entries) in self.options.iter().zip(supplied) {
            let resolved = match &option.argument {
                Some(argument) => {
                    let given = merge_supplied(argument.is_list(), entries);
                    match given {
                        Some(value) => value,
                        None if !argument.required => argument.default.clone(),
                        None => {
                            return Err(Error::MissingOptionArgument {
                                option: option.name.clone(),
                                argument: argument.name.clone(),
                            });
                        }
                    }
                }
                None if entries.is_empty() => option.default.clone(),
                None => Value::Bool(true),
            };
            option_values.insert(option.name.clone(), resolved);
        }

        debug!(
            command = %self.name,
            args = arg_values.len(),
            options = option_values.len(),
            "Parsed command tokens"
        );
        Ok(ParseResult {
            arg_values,
            option_values,
        })
    }
}

fn push_item(slot: &mut Option<Value>, token: &str) {
    match slot {
        Some(Value::List(items)) => items.push(token.to_string()),
        _ => *slot = Some(Value::list([token])),
    }
}

/// List options gather every occurrence in order; scalar options keep the
/// last supplied value.
fn merge_supplied(list: bool, entries: Vec<Option<Value>>) -> Option<Value> {
    let supplied = entries.into_iter().flatten().filter(Value::is_present);
    if list {
        let items: Vec<String> = supplied
            .flat_map(|value| match value {
                Value::List(items) => items,
                other => vec![other.to_string()],
            })
            .collect();
        (!items.is_empty()).then_some(Value::List(items))
    } else {
        supplied.last()
    }
}
