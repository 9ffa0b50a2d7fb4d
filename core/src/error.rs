//! Error types for descriptor construction, token parsing, and dispatch.
//!
//! Every failure is fatal and surfaces to the caller unchanged. Help output
//! is not an error: it is reported through
//! [`Outcome`](crate::Outcome) instead.

use thiserror::Error;

/// Boxed error returned by command actions.
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while declaring or parsing a command.
#[derive(Debug, Error)]
pub enum Error {
    /// A command or option descriptor does not follow the descriptor syntax.
    #[error("argument {0} is not given correctly")]
    DescriptorSyntax(String),

    /// A default value disagrees with the list marker of its argument.
    #[error("give correct default for option {0}")]
    DefaultMismatch(String),

    /// A character in a short-form cluster names no declared option.
    #[error("unknown option -{0}; use -h or --help to know more about options")]
    UnknownShortOption(char),

    /// A long-form token names no declared option.
    #[error("unknown option {0}; use -h or --help to know more about options")]
    UnknownLongOption(String),

    /// A positional value was supplied after every argument was filled.
    #[error("{value} for command {command} is not present")]
    UnexpectedPositional { command: String, value: String },

    /// A positional value does not fit the declared kind of its argument.
    #[error("{value} for command {command} is not of correct type for <{argument}>")]
    PositionalTypeMismatch {
        command: String,
        argument: String,
        value: String,
    },

    /// A required positional argument received no value.
    #[error("{0} is required and not provided")]
    MissingArgument(String),

    /// A value followed an option that takes no argument.
    #[error("option {option} does not take a value, got {value}")]
    UnexpectedOptionValue { option: String, value: String },

    /// A required option argument received no value.
    #[error("{argument} is required for option {option}")]
    MissingOptionArgument { option: String, argument: String },

    /// The command name never appeared in the token stream.
    #[error("enter a valid command name; use -h or --help to know more about {0}")]
    InvalidCommand(String),

    /// The command name appeared more than once in the token stream.
    #[error("command {0} was given more than once")]
    RepeatedCommand(String),

    /// No registered command has the requested name.
    #[error("no command named {0} is registered")]
    UnknownCommand(String),

    /// The command action failed.
    #[error("action for {command} failed: {source}")]
    Action {
        command: String,
        #[source]
        source: ActionError,
    },

    /// Writing help output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
