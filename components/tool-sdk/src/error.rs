//! Error types for the tool SDK.
//!
//! Validation failure is deliberately NOT an error: a rejected command is a
//! normal [`Verdict`](crate::types::Verdict) value. The enums here cover the
//! cases where an operation cannot produce a result at all.

use crate::types::RejectReason;
use thiserror::Error;

/// Errors raised while converting a command into a request template.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The command is empty or whitespace only.
    #[error("Command is empty")]
    EmptyCommand,

    /// The command could not be tokenized, typically an unclosed quote.
    #[error("Command has unbalanced quoting")]
    UnbalancedQuoting,

    /// An option that takes a value appeared as the last token.
    #[error("Option '{option}' is missing a value")]
    MissingValue {
        /// The option missing its value.
        option: String,
    },

    /// A header value is not in `Name: value` form.
    #[error("Header '{header}' is not in 'Name: value' form")]
    MalformedHeader {
        /// The header as supplied.
        header: String,
    },

    /// The method is not one the platform can proxy.
    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod {
        /// The method as supplied.
        method: String,
    },

    /// No URL token was found anywhere in the command.
    #[error("Command does not specify a URL")]
    MissingUrl,
}

/// Errors raised while registering or removing a tool.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The command failed validation.
    #[error("Command rejected: {reason}")]
    RejectedCommand {
        /// Why the validator rejected the command.
        reason: RejectReason,
    },

    /// A submission field is shorter than the policy minimum.
    #[error("Field '{field}' must be at least {min} characters")]
    FieldTooShort {
        /// Name of the offending field.
        field: &'static str,
        /// Minimum length the policy requires.
        min: usize,
    },

    /// A tool with this name is already registered.
    #[error("Tool '{name}' is already registered")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// No tool with this name is registered.
    #[error("Tool '{name}' not found")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The command passed validation but could not be parsed.
    #[error("Failed to parse command: {0}")]
    Parse(#[from] ParseError),
}

/// Errors raised while loading or building a submission policy.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value is out of range or unparseable.
    #[error("Invalid configuration for '{key}': {value}")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// The invalid value.
        value: String,
    },
}
