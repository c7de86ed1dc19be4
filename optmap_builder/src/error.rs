use thiserror::Error;

use crate::model::ValueKind;

/// An invalid target declaration (ex: an alias shared by two members).
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A failure to map input tokens onto a target, or to dispatch its command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The alias matches no declared option.
    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),

    /// The member behind the alias was already resolved by an earlier token.
    #[error("Cannot duplicate the option '{alias}' (member '{member}').")]
    DuplicateOption {
        /// The alias of the repeated token.
        alias: String,
        /// The member resolved twice.
        member: String,
    },

    /// A value option is the final token.
    #[error("Option '{0}' expects a value, but no more tokens were provided.")]
    MissingValue(String),

    /// The token does not begin with any of the configured prefixes.
    #[error("Token '{0}' is not an option.")]
    UnexpectedToken(String),

    /// The member behind the alias is neither `String` nor `bool`.
    #[error("Member '{member}' has type '{type_name}', expected String or bool.")]
    UnsupportedValueType {
        /// The member name.
        member: String,
        /// The declared type of the member.
        type_name: String,
    },

    /// No constructor's parameters match the resolved option keys exactly.
    #[error("No constructor accepts precisely the options [{}].", .0.join(", "))]
    NoMatchingConstructor(Vec<String>),

    /// A constructor read a parameter as the wrong kind of value.
    #[error("Constructor parameter '{parameter}' is not a {expected} option.")]
    ArgumentMismatch {
        /// The constructor parameter name.
        parameter: String,
        /// The kind of value the constructor attempted to read.
        expected: ValueKind,
    },

    /// A constructor read more arguments than it declares parameters.
    #[error("No more constructor arguments to read.")]
    ArgumentsExhausted,

    /// The target cannot be created without a constructor matching the options.
    #[error("Target '{0}' does not declare a default constructor.")]
    NoDefaultConstructor(String),

    /// No command token was provided.
    #[error("No command provided.")]
    MissingCommand,

    /// The command token matches no declared handler.
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),
}
