use thiserror::Error;

use super::Command;

/// Why an argv list could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A value-requiring option had neither a glued value nor a following token.
    #[error("option '{option}' requires a value")]
    MissingOptionValue { option: String },
}

impl ParseError {
    pub(crate) fn missing_value(option: impl Into<String>) -> Self {
        Self::MissingOptionValue {
            option: option.into(),
        }
    }

    /// The option that caused the failure.
    pub fn option(&self) -> &str {
        match self {
            Self::MissingOptionValue { option } => option,
        }
    }
}

/// Outcome of a single parse: the whole command or the first error.
pub type ParseResult = Result<Command, ParseError>;
