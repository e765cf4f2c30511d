use thiserror::Error;

/// The closed set of error kinds a parse may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The program's argument vector did not include the program path.
    InvalidArgumentCount,
    /// A valued option was supplied without a value.
    MissingValue,
    /// Two different members of a mutually exclusive group were supplied.
    MutexViolation,
    /// An option key that no node responds to.
    UnknownKey,
    /// A positional token with no open positional slot to receive it.
    UnknownPositional,
    /// A value outside of the option's choices.
    UnknownValue,
}

/// The error produced by [`Parser::parse`](crate::Parser::parse).
///
/// The first error encountered aborts the parse, including the parse of any enclosing command.
/// State mutated prior to the error is left as is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[allow(missing_docs)]
    #[error("argc is zero")]
    InvalidArgumentCount,

    #[allow(missing_docs)]
    #[error("value not supplied for arg '{key}'")]
    MissingValue { key: String },

    #[allow(missing_docs)]
    #[error("key '{key}' conflicts with '{conflict}' in a mutually exclusive group")]
    MutexViolation { key: String, conflict: String },

    #[allow(missing_docs)]
    #[error("unknown key: {key}")]
    UnknownKey { key: String },

    #[allow(missing_docs)]
    #[error("unknown positional argument: {token}")]
    UnknownPositional { token: String },

    #[allow(missing_docs)]
    #[error("value '{value}' not in choices list: [{}]", .choices.join(", "))]
    UnknownValue { value: String, choices: Vec<String> },
}

impl ParserError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParserError::InvalidArgumentCount => ErrorKind::InvalidArgumentCount,
            ParserError::MissingValue { .. } => ErrorKind::MissingValue,
            ParserError::MutexViolation { .. } => ErrorKind::MutexViolation,
            ParserError::UnknownKey { .. } => ErrorKind::UnknownKey,
            ParserError::UnknownPositional { .. } => ErrorKind::UnknownPositional,
            ParserError::UnknownValue { .. } => ErrorKind::UnknownValue,
        }
    }

    /// The human readable message of this error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn missing_value(key: &str) -> Self {
        ParserError::MissingValue {
            key: key.to_string(),
        }
    }

    pub(crate) fn unknown_key(key: &str) -> Self {
        ParserError::UnknownKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn unknown_positional(token: &str) -> Self {
        ParserError::UnknownPositional {
            token: token.to_string(),
        }
    }
}
