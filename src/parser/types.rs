//! Parser Types
//!
//! The structured command handed to the dispatcher and the errors raised
//! while producing it.

use thiserror::Error;

/// Error raised by the lexer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A redirection operator or the line ended where a value was expected.
    #[error("unexpected end of line")]
    UnexpectedEndOfLine { position: usize },
}

impl SyntaxError {
    /// Character offset in the line where the error was found.
    pub fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfLine { position } => *position,
        }
    }
}

/// Error raised while turning tokens into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalCommandError {
    #[error("multiple input redirections")]
    MultipleInputRedirections,

    #[error("multiple output redirections")]
    MultipleOutputRedirections,

    #[error("conflicting output redirections")]
    ConflictingOutputRedirections,
}

/// Any failure between a raw line and a [`ParsedCommand`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseException {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Illegal command: {0}")]
    IllegalCommand(#[from] IllegalCommandError),
}

/// A command line reduced to its name, arguments and redirection targets.
///
/// `output` and `output_append` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: Option<String>,
    pub arguments: Vec<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub output_append: Option<String>,
}
