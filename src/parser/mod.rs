//! Parser module for shell lines
//!
//! This module contains the lexer and the command parser.

pub mod types;
pub mod lexer;
pub mod command_parser;

// Re-exports
pub use types::{IllegalCommandError, ParseException, ParsedCommand, SyntaxError};
pub use lexer::{tokenize, Lexer, Token, TokenType};
pub use command_parser::analyse;

/// Tokenize and analyse one line.
pub fn parse(line: &str) -> Result<ParsedCommand, ParseException> {
    let tokens = tokenize(line).inspect_err(|e| {
        log::debug!("{} at column {} of {:?}", e, e.position(), line);
    })?;
    Ok(analyse(&tokens)?)
}
