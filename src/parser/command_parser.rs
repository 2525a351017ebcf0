//! Command Parser
//!
//! Reduces a token stream to a [`ParsedCommand`].

use super::lexer::{Token, TokenType};
use super::types::{IllegalCommandError, ParsedCommand};

/// Build the structured command for `tokens`.
///
/// The first text token names the command; every text token except that
/// first occurrence of the name becomes an argument. A line without any text
/// token yields an empty command.
pub fn analyse(tokens: &[Token]) -> Result<ParsedCommand, IllegalCommandError> {
    let texts: Vec<&str> = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Text)
        .map(|t| t.value.as_str())
        .collect();

    let Some(&name) = texts.first() else {
        return Ok(ParsedCommand::default());
    };

    let mut arguments: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
    if let Some(index) = arguments.iter().position(|a| a == name) {
        arguments.remove(index);
    }

    let input = single_target(
        tokens,
        TokenType::Input,
        IllegalCommandError::MultipleInputRedirections,
    )?;
    let output = single_target(
        tokens,
        TokenType::Output,
        IllegalCommandError::MultipleOutputRedirections,
    )?;
    let output_append = single_target(
        tokens,
        TokenType::OutputAppend,
        IllegalCommandError::MultipleOutputRedirections,
    )?;
    if output.is_some() && output_append.is_some() {
        return Err(IllegalCommandError::ConflictingOutputRedirections);
    }

    Ok(ParsedCommand {
        name: Some(name.to_string()),
        arguments,
        input,
        output,
        output_append,
    })
}

fn single_target(
    tokens: &[Token],
    token_type: TokenType,
    too_many: IllegalCommandError,
) -> Result<Option<String>, IllegalCommandError> {
    let mut matching = tokens.iter().filter(|t| t.token_type == token_type);
    let first = matching.next();
    if matching.next().is_some() {
        return Err(too_many);
    }
    Ok(first.map(|t| t.value.clone()))
}
