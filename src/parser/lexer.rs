//! Lexer for Shell Lines
//!
//! Splits one input line into text words and redirection tokens. It handles:
//! - `<`, `>` and `>>` operators, with or without surrounding whitespace
//! - Double-quoted segments, kept verbatim (an unterminated quote runs to the
//!   end of the line)

use std::fmt;

use super::types::SyntaxError;

/// Token types for the shell lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Plain word
    Text,
    /// `<`
    Input,
    /// `>`
    Output,
    /// `>>`
    OutputAppend,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Input => "<",
            Self::Output => ">",
            Self::OutputAppend => ">>",
        }
    }
}

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Word, or the redirection target for operator tokens
    pub value: String,
    /// Position of the token's first character in the line
    pub start: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>, start: usize) -> Self {
        Self {
            token_type,
            value: value.into(),
            start,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::Text => write!(f, "{:?}@{}", self.value, self.start),
            op => write!(f, "{}{:?}@{}", op.as_str(), self.value, self.start),
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B')
}

fn is_token_end(c: char) -> bool {
    is_whitespace(c) || c == '<' || c == '>'
}

/// Lexer over a single line
pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            let token = self.next_token()?;
            self.tokens.push(token);
        }
        if log::log_enabled!(log::Level::Trace) {
            let rendered: Vec<String> = self.tokens.iter().map(Token::to_string).collect();
            log::trace!("tokens: [{}]", rendered.join(", "));
        }
        Ok(self.tokens)
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.current().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;
        let token_type = match (self.current(), self.peek(1)) {
            (Some('>'), Some('>')) => {
                self.pos += 2;
                TokenType::OutputAppend
            }
            (Some('>'), _) => {
                self.pos += 1;
                TokenType::Output
            }
            (Some('<'), _) => {
                self.pos += 1;
                TokenType::Input
            }
            _ => TokenType::Text,
        };
        self.skip_whitespace();
        let value = self.read_value()?;
        Ok(Token::new(token_type, value, start))
    }

    fn read_value(&mut self) -> Result<String, SyntaxError> {
        let mut value = String::new();
        while let Some(c) = self.current() {
            if is_token_end(c) {
                break;
            }
            self.pos += 1;
            if c != '"' {
                value.push(c);
                continue;
            }
            while let Some(quoted) = self.current() {
                self.pos += 1;
                if quoted == '"' {
                    break;
                }
                value.push(quoted);
            }
        }
        if value.is_empty() {
            return Err(SyntaxError::UnexpectedEndOfLine { position: self.pos });
        }
        Ok(value)
    }
}

/// Tokenize one line.
pub fn tokenize(line: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(line).tokenize()
}
