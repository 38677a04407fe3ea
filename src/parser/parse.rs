//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error type and the helper
//! methods shared by the grammar rules in `expressions`.
//!
//! # Parser Architecture
//!
//! The parser holds a single lookahead token and pulls the next one from the
//! [`Lexer`] only when the current one is consumed. Grammar rules append to
//! the [`Program`] as they return, so the program is in postfix order without
//! an intermediate tree.

use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::program::Program;
use std::fmt;

/// Deepest allowed nesting of parentheses, function calls and negations.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lexer rejected the input.
    Lexical(LexError),
    /// A token appeared where the grammar does not allow it.
    Syntax {
        message: String,
        found: Token,
        position: usize,
    },
}

impl ParseError {
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lexical(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    /// Character offset the error refers to.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lexical(err) => err.position,
            ParseError::Syntax { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lexical(err) => write!(f, "{}", err),
            ParseError::Syntax {
                message,
                found,
                position,
            } => write!(
                f,
                "Parse error at column {}: {}, found {}",
                position + 1,
                message,
                found
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexical(err) => Some(err),
            ParseError::Syntax { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lexical(err)
    }
}

/// Recursive descent parser for single-variable expressions
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) token: Token,
    pub(crate) program: Program,
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            token: Token::End,
            program: Program::new(),
            depth: 0,
        }
    }

    /// Compile the whole input into a postfix program.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.advance()?;
        self.parse_expression()?;
        self.expect_token(Token::End, "Expected end of input")?;
        Ok(self.program)
    }

    // ===== Helper methods =====

    /// Replace the lookahead with the next token from the lexer.
    pub(crate) fn advance(&mut self) -> Result<(), ParseError> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    /// Compare the lookahead by kind, ignoring any payload.
    pub(crate) fn check(&self, token: Token) -> bool {
        std::mem::discriminant(&self.token) == std::mem::discriminant(&token)
    }

    pub(crate) fn expect_token(&self, token: Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(Token::RightParen, &format!("Expected ')' {ctx}"))?;
        self.advance()
    }

    pub(crate) fn emit(&mut self, token: Token) {
        self.program.push(token);
    }

    /// Enter one nesting level, failing once [`MAX_NESTING_DEPTH`] is passed.
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(&format!(
                "Expression nested deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn error(&self, message: &str) -> ParseError {
        ParseError::Syntax {
            message: message.to_string(),
            found: self.token,
            position: self.lexer.token_start(),
        }
    }
}
