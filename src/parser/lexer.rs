//! Lexer (tokenizer) for expression source text
//!
//! The lexer is pulled one token at a time by the parser through
//! [`Lexer::next_token`]; nothing is buffered ahead of the cursor. Once the
//! input is exhausted every further call yields [`Token::End`].

use super::functions::Function;
use std::fmt;

/// All token variants.
///
/// [`Token::Negate`] is never produced by the lexer: the parser emits it for
/// unary minus so the evaluator can tell it apart from subtraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Variable,
    Function(Function),

    // Operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Power,    // ^

    // Punctuation
    LeftParen,  // (
    RightParen, // )

    Negate,
    End,
}

/// Single-character symbols and the token each one produces.
pub const DELIMITERS: [(char, Token); 7] = [
    ('^', Token::Power),
    ('+', Token::Plus),
    ('-', Token::Minus),
    ('*', Token::Multiply),
    ('/', Token::Divide),
    ('(', Token::LeftParen),
    (')', Token::RightParen),
];

impl Token {
    /// Whether the token pops two operands when evaluated.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Multiply | Token::Divide | Token::Power
        )
    }

    /// Symbol used when printing a postfix program.
    pub fn symbol(&self) -> String {
        match self {
            Token::Number(n) => format!("{}", n),
            Token::Variable => "x".to_string(),
            Token::Function(func) => func.name().to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Multiply => "*".to_string(),
            Token::Divide => "/".to_string(),
            Token::Power => "^".to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::Negate => "neg".to_string(),
            Token::End => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Variable => write!(f, "'x'"),
            Token::Function(func) => write!(f, "function '{}'", func),
            Token::Negate => write!(f, "unary '-'"),
            Token::End => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

/// What went wrong while lexing.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// A `.` not followed by at least one digit.
    MissingFraction,
    /// Letters that do not spell a known function.
    UnknownIdentifier(String),
    /// A character that starts no token.
    UnexpectedCharacter(char),
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Character offset into the source.
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at column {}: ", self.position + 1)?;
        match &self.kind {
            LexErrorKind::MissingFraction => write!(f, "expected a digit after '.'"),
            LexErrorKind::UnknownIdentifier(name) => write!(f, "unknown function '{}'", name),
            LexErrorKind::UnexpectedCharacter(ch) => write!(f, "unexpected character '{}'", ch),
        }
    }
}

impl std::error::Error for LexError {}

/// Lexer for a single expression
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
    /// Reused for number literals and identifiers.
    scratch: String,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
            scratch: String::with_capacity(32),
        }
    }

    /// Tokenize the entire input, including the trailing [`Token::End`].
    #[cfg(test)]
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if token == Token::End {
                break;
            }
        }

        Ok(tokens)
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let Some(ch) = self.peek() else {
            return Ok(Token::End);
        };

        match ch {
            'x' | 'X' => {
                self.advance();
                Ok(Token::Variable)
            }
            '0'..='9' => self.number_literal(),
            'a'..='z' | 'A'..='Z' => self.identifier(),
            _ => self.delimiter(ch),
        }
    }

    /// Start offset of the token most recently returned.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Parse numeric literal: digits, optionally `.` and more digits
    fn number_literal(&mut self) -> Result<Token, LexError> {
        self.scratch.clear();
        self.take_digits();

        if self.peek() == Some('.') {
            self.advance();
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError {
                    kind: LexErrorKind::MissingFraction,
                    position: self.position,
                });
            }
            self.scratch.push('.');
            self.take_digits();
        }

        // Digits with an optional fraction always convert; huge literals become inf
        let value = self.scratch.parse::<f64>().unwrap_or(f64::INFINITY);

        Ok(Token::Number(value))
    }

    fn take_digits(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.scratch.push(ch);
            self.advance();
        }
    }

    /// Parse a function name
    fn identifier(&mut self) -> Result<Token, LexError> {
        self.scratch.clear();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            self.scratch.push(ch);
            self.advance();
        }

        match Function::lookup(&self.scratch) {
            Some(func) => Ok(Token::Function(func)),
            None => Err(LexError {
                kind: LexErrorKind::UnknownIdentifier(self.scratch.clone()),
                position: self.token_start,
            }),
        }
    }

    fn delimiter(&mut self, ch: char) -> Result<Token, LexError> {
        let token = DELIMITERS
            .iter()
            .find(|(symbol, _)| *symbol == ch)
            .map(|(_, token)| *token)
            .ok_or(LexError {
                kind: LexErrorKind::UnexpectedCharacter(ch),
                position: self.position,
            })?;

        self.advance();
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }
}

/// Space, tab, newline, vertical tab, form feed and carriage return
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
