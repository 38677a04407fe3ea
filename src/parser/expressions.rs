//! Expression grammar
//!
//! ```text
//! expression := term { ('+' | '-') term }
//! term       := power { ('*' | '/') power }
//! power      := primary [ '^' primary ]
//! primary    := FUNC '(' expression ')'
//!             | 'x'
//!             | NUMBER [ 'x' | '(' expression ')' ]
//!             | '(' expression ')'
//!             | '-' primary
//! ```
//!
//! Each rule emits its operator after both operands, which yields postfix
//! order directly. `power` accepts a single exponent only: `2^3^2` stops
//! after `2^3` and the second `^` is reported as trailing input.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.parse_term()?;

        while matches!(self.token, Token::Plus | Token::Minus) {
            let op = self.token;
            self.advance()?;
            self.parse_term()?;
            self.emit(op);
        }

        Ok(())
    }

    /// Parse multiplicative operators (*, /)
    fn parse_term(&mut self) -> Result<(), ParseError> {
        self.parse_power()?;

        while matches!(self.token, Token::Multiply | Token::Divide) {
            let op = self.token;
            self.advance()?;
            self.parse_power()?;
            self.emit(op);
        }

        Ok(())
    }

    /// Parse an optional single exponent
    fn parse_power(&mut self) -> Result<(), ParseError> {
        self.parse_primary()?;

        if self.check(Token::Power) {
            self.advance()?;
            self.parse_primary()?;
            self.emit(Token::Power);
        }

        Ok(())
    }

    /// Parse primary expression
    fn parse_primary(&mut self) -> Result<(), ParseError> {
        match self.token {
            Token::Function(func) => {
                self.advance()?;
                self.expect_token(
                    Token::LeftParen,
                    &format!("Expected '(' after function '{}'", func),
                )?;
                self.advance()?;
                self.parse_nested()?;
                self.expect_rparen("after function argument")?;
                self.emit(Token::Function(func));
            }
            Token::Variable => {
                self.emit(Token::Variable);
                self.advance()?;
            }
            Token::Number(value) => {
                self.emit(Token::Number(value));
                self.advance()?;
                self.parse_implicit_multiplication()?;
            }
            Token::LeftParen => {
                self.advance()?;
                self.parse_nested()?;
                self.expect_rparen("to close group")?;
            }
            Token::Minus => {
                self.advance()?;
                self.enter()?;
                self.parse_primary()?;
                self.leave();
                self.emit(Token::Negate);
            }
            _ => return Err(self.error("Expected a number, 'x', '(', '-' or a function")),
        }

        Ok(())
    }

    /// `3x` and `2(x + 1)`: a literal directly followed by the variable or a
    /// parenthesised group multiplies them.
    fn parse_implicit_multiplication(&mut self) -> Result<(), ParseError> {
        match self.token {
            Token::Variable => {
                self.emit(Token::Variable);
                self.emit(Token::Multiply);
                self.advance()?;
            }
            Token::LeftParen => {
                self.advance()?;
                self.parse_nested()?;
                self.expect_rparen("to close group")?;
                self.emit(Token::Multiply);
            }
            _ => {}
        }

        Ok(())
    }

    /// Parse a full expression one nesting level down.
    fn parse_nested(&mut self) -> Result<(), ParseError> {
        self.enter()?;
        self.parse_expression()?;
        self.leave();
        Ok(())
    }
}
