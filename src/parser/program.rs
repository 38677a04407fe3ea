//! Postfix program produced by the parser
//!
//! A [`Program`] is the compiled form of an expression: its tokens in
//! reverse-Polish order. Only the parser appends to it, so a non-empty
//! program always leaves exactly one value on the evaluation stack.

use super::lexer::Token;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    tokens: Vec<Token>,
    depth: usize,
    max_depth: usize,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token, keeping track of the evaluation stack height.
    pub(crate) fn push(&mut self, token: Token) {
        match token {
            Token::Number(_) | Token::Variable => {
                self.depth += 1;
                self.max_depth = self.max_depth.max(self.depth);
            }
            t if t.is_binary_operator() => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        self.tokens.push(token);
    }

    pub(crate) fn clear(&mut self) {
        self.tokens.clear();
        self.depth = 0;
        self.max_depth = 0;
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Largest number of values the evaluator holds at once.
    pub fn max_stack_depth(&self) -> usize {
        self.max_depth
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_depth() {
        // 2 x 1 + *
        let mut program = Program::new();
        program.push(Token::Number(2.0));
        program.push(Token::Variable);
        program.push(Token::Number(1.0));
        program.push(Token::Plus);
        program.push(Token::Multiply);

        assert_eq!(program.len(), 5);
        assert_eq!(program.max_stack_depth(), 3);
        assert_eq!(program.to_string(), "2 x 1 + *");
    }

    #[test]
    fn test_clear() {
        let mut program = Program::new();
        program.push(Token::Variable);
        program.push(Token::Negate);
        program.clear();

        assert!(program.is_empty());
        assert_eq!(program.max_stack_depth(), 0);
        assert_eq!(program.to_string(), "");
    }
}
