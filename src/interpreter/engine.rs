// Stack machine for postfix programs

use crate::parser::lexer::Token;
use crate::parser::program::Program;

/// Evaluates postfix programs, reusing one value stack across runs.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `program` with the variable bound to `x`.
    ///
    /// Arithmetic follows IEEE 754: division by zero gives an infinity or
    /// NaN, and out-of-domain function arguments give NaN. An empty program
    /// evaluates to `0.0`.
    pub fn run(&mut self, program: &Program, x: f64) -> f64 {
        if program.is_empty() {
            return 0.0;
        }

        self.stack.clear();
        self.stack.reserve(program.max_stack_depth());

        for token in program.tokens() {
            match *token {
                Token::Number(value) => self.stack.push(value),
                Token::Variable => self.stack.push(x),
                Token::Negate => {
                    let operand = self.pop();
                    self.stack.push(-operand);
                }
                Token::Function(func) => {
                    let operand = self.pop();
                    self.stack.push(func.apply(operand));
                }
                op => {
                    let right = self.pop();
                    let left = self.pop();
                    self.stack.push(apply_binary(op, left, right));
                }
            }
        }

        debug_assert_eq!(self.stack.len(), 1, "program left {} values", self.stack.len());
        self.pop()
    }

    fn pop(&mut self) -> f64 {
        // Programs come from the parser and never underflow
        debug_assert!(!self.stack.is_empty(), "evaluation stack underflow");
        self.stack.pop().unwrap_or(f64::NAN)
    }
}

fn apply_binary(op: Token, left: f64, right: f64) -> f64 {
    match op {
        Token::Plus => left + right,
        Token::Minus => left - right,
        Token::Multiply => left * right,
        Token::Divide => left / right,
        Token::Power => left.powf(right),
        _ => {
            debug_assert!(false, "{} is not a binary operator", op);
            f64::NAN
        }
    }
}

/// Evaluate `program` once with a fresh stack.
pub fn evaluate(program: &Program, x: f64) -> f64 {
    Evaluator::new().run(program, x)
}
