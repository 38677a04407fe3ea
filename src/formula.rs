//! Compiled single-variable formula
//!
//! [`Formula`] ties the parser and the evaluator together: [`Formula::parse`]
//! compiles text into a postfix program and [`Formula::evaluate`] replays it
//! for a value of `x`. One instance can be re-parsed any number of times;
//! each successful parse replaces the previous program.
//!
//! `parse` needs `&mut self` and `evaluate` only `&self`, so a parsed formula
//! can be shared between threads and evaluated concurrently.

use crate::interpreter::engine::Evaluator;
use crate::parser::{ParseError, Parser, Program};
use log::{debug, warn};
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct Formula {
    source: String,
    program: Program,
    last_error: Option<ParseError>,
}

impl Formula {
    /// An empty formula. It evaluates to `0.0` until a parse succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `text`, returning the error instead of a flag.
    pub fn compile(text: &str) -> Result<Self, ParseError> {
        let program = Parser::new(text).parse()?;
        debug!("compiled '{}' to [{}]", text, program);
        Ok(Self {
            source: text.to_string(),
            program,
            last_error: None,
        })
    }

    /// Compile `text` into this formula.
    ///
    /// Returns `false` on any lexical or syntax error; the previous program
    /// is dropped either way and the error is available from
    /// [`last_error`](Self::last_error).
    pub fn parse(&mut self, text: &str) -> bool {
        self.program.clear();
        self.source = text.to_string();

        match Parser::new(text).parse() {
            Ok(program) => {
                debug!("compiled '{}' to [{}]", text, program);
                self.program = program;
                self.last_error = None;
                true
            }
            Err(err) => {
                warn!("failed to compile '{}': {}", text, err);
                self.last_error = Some(err);
                false
            }
        }
    }

    /// Value of the formula at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        Evaluator::new().run(&self.program, x)
    }

    /// Evaluate with a caller-owned [`Evaluator`] to avoid reallocating the
    /// value stack in tight loops.
    pub fn evaluate_with(&self, evaluator: &mut Evaluator, x: f64) -> f64 {
        evaluator.run(&self.program, x)
    }

    /// Error from the most recent parse, if it failed.
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Text given to the most recent parse.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether there is no usable program.
    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}
