//! Expression parser
//!
//! This module compiles expression text into a postfix [`Program`]:
//! - [`lexer`]: Tokenization (source text → tokens, pulled on demand)
//! - [`parse`]: Parser state, error type and helpers
//! - `expressions`: The grammar rules
//! - [`program`]: The compiled postfix program
//! - [`functions`]: The fixed table of built-in functions
//!
//! # Supported Syntax
//!
//! - Numbers: `3`, `0.25` (no sign, no exponent)
//! - The variable `x` (or `X`)
//! - Binary operators `+ - * / ^`, unary `-`
//! - Implicit multiplication: `3x`, `2(x + 1)`
//! - Functions: `cos sin tg ctg arcsin arccos arctg ln lg abs`, plus the
//!   aliases `tan cot asin acos atan log`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser that emits postfix code while it
//! descends. No external parser generator dependencies.

mod expressions;

pub mod functions;
pub mod lexer;
pub mod parse;
pub mod program;

pub use parse::{ParseError, Parser};
pub use program::Program;
