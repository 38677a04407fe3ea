//! # Introduction
//!
//! curvetty compiles a single-variable arithmetic expression such as
//! `2(x + 1)^2 - sin(x)` into a postfix program once, then evaluates it for
//! as many values of `x` as needed. The binary plots the result in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui), or prints a
//! value table.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Postfix program → Evaluator → Samples → TUI
//! ```
//!
//! 1. [`parser`] — tokenises the text on demand and emits the postfix
//!    [`parser::Program`] during recursive descent.
//! 2. [`interpreter`] — the stack machine that replays a program for one `x`.
//! 3. [`formula`] — [`Formula`], the parse-once / evaluate-many entry point.
//! 4. [`sampling`] — evaluates a formula over an interval.
//! 5. [`config`], [`logging`] — command-line options and the in-memory logger.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use curvetty::Formula;
//!
//! let mut f = Formula::new();
//! assert!(f.parse("2(x + 1)"));
//! assert_eq!(f.evaluate(4.0), 10.0);
//!
//! assert!(!f.parse("2*(3"));
//! assert_eq!(f.evaluate(4.0), 0.0);
//! ```

pub mod config;
pub mod formula;
pub mod interpreter;
pub mod logging;
pub mod parser;
pub mod sampling;
pub mod ui;

pub use formula::Formula;
