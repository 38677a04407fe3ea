//! Postfix program execution
//!
//! - [`engine`]: the value-stack machine that replays a compiled
//!   [`Program`](crate::parser::Program) for one value of `x`
//!
//! # Execution Model
//!
//! Numbers and `x` push a value; operators and functions pop their operands
//! and push the result. Evaluation has no error path: every arithmetic edge
//! case resolves to an IEEE 754 special value.

pub mod engine;

pub use engine::{evaluate, Evaluator};
