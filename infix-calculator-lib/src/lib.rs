//! Evaluates arithmetic expressions written in infix notation.
//!
//! The work happens in three stages: the [lexer](interpreter::lexer) turns text into
//! tokens, the [parser](interpreter::parser) reorders them into postfix notation and the
//! [evaluator](interpreter::evaluator) reduces the postfix tokens to a single number.

pub mod interpreter;
