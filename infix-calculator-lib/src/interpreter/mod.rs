pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::{CalcError, ParseError};
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or the first problem found with it.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::calculate;
///
/// let value = calculate("(2 + 3) * 4");
/// assert_eq!(value, Ok(20.0));
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate(postfix_tokens)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Converts the given input string into the equivalent postfix tokens,
/// which can be evaluated without looking at precedence or parentheses.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent tokens, in postfix order.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), infix_calculator::interpreter::error::ParseError> {
/// use infix_calculator::interpreter::{convert, tokens_to_string};
///
/// let postfix_tokens = convert("3 + 4 * 2")?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "3 4 2 * +");
/// # Ok(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = lexer::tokenize(expression)?;
    parser::infix_to_postfix(tokens)
}

/// Pretty-prints the given tokens separated by whitespace.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
