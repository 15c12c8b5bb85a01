mod infix_converter;

use crate::interpreter::error::ParseError;
use crate::interpreter::token::Token;

/// Reorders infix tokens into postfix (reverse Polish) order, where every operator
/// comes right after its two operands and parentheses are no longer needed.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to convert, in infix format.
///
/// returns: The same tokens in postfix order.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), infix_calculator::interpreter::error::ParseError> {
/// use infix_calculator::interpreter::parser::infix_to_postfix;
/// use infix_calculator::interpreter::token::Token;
///
/// // 3 + 4 * 2
/// let infix_tokens = vec![
///     Token::Number(3.0),
///     Token::Operator('+'),
///     Token::Number(4.0),
///     Token::Operator('*'),
///     Token::Number(2.0),
/// ];
/// let postfix_tokens = infix_to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens[3], Token::Operator('*'));
/// # Ok(()) }
/// ```
pub fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    infix_converter::infix_to_postfix(infix_tokens)
}
