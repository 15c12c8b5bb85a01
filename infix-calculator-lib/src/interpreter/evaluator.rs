use crate::interpreter::error::EvalError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Reduces postfix tokens to a single value using a stack of operands.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to evaluate.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluator::evaluate;
/// use infix_calculator::interpreter::token::Token;
///
/// // 3 4 2 * +
/// let postfix_tokens = vec![
///     Token::Number(3.0),
///     Token::Number(4.0),
///     Token::Number(2.0),
///     Token::Operator('*'),
///     Token::Operator('+'),
/// ];
/// assert_eq!(evaluate(postfix_tokens), Ok(11.0));
/// ```
pub fn evaluate(mut postfix_tokens: Vec<Token>) -> Result<f64, EvalError> {
    postfix_tokens.reverse();
    let mut operands: Vec<f64> = Vec::new();

    while let Some(token) = postfix_tokens.pop() {
        match token {
            Token::Number(value) => operands.push(value),
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(EvalError::UnexpectedParenthesis)
            }
            Token::Operator(symbol) => {
                // Popped in reverse, so that non-commutative operators see their operands in order.
                let (y, x) = match (operands.pop(), operands.pop()) {
                    (Some(y), Some(x)) => (y, x),
                    _ => return Err(EvalError::InsufficientOperands(symbol)),
                };
                let operator =
                    BinaryOperator::try_from(symbol).map_err(EvalError::InvalidOperator)?;
                let result = operator.evaluate(x, y)?;
                trace!("{} {} {} = {}", x, operator, y, result);
                operands.push(result);
            }
        }
    }

    match operands.len() {
        0 => Err(EvalError::TooFewOperands),
        1 => operands.pop().ok_or(EvalError::TooFewOperands),
        _ => Err(EvalError::TooManyOperands),
    }
}
