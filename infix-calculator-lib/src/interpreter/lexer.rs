use crate::interpreter::error::ParseError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_number_char, Token};
use itertools::Itertools;
use log::trace;

/// Splits an infix expression into tokens.
///
/// Whitespace is ignored. Numbers are runs of digits containing at most one decimal
/// point; every other character becomes a token of its own. Unary minus is rewritten
/// as a multiplication by `-1`, so that later stages only ever see binary operators.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("-2 * 3").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Number(-1.0),
///         Token::Operator('*'),
///         Token::Number(2.0),
///         Token::Operator('*'),
///         Token::Number(3.0),
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let tokens = split_lexemes(&stripped)
        .iter()
        .map(|lexeme| lexeme.parse::<Token>())
        .collect::<Result<Vec<Token>, ParseError>>()?;
    let tokens = rewrite_unary_minus(tokens);
    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn split_lexemes(expression: &str) -> Vec<String> {
    let mut characters = expression.chars().peekable();
    let mut lexemes = vec![];

    while let Some(character) = characters.next() {
        if !is_number_char(character) {
            lexemes.push(character.to_string());
            continue;
        }

        let mut seen_decimal_point = character == '.';
        let mut lexeme = String::from(character);
        lexeme.extend(characters.peeking_take_while(|next| {
            if next.is_ascii_digit() {
                true
            } else if *next == '.' && !seen_decimal_point {
                seen_decimal_point = true;
                true
            } else {
                false
            }
        }));
        lexemes.push(lexeme);
    }

    lexemes
}

/// A minus is unary when nothing that ends an operand comes right before it.
/// Checking against the already rewritten tokens keeps chains like `--5` consistent.
fn rewrite_unary_minus(tokens: Vec<Token>) -> Vec<Token> {
    let mut rewritten: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let follows_value = rewritten.last().map_or(false, Token::is_value);
        if token.is_minus() && !follows_value {
            rewritten.push(Token::Number(-1.0));
            rewritten.push(BinaryOperator::Multiply.token());
        } else {
            rewritten.push(token);
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn correct_expression_returns_tokens() {
        // (4 + 4) * 68.5
        let expected = vec![
            Token::LeftParentheses,
            Token::Number(4.0),
            Token::Operator('+'),
            Token::Number(4.0),
            Token::RightParentheses,
            Token::Operator('*'),
            Token::Number(68.5),
        ];

        let actual = tokenize("(4 + 4) * 68.5").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_is_ignored() {
        let spaced = tokenize(" 1 +\t2 ").unwrap();
        let compact = tokenize("1+2").unwrap();

        assert_eq!(spaced, compact)
    }

    #[test]
    fn multi_digit_numbers_stay_together() {
        let expected = vec![
            Token::Number(123.0),
            Token::Operator('-'),
            Token::Number(0.25),
        ];

        let actual = tokenize("123-.25").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn second_decimal_point_starts_new_number() {
        let expected = vec![Token::Number(1.0), Token::Number(0.2)];

        let actual = tokenize("1..2").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn leading_minus_is_rewritten_as_multiplication() {
        // -5 + 3
        let expected = vec![
            Token::Number(-1.0),
            Token::Operator('*'),
            Token::Number(5.0),
            Token::Operator('+'),
            Token::Number(3.0),
        ];

        let actual = tokenize("-5+3").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_after_operator_is_unary() {
        // 3 * -2
        let expected = vec![
            Token::Number(3.0),
            Token::Operator('*'),
            Token::Number(-1.0),
            Token::Operator('*'),
            Token::Number(2.0),
        ];

        let actual = tokenize("3*-2").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_after_parentheses_is_binary() {
        // (1) - 2
        let expected = vec![
            Token::LeftParentheses,
            Token::Number(1.0),
            Token::RightParentheses,
            Token::Operator('-'),
            Token::Number(2.0),
        ];

        let actual = tokenize("(1)-2").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_after_open_parenthesis_is_unary() {
        // (-x)
        let expected = vec![
            Token::LeftParentheses,
            Token::Number(-1.0),
            Token::Operator('*'),
            Token::Number(7.0),
            Token::RightParentheses,
        ];

        let actual = tokenize("(-7)").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn repeated_minus_is_rewritten_each_time() {
        let expected = vec![
            Token::Number(-1.0),
            Token::Operator('*'),
            Token::Number(-1.0),
            Token::Operator('*'),
            Token::Number(5.0),
        ];

        let actual = tokenize("--5").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn unknown_symbols_are_kept_as_operators() {
        let expected = vec![
            Token::Number(2.0),
            Token::Operator('%'),
            Token::Number(3.0),
        ];

        let actual = tokenize("2 % 3").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn lone_decimal_point_is_kept_as_operator() {
        let expected = vec![
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Operator('.'),
        ];

        let actual = tokenize("1 + .").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn trailing_decimal_points_split_into_number_and_operator() {
        let expected = vec![Token::Number(5.0), Token::Operator('.')];

        let actual = tokenize("5..").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn empty_expression_returns_no_tokens() {
        assert_eq!(tokenize("   ").unwrap(), Vec::<Token>::new())
    }
}
