use crate::interpreter::error::ParseError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;
use std::collections::VecDeque;

/// Shunting-yard conversion from infix to postfix order.
pub(super) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParentheses => operators.push(token),
            Token::Operator(symbol) => {
                let operator = BinaryOperator::try_from(symbol)
                    .map_err(ParseError::InvalidOperator)?;
                parse_operator_token(&mut operators, &mut output, operator)?
            }
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    trace!("postfix order: {:?}", output);
    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ParseError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    loop {
        match operators.pop() {
            None => return Err(ParseError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) -> Result<(), ParseError> {
    while let Some(&Token::Operator(top_symbol)) = operators.last() {
        let top_operator =
            BinaryOperator::try_from(top_symbol).map_err(ParseError::InvalidOperator)?;
        if !top_operator.yields_to(&operator) {
            break;
        }
        output.push(top_operator.token());
        operators.pop();
    }

    operators.push(operator.token());
    Ok(())
}
