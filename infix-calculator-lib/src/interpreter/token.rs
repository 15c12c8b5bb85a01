use crate::interpreter::error::ParseError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// Any single symbol that is not a digit or a parenthesis. Whether it names a known
    /// operator is decided by whoever consumes the token.
    Operator(char),
    LeftParentheses,
    RightParentheses,
}

impl Token {
    /// A 'value' is a token that either is, or ends, a complete operand.
    /// E.g. a number or a closing parenthesis.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Number(_) | Token::RightParentheses)
    }

    pub fn is_minus(&self) -> bool {
        matches!(self, Token::Operator('-'))
    }
}

/// Characters that may appear in a number literal.
pub(crate) fn is_number_char(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(symbol) => write!(f, "{}", symbol),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<char> for Token {
    fn from(symbol: char) -> Self {
        match symbol {
            '(' => Token::LeftParentheses,
            ')' => Token::RightParentheses,
            symbol => Token::Operator(symbol),
        }
    }
}

impl str::FromStr for Token {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        if let Some(value) = parse_number(input) {
            return Ok(Token::Number(value));
        }
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) => Ok(Token::from(symbol)),
            _ => Err(ParseError::InvalidToken(input.to_string())),
        }
    }
}

/// Only digits and decimal points make up a number, so words like `inf` are rejected.
fn parse_number(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(is_number_char) {
        return None;
    }
    text.parse::<f64>().ok()
}
