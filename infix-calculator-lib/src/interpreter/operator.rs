use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// Every operator the calculator understands.
pub const OPERATORS: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Exponentiate,
];

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// How an operator binds relative to its neighbours.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorSpec {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorSpec {
    /// Left-associative operators pop stack entries of equal precedence, right-associative
    /// ones only pop strictly higher precedence.
    pub fn yields_to(&self, incoming: &OperatorSpec) -> bool {
        match incoming.associativity {
            Associativity::Left => self.precedence >= incoming.precedence,
            Associativity::Right => self.precedence > incoming.precedence,
        }
    }
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(self.symbol())
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
            BinaryOperator::Multiply | BinaryOperator::Divide => 3,
            BinaryOperator::Exponentiate => 4,
        }
    }

    pub fn spec(&self) -> OperatorSpec {
        OperatorSpec {
            precedence: self.precedence(),
            associativity: self.associativity(),
        }
    }

    /// Whether `self`, sitting on top of the operator stack, has to be moved to the output
    /// before `incoming` can be pushed.
    pub(crate) fn yields_to(&self, incoming: &Self) -> bool {
        self.spec().yields_to(&incoming.spec())
    }

    /// Applies the operator to `x` and `y`, in that order.
    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOperator::Add => Ok(x + y),
            BinaryOperator::Subtract => Ok(x - y),
            BinaryOperator::Multiply => Ok(x * y),
            BinaryOperator::Divide => {
                if y == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(x / y)
            }
            BinaryOperator::Exponentiate => Ok(f64::powf(x, y)),
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        OPERATORS
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or(symbol)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
