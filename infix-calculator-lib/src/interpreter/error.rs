use thiserror::Error;

/// Failures found while turning text into postfix tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid token '{0}'")]
    InvalidToken(String),
    #[error("Invalid operator '{0}'")]
    InvalidOperator(char),
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}

/// Failures found while reducing postfix tokens to a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid operator '{0}'")]
    InvalidOperator(char),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid number of operands for operator '{0}'")]
    InsufficientOperands(char),
    #[error("Too few operands")]
    TooFewOperands,
    #[error("Too many operands")]
    TooManyOperands,
    #[error("Parentheses are not allowed in postfix input")]
    UnexpectedParenthesis,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_operator() {
        let error = CalcError::from(EvalError::InsufficientOperands('+'));
        assert_eq!(
            error.to_string(),
            "Invalid number of operands for operator '+'"
        )
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let error = CalcError::from(ParseError::MismatchedParentheses);
        assert_eq!(error.to_string(), "Mismatched parentheses")
    }
}
