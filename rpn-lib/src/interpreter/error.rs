use thiserror::Error;

/// Everything that can go wrong while converting or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpnError {
    /// A character (infix) or token (postfix) that is neither a number nor an operator.
    #[error("Invalid character: {0}")]
    InvalidCharacter(String),
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    /// Too few operands for an operator, or more than one value left over.
    #[error("Invalid postfix expression")]
    InvalidPostfixExpression,
    #[error("Division by zero")]
    DivisionByZero,
}

impl From<char> for RpnError {
    fn from(character: char) -> Self {
        RpnError::InvalidCharacter(character.to_string())
    }
}
