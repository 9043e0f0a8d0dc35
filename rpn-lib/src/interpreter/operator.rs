use crate::interpreter::error::RpnError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    /// Higher binds tighter. Operators of equal precedence associate to the left.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
        }
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }

    /// Applies the operator as `left <op> right`.
    ///
    /// # Arguments
    ///
    /// * `left`: The operand that was pushed first.
    /// * `right`: The operand that was pushed last.
    ///
    /// returns: The result, or [`RpnError::DivisionByZero`] if `right` is zero
    /// and the operator is a division.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Subtract.evaluate(1.0, 5.0), Ok(-4.0));
    /// assert!(BinaryOperator::Divide.evaluate(1.0, 0.0).is_err());
    /// ```
    pub fn evaluate(&self, left: f64, right: f64) -> Result<f64, RpnError> {
        match self {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Subtract => Ok(left - right),
            BinaryOperator::Multiply => Ok(left * right),
            BinaryOperator::Divide if right == 0.0 => Err(RpnError::DivisionByZero),
            BinaryOperator::Divide => Ok(left / right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl str::FromStr for BinaryOperator {
    type Err = RpnError;

    fn from_str(input: &str) -> Result<BinaryOperator, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) => BinaryOperator::from_symbol(symbol)
                .ok_or_else(|| RpnError::InvalidCharacter(input.to_string())),
            _ => Err(RpnError::InvalidCharacter(input.to_string())),
        }
    }
}
