pub mod error;
pub mod evaluator;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::RpnError;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::parser::convert_infix_to_postfix;
use log::debug;

/// Evaluates an arithmetic expression written in infix notation.
///
/// The expression is first converted to postfix notation, which is then evaluated.
/// Errors from either stage are returned as-is.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use rpn::interpreter::evaluate;
/// # use rpn::interpreter::error::RpnError;
///
/// # fn main() -> Result<(), RpnError> {
/// let value = evaluate("3 + (4 * 2 + 1) / (1 - 5)")?;
/// assert_eq!(value, 0.75);
/// # Ok(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<f64, RpnError> {
    let postfix_expression = convert_infix_to_postfix(expression)?;
    debug!("{:?} in postfix notation is {:?}", expression, postfix_expression);
    let value = evaluate_postfix(&postfix_expression)?;
    debug!("{:?} evaluates to {}", postfix_expression, value);
    Ok(value)
}
