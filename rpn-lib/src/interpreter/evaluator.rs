use crate::interpreter::error::RpnError;
use crate::interpreter::operator::BinaryOperator;
use log::trace;

/// Evaluates a postfix expression with a value stack.
///
/// The expression is split on single spaces, so two spaces in a row produce an empty
/// token, which is rejected like any other unknown token.
///
/// # Arguments
///
/// * `expression`: Space-separated numbers and operators, in postfix order.
///
/// returns: The single value left on the stack once every token has been consumed.
///
/// # Examples
///
/// ```
/// # use rpn::interpreter::error::RpnError;
/// # fn main() -> Result<(), RpnError> {
/// use rpn::interpreter::evaluator::evaluate_postfix;
///
/// let value = evaluate_postfix("1 2 + 4 * 3 +")?;
/// assert_eq!(value, 15.0);
/// # Ok(()) }
/// ```
pub fn evaluate_postfix(expression: &str) -> Result<f64, RpnError> {
    let mut values: Vec<f64> = vec![];

    for token in expression.split(' ') {
        match parse_number(token) {
            Some(value) => {
                trace!("pushing {} onto value stack", value);
                values.push(value);
            }
            None => {
                let operator: BinaryOperator = token.parse()?;
                apply_operator(&mut values, operator)?;
            }
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        _ => Err(RpnError::InvalidPostfixExpression),
    }
}

/// Parses a token made up of ASCII digits only. Values too large for `f64` become infinity.
fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|character| character.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn apply_operator(values: &mut Vec<f64>, operator: BinaryOperator) -> Result<(), RpnError> {
    let right = values.pop().ok_or(RpnError::InvalidPostfixExpression)?;
    let left = values.pop().ok_or(RpnError::InvalidPostfixExpression)?;
    let result = operator.evaluate(left, right)?;
    trace!("{} {} {} = {}", left, operator, right, result);
    values.push(result);
    Ok(())
}
