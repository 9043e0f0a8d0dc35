use crate::interpreter::error::RpnError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Converts an infix expression to postfix notation using the shunting-yard algorithm.
///
/// Operands are copied through as-is, so adjacent digits end up in the same output token.
/// Every other output token is separated by a single space.
///
/// # Arguments
///
/// * `expression`: Digits, `+ - * /`, parentheses and whitespace.
///
/// returns: The postfix expression, with space-separated tokens.
///
/// # Examples
///
/// ```
/// # use rpn::interpreter::error::RpnError;
/// # fn main() -> Result<(), RpnError> {
/// use rpn::interpreter::parser::convert_infix_to_postfix;
///
/// let postfix = convert_infix_to_postfix("(2+3)*4")?;
/// assert_eq!(postfix, "2 3 + 4 *");
/// # Ok(()) }
/// ```
pub fn convert_infix_to_postfix(expression: &str) -> Result<String, RpnError> {
    let mut operators: Vec<StackEntry> = vec![];
    let mut output = String::with_capacity(expression.len() * 2);

    for character in expression.chars() {
        match Token::classify(character) {
            Token::Digit(digit) => output.push(digit),
            Token::OpenParenthesis => operators.push(StackEntry::OpenParenthesis),
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator);
            }
            Token::Whitespace => {}
            Token::Invalid(character) => return Err(RpnError::from(character)),
        }
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

/// An element of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(BinaryOperator),
    OpenParenthesis,
}

fn emit(output: &mut String, operator: BinaryOperator) {
    trace!("emitting {}", operator);
    output.push(' ');
    output.push(operator.symbol());
}

fn transfer_leftover_operators(
    operators: &mut Vec<StackEntry>,
    output: &mut String,
) -> Result<(), RpnError> {
    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::OpenParenthesis => return Err(RpnError::UnbalancedParentheses),
            StackEntry::Operator(operator) => emit(output, operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<StackEntry>,
    output: &mut String,
) -> Result<(), RpnError> {
    loop {
        match operators.pop() {
            None => return Err(RpnError::UnbalancedParentheses),
            // Discard the open parenthesis.
            Some(StackEntry::OpenParenthesis) => return Ok(()),
            Some(StackEntry::Operator(operator)) => emit(output, operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<StackEntry>,
    output: &mut String,
    operator: BinaryOperator,
) {
    while let Some(&StackEntry::Operator(other_operator)) = operators.last() {
        if !operator.precedence_le(&other_operator) {
            break;
        }
        operators.pop();
        emit(output, other_operator);
    }

    trace!("pushing {} onto operator stack", operator);
    operators.push(StackEntry::Operator(operator));
    output.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn infix_to_postfix_respects_operator_precedence() {
        let actual = convert_infix_to_postfix("2+3*4").unwrap();

        pretty_assertions::assert_eq!(actual, "2 3 4 * +")
    }

    #[test]
    fn infix_to_postfix_respects_parentheses() {
        let actual = convert_infix_to_postfix("(2+3)*4").unwrap();

        pretty_assertions::assert_eq!(actual, "2 3 + 4 *")
    }

    #[parameterized(
    infix = {
    "1-2+3",
    "8/4*2",
    "2*3+4",
    "1 - (2 + 3)",
    "1+((2+3)*4)",
    "3 + (4 * 2 + 1) / (1 - 5) ",
    },
    expected_postfix = {
    "1 2 - 3 +",
    "8 4 / 2 *",
    "2 3 * 4 +",
    "1 2 3 + -",
    "1 2 3 + 4 * +",
    "3 4 2 * 1 + 1 5 - / +",
    }
    )]
    fn infix_to_postfix_returns_expected_postfix(infix: &str, expected_postfix: &str) {
        let actual = convert_infix_to_postfix(infix).unwrap();

        assert_eq!(actual, expected_postfix);
    }

    #[test]
    fn adjacent_digits_are_concatenated() {
        let actual = convert_infix_to_postfix("12+3").unwrap();

        pretty_assertions::assert_eq!(actual, "12 3 +")
    }

    #[test]
    fn whitespace_is_ignored() {
        let actual = convert_infix_to_postfix(" 2 \t+\n3 ").unwrap();

        pretty_assertions::assert_eq!(actual, "2 3 +")
    }

    #[test]
    fn dangling_operator_keeps_its_trailing_space() {
        let actual = convert_infix_to_postfix("2+").unwrap();

        pretty_assertions::assert_eq!(actual, "2  +")
    }

    #[test]
    fn emitted_operator_is_preceded_by_space() {
        let mut output = "1 2".to_string();

        emit(&mut output, BinaryOperator::Divide);

        pretty_assertions::assert_eq!(output, "1 2 /")
    }

    #[test]
    fn empty_expression_converts_to_empty_string() {
        let actual = convert_infix_to_postfix("").unwrap();

        pretty_assertions::assert_eq!(actual, "")
    }

    #[test]
    fn unrecognized_character_should_return_err() {
        let actual = convert_infix_to_postfix("5 $ 4");

        assert_eq!(actual, Err(RpnError::InvalidCharacter("$".to_string())))
    }

    #[parameterized(infix = { "(()", "(1+2))", ")", "1+(2", "((" })]
    fn mismatched_parenthesis_should_return_err(infix: &str) {
        let actual = convert_infix_to_postfix(infix);

        assert_eq!(actual, Err(RpnError::UnbalancedParentheses));
    }

    #[test]
    fn failed_conversion_does_not_affect_next_conversion() {
        convert_infix_to_postfix("((1+2").expect_err("Should return Err");
        convert_infix_to_postfix("1+$").expect_err("Should return Err");

        let actual = convert_infix_to_postfix("1+2").unwrap();

        pretty_assertions::assert_eq!(actual, "1 2 +")
    }
}
