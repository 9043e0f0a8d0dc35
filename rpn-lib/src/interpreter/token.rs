use crate::interpreter::operator::BinaryOperator;

/// The class of a single character of an infix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Digit(char),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
    Whitespace,
    Invalid(char),
}

impl Token {
    pub fn classify(character: char) -> Token {
        match character {
            '0'..='9' => Token::Digit(character),
            '(' => Token::OpenParenthesis,
            ')' => Token::CloseParenthesis,
            character if character.is_whitespace() => Token::Whitespace,
            character => match BinaryOperator::from_symbol(character) {
                Some(operator) => Token::Operator(operator),
                None => Token::Invalid(character),
            },
        }
    }
}
