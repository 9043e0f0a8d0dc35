mod infix_converter;

pub use crate::interpreter::parser::infix_converter::convert_infix_to_postfix;
