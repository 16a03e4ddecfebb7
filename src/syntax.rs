mod lexer;
mod rpn;
mod sanitize;
mod token;

pub(crate) use lexer::tokenize;
pub(crate) use rpn::convert_to_rpn;
pub(crate) use sanitize::sanitize;
pub(crate) use token::{Operator, Token};
