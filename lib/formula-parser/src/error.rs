use snafu::Snafu;

use crate::token::Token;

pub type Result<T, E = SyntaxError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SyntaxError {
    #[snafu(display("Unexpected end of input: expected {expected}"))]
    UnexpectedEnd { expected: &'static str },

    #[snafu(display("Expected {expected}, but found '{found}'"))]
    UnexpectedToken { expected: &'static str, found: Token },

    #[snafu(display("Unexpected trailing input starting at '{found}'"))]
    TrailingInput { found: Token },
}
