use crate::token::Op;
use thiserror::Error;

/// Error type for the infix-eval crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A number token that does not hold a valid decimal literal, such as
    /// `1.2.3` or a lone `-`
    #[error("InvalidLiteral: '{0}' is not a valid number")]
    InvalidLiteral(String),
    /// A `)` without matching `(`, or a `(` left open at the end of input
    #[error("MismatchedParenthesis: unbalanced parenthesis")]
    MismatchedParenthesis,
    /// An operator was applied with fewer than two operands available
    #[error("InsufficientOperands: not enough operands for '{0}'")]
    InsufficientOperands(Op),
    /// The input did not contain any operand
    #[error("EmptyExpression: nothing to evaluate")]
    EmptyExpression,
    /// More than one value was left once all operators were applied
    #[error("UnusedOperands: {0} values left without an operator")]
    UnusedOperands(usize),
}
