use crate::error::Error;
use crate::util::{is_grouping, is_number};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A number literal, kept as written in the input
    Number(String),
    /// A binary operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// The three kinds a token can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `12`, `-0.5`, ...
    Number,
    /// `+ - * / ^`
    Operator,
    /// `(` or `)`
    Grouping,
}

impl Token {
    /// Classify this token.
    ///
    /// ```
    /// # use infix_eval::{Token, TokenKind};
    /// assert_eq!(Token::LParen.kind(), TokenKind::Grouping);
    /// assert_eq!(Token::Number("4.2".into()).kind(), TokenKind::Number);
    /// ```
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match *self {
            Self::Number(_) => TokenKind::Number,
            Self::Op(_) => TokenKind::Operator,
            Self::LParen | Self::RParen => TokenKind::Grouping,
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(ref text) => write!(fmt, "{}", text),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

impl FromStr for Token {
    type Err = Error;

    /// Classify raw token text. Only text matching exactly one token kind is
    /// accepted.
    ///
    /// ```
    /// # use infix_eval::{Error, Op, Token};
    /// assert_eq!("^".parse::<Token>(), Ok(Token::Op(Op::Exp)));
    /// assert_eq!("-12.5".parse::<Token>(), Ok(Token::Number("-12.5".into())));
    /// assert_eq!("1.2.3".parse::<Token>(), Err(Error::InvalidLiteral("1.2.3".into())));
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Op::from_char(c) {
                return Ok(Self::Op(op));
            }
            if is_grouping(c) {
                return Ok(if c == '(' { Self::LParen } else { Self::RParen });
            }
        }
        if is_number(text) {
            Ok(Self::Number(text.into()))
        } else {
            Err(Error::InvalidLiteral(text.into()))
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator for `c`, if `c` is one of `+ - * / ^`
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// The character this operator is written with
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// Combine `left` and `right` with this operator. Division by zero and
    /// `0 ^ -1` follow the usual floating point rules.
    ///
    /// ```
    /// # use infix_eval::Op;
    /// assert_eq!(Op::Minus.apply(5.0, 2.0), 3.0);
    /// assert_eq!(Op::Exp.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(Op::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Exp => libm::pow(left, right),
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("+" => Ok(Token::Op(Op::Plus)) ; "plus")]
    #[test_case("-" => Ok(Token::Op(Op::Minus)) ; "minus is an operator, never a number")]
    #[test_case("(" => Ok(Token::LParen) ; "left parenthesis")]
    #[test_case(")" => Ok(Token::RParen) ; "right parenthesis")]
    #[test_case("0" => Ok(Token::Number("0".into())) ; "zero")]
    #[test_case("-0.25" => Ok(Token::Number("-0.25".into())) ; "negative decimal")]
    #[test_case("007" => Err(Error::InvalidLiteral("007".into())) ; "leading zeros")]
    #[test_case("" => Err(Error::InvalidLiteral("".into())) ; "empty text")]
    #[test_case("x" => Err(Error::InvalidLiteral("x".into())) ; "unknown symbol")]
    fn classify(text: &str) -> Result<Token, Error> {
        text.parse()
    }

    #[test]
    fn precedence_table() {
        assert_eq!(Op::Plus.precedence(), Op::Minus.precedence());
        assert_eq!(Op::Mul.precedence(), Op::Div.precedence());
        assert!(Op::Plus.precedence() < Op::Mul.precedence());
        assert!(Op::Mul.precedence() < Op::Exp.precedence());
    }

    #[test]
    fn symbols_round_trip() {
        for &op in &[Op::Plus, Op::Minus, Op::Mul, Op::Div, Op::Exp] {
            assert_eq!(Op::from_char(op.symbol()), Some(op));
            assert_eq!(Token::Op(op).to_string(), op.symbol().to_string());
        }
        assert_eq!(Op::from_char('%'), None);
    }

    #[test]
    fn special_values() {
        assert_eq!(Op::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(Op::Div.apply(0.0, 0.0).is_nan());
        assert_eq!(Op::Exp.apply(0.0, -1.0), f64::INFINITY);
    }
}
