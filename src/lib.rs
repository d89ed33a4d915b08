#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! infix-eval, a crate for evaluating simple infix arithmetic expressions.
//!
//! The easiest way to use this crate is with the
//! [`evaluate`](fn.evaluate.html) function:
//!
//! ```
//! assert_eq!(infix_eval::evaluate("3 + 5 * 2"), Ok(13.0));
//! assert_eq!(infix_eval::evaluate("(3 + 5) * 2"), Ok(16.0));
//! ```
//!
//! It is also possible to separate the tokenization from the evaluation of
//! an expression with [`tokenize`](fn.tokenize.html) and
//! [`evaluate_tokens`](fn.evaluate_tokens.html):
//!
//! ```
//! use infix_eval::{evaluate_tokens, tokenize, Token};
//!
//! let tokens: Vec<Token> = tokenize("(1+2)^2").collect();
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(evaluate_tokens(tokens), Ok(9.0));
//! ```
//!
//! # Language definition
//!
//! The language implemented by infix-eval can contain the following elements:
//!
//! - number literals: `42`, `0.5`, ...;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation.
//!
//! Any other character, whitespace included, is ignored. It does not separate
//! digits either: `1 000` reads as `1000`.
//!
//! `^` binds tighter than `*` and `/`, which bind tighter than `+` and `-`.
//! All operators are left associative, exponentiation included: `2^3^2` is
//! `64`. Division by zero produces infinities or `NaN`, as usual for `f64`.
//!
//! # Negative numbers
//!
//! A `-` starts a negative literal only directly after `(`. Write `(-3)+5`,
//! not `-3+5`: the latter reads `-` as a subtraction without left operand and
//! fails.
//!
//! ```
//! use infix_eval::{evaluate, Error, Op};
//!
//! assert_eq!(evaluate("(-3)+5"), Ok(2.0));
//! assert_eq!(evaluate("-3+5"), Err(Error::InsufficientOperands(Op::Minus)));
//! ```
//!
//! # Technical details
//!
//! infix-eval uses a Shunting-Yard algorithm with an operand stack and an
//! operator stack, applying operators as soon as their precedence allows
//! instead of building a syntax tree. It works only with `f64` data.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod lexer;
mod token;
mod util;

pub use error::Error;
pub use expr::{evaluate, evaluate_tokens};
pub use lexer::{tokenize, Tokens};
pub use token::{Op, Token, TokenKind};
pub use util::is_number;
