use crate::token::{Op, Token};
use crate::util::{is_digit, is_grouping, is_operator};
use std::iter::FusedIterator;
use std::str::Chars;
use tracing::trace;

/// Split `input` into tokens, lazily.
///
/// Digits and `.` accumulate into a number literal, which ends at the next
/// operator or parenthesis. A `-` directly after `(` starts a negative
/// literal; anywhere else it is the subtraction operator. Any other character
/// (whitespace included) is skipped without ending the current literal.
///
/// # Examples
///
/// ```
/// # use infix_eval::{tokenize, Op, Token};
/// let tokens: Vec<Token> = tokenize("3*(-2+5)").collect();
/// assert_eq!(tokens, vec![
///     Token::Number("3".into()),
///     Token::Op(Op::Mul),
///     Token::LParen,
///     Token::Number("-2".into()),
///     Token::Op(Op::Plus),
///     Token::Number("5".into()),
///     Token::RParen,
/// ]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens::new(input)
}

/// Single pass cursor over the tokens of a string, created by
/// [`tokenize`](fn.tokenize.html).
#[derive(Debug)]
pub struct Tokens<'a> {
    input: Chars<'a>,
    /// Pending number literal
    number: String,
    /// Last operator or parenthesis emitted, reset by digits
    last: Option<char>,
    /// Operator found right after a number literal, emitted on the next pull
    queued: Option<Token>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            input: input.chars(),
            number: String::new(),
            last: None,
            queued: None,
        }
    }

    fn take_number(&mut self) -> Option<Token> {
        if self.number.is_empty() {
            None
        } else {
            Some(Token::Number(std::mem::take(&mut self.number)))
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }

        while let Some(c) = self.input.next() {
            if is_digit(c) {
                self.number.push(c);
                self.last = None;
            } else if c == '.' {
                self.number.push(c);
            } else if c == '-' && self.last == Some('(') {
                self.number.push(c);
            } else if is_operator(c) || is_grouping(c) {
                self.last = Some(c);
                let token = match (c, Op::from_char(c)) {
                    (_, Some(op)) => Token::Op(op),
                    ('(', None) => Token::LParen,
                    _ => Token::RParen,
                };
                return match self.take_number() {
                    Some(number) => {
                        self.queued = Some(token);
                        Some(number)
                    }
                    None => Some(token),
                };
            }
        }

        self.take_number()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if let Some(ref token) = token {
            trace!(%token, "token");
        }
        token
    }
}

impl<'a> FusedIterator for Tokens<'a> {}
