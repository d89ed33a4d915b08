use crate::lexer::tokenize;
use crate::token::{Op, Token};
use crate::util::is_number;
use crate::Error;
use tracing::{debug, trace};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// the expression is malformed.
///
/// # Example
///
/// ```
/// # use infix_eval::{evaluate, Error};
/// assert_eq!(evaluate("2 + 2 * 2"), Ok(6.0));
/// assert_eq!(evaluate("3*(-2+5)"), Ok(9.0));
/// assert_eq!(evaluate("(1+2"), Err(Error::MismatchedParenthesis));
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let result = evaluate_tokens(tokenize(input));
    debug!(input, ?result, "evaluated expression");
    result
}

/// Evaluate an already tokenized expression.
///
/// Operators are applied as soon as an operator of lower or equal precedence
/// follows them, so every operator is left associative, `^` included:
/// `2^3^2` is `(2^3)^2`.
///
/// # Example
///
/// ```
/// # use infix_eval::{evaluate_tokens, Token};
/// let tokens = ["(", "2", "+", "2", ")", "*", "2"]
///     .iter()
///     .map(|text| text.parse::<Token>())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(evaluate_tokens(tokens), Ok(8.0));
/// ```
pub fn evaluate_tokens<I>(tokens: I) -> Result<f64, Error>
where
    I: IntoIterator<Item = Token>,
{
    let mut stacks = Stacks::default();
    for token in tokens {
        stacks.push(token)?;
    }
    stacks.finish()
}

/// Entries of the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Op(Op),
    LParen,
}

#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl Stacks {
    fn push(&mut self, token: Token) -> Result<(), Error> {
        match token {
            Token::Op(o1) => {
                while let Some(&Pending::Op(o2)) = self.operators.last() {
                    if o2.precedence() < o1.precedence() {
                        break;
                    }
                    self.operators.pop();
                    self.reduce(o2)?;
                }
                self.operators.push(Pending::Op(o1));
            }
            Token::Number(text) => self.operands.push(parse_number(&text)?),
            Token::LParen => self.operators.push(Pending::LParen),
            Token::RParen => loop {
                match self.operators.pop() {
                    Some(Pending::LParen) => break,
                    Some(Pending::Op(op)) => self.reduce(op)?,
                    None => return Err(Error::MismatchedParenthesis),
                }
            },
        }
        Ok(())
    }

    /// Apply `op` to the two most recently pushed operands
    fn reduce(&mut self, op: Op) -> Result<(), Error> {
        let right = self.operands.pop();
        let left = self.operands.pop();
        match (left, right) {
            (Some(left), Some(right)) => {
                let value = op.apply(left, right);
                trace!(%op, left, right, value, "reduce");
                self.operands.push(value);
                Ok(())
            }
            _ => Err(Error::InsufficientOperands(op)),
        }
    }

    fn finish(mut self) -> Result<f64, Error> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Op(op) => self.reduce(op)?,
                Pending::LParen => return Err(Error::MismatchedParenthesis),
            }
        }
        match self.operands.len() {
            0 => Err(Error::EmptyExpression),
            1 => self.operands.pop().ok_or(Error::EmptyExpression),
            count => Err(Error::UnusedOperands(count)),
        }
    }
}

fn parse_number(text: &str) -> Result<f64, Error> {
    if !is_number(text) {
        return Err(Error::InvalidLiteral(text.into()));
    }
    text.parse::<f64>().map_err(|_| Error::InvalidLiteral(text.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2 + 2 * 2" => Ok(6.0) ; "multiplication first")]
    #[test_case("(2 + 2) * 2" => Ok(8.0) ; "parenthesis first")]
    #[test_case("(1+2)^2" => Ok(9.0) ; "exponent of group")]
    #[test_case("2-1+5*5-2" => Ok(24.0) ; "mixed operators")]
    #[test_case("3*(-2+5)" => Ok(9.0) ; "negative literal after parenthesis")]
    #[test_case("10/4" => Ok(2.5) ; "float division")]
    #[test_case("8-3-2" => Ok(3.0) ; "subtraction is left associative")]
    #[test_case("2^3^2" => Ok(64.0) ; "exponent is left associative")]
    #[test_case("2*3^2" => Ok(18.0) ; "exponent before multiplication")]
    #[test_case("((7))" => Ok(7.0) ; "nested groups")]
    #[test_case("0.5 + 0.25" => Ok(0.75) ; "decimals")]
    #[test_case("1 000 + 1" => Ok(1001.0) ; "whitespace inside number")]
    fn values(input: &str) -> Result<f64, Error> {
        evaluate(input)
    }

    #[test_case("(1+2" => Err(Error::MismatchedParenthesis) ; "unclosed parenthesis")]
    #[test_case("1+2)" => Err(Error::MismatchedParenthesis) ; "unopened parenthesis")]
    #[test_case(")(" => Err(Error::MismatchedParenthesis) ; "reversed parenthesis")]
    #[test_case("" => Err(Error::EmptyExpression) ; "empty input")]
    #[test_case("()" => Err(Error::EmptyExpression) ; "empty group")]
    #[test_case("1+" => Err(Error::InsufficientOperands(Op::Plus)) ; "missing right operand")]
    #[test_case("-3+5" => Err(Error::InsufficientOperands(Op::Minus)) ; "bare leading minus")]
    #[test_case("2*-3" => Err(Error::InsufficientOperands(Op::Mul)) ; "minus after operator")]
    #[test_case("1.2.3+1" => Err(Error::InvalidLiteral("1.2.3".into())) ; "two dots")]
    #[test_case("01+1" => Err(Error::InvalidLiteral("01".into())) ; "leading zero")]
    #[test_case("(-(1))" => Err(Error::InvalidLiteral("-".into())) ; "lone minus literal")]
    #[test_case("(2)(3)" => Err(Error::UnusedOperands(2)) ; "missing operator")]
    fn errors(input: &str) -> Result<f64, Error> {
        evaluate(input)
    }

    #[test]
    fn special_values() {
        assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("(-1)/0"), Ok(f64::NEG_INFINITY));
        assert_eq!(evaluate("0^(-1)"), Ok(f64::INFINITY));
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn no_hidden_state() {
        let input = "(4 - 1) * 2 ^ 2 / 3";
        let first = evaluate(input);
        assert_eq!(first, Ok(4.0));
        assert_eq!(evaluate(input), first);
    }

    #[test]
    fn external_tokens() {
        let tokens = vec![
            Token::Number("6".into()),
            Token::Op(Op::Div),
            Token::LParen,
            Token::Number("-3".into()),
            Token::RParen,
        ];
        assert_eq!(evaluate_tokens(tokens), Ok(-2.0));
        assert_eq!(evaluate_tokens(Vec::new()), Err(Error::EmptyExpression));
    }
}
