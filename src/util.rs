use regex::Regex;

lazy_static! {
    static ref NUMBER: Regex =
        Regex::new(r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?$").expect("invalid number grammar");
}

/// Check if `text` is a well formed number literal: an optional `-`, then
/// `0` or digits without leading zero, then an optional fractional part.
///
/// # Examples
///
/// ```
/// # use infix_eval::is_number;
/// assert!(is_number("-3.25"));
/// assert!(!is_number("1."));
/// assert!(!is_number("--2"));
/// ```
#[must_use]
pub fn is_number(text: &str) -> bool {
    NUMBER.is_match(text)
}

/// Check if `c` can appear inside a number literal built by the lexer
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if `c` is one of `+ - * / ^`
pub(crate) fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Check if `c` is a parenthesis
pub(crate) fn is_grouping(c: char) -> bool {
    c == '(' || c == ')'
}
