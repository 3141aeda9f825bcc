//! Lenient numeric prefix parsing.
//!
//! Cells such as `"42kg"` or `" 3.5 %"` still carry a number at the front.
//! The parser extracts the longest leading decimal literal and hands back the
//! unconsumed remainder, so callers decide whether trailing text matters.

use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal literal: optional sign, then `Infinity` or digits with an
/// optional fraction and exponent. ASCII digits only.
static NUMERIC_PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("Invalid numeric prefix pattern")
});

/// A number parsed from the front of a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericPrefix<'a> {
    /// The parsed value.
    pub value: f64,
    /// Everything after the numeric literal.
    pub rest: &'a str,
}

#[inline]
fn is_leading_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parse the leading numeric literal of `s`.
///
/// Leading whitespace is skipped. Returns `None` when `s` does not start with
/// a number once whitespace is removed.
pub fn parse_numeric_prefix(s: &str) -> Option<NumericPrefix<'_>> {
    let trimmed = s.trim_start_matches(is_leading_space);
    let m = NUMERIC_PREFIX_PATTERN.find(trimmed)?;
    let value = m.as_str().parse::<f64>().ok()?;

    Some(NumericPrefix {
        value,
        rest: &trimmed[m.end()..],
    })
}

/// Parse the leading numeric literal of `s`, discarding the remainder.
#[inline]
pub fn parse_numeric(s: &str) -> Option<f64> {
    parse_numeric_prefix(s).map(|p| p.value)
}
