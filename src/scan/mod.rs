//! Duration string scanner.
//!
//! [`Tokens`] scans a lowercased string left to right for non-overlapping
//! tokens of the shape: optional minus sign, optional whitespace after the
//! sign, a numeric literal (`10`, `10.25`, `.5`), optional whitespace, then
//! one or more unit letters (`a`–`z` or `μ`). Anything that does not fit
//! the shape is skipped: a candidate that runs out of unit letters fails
//! and the scan resumes one character past where it started, so a trailing
//! bare number (`"10 mins 1000"`) is dropped and pure garbage (`"hello
//! world"`) yields no tokens at all.
//!
//! [`validate_strict`] performs the strict-mode structural check on the
//! whole string before any token resolution happens.
//!
//! # Example
//!
//! ```
//! use delta_time::scan::Tokens;
//!
//! let units: Vec<&str> = Tokens::new("1h3m2s").map(|t| t.unit).collect();
//! assert_eq!(units, ["h", "m", "s"]);
//! ```

use crate::error::DeltaTimeError;

/// One scanned token: a signed amount and a unit spelling.
///
/// `amount` is the unsigned numeric literal exactly as it appeared in the
/// input; the sign is carried separately because whitespace may sit between
/// the minus and the digits (`"- 5s"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Whether the amount carries a leading minus sign.
    pub negative: bool,
    /// The unsigned numeric literal (`"10"`, `"10.25"`, `".5"`).
    pub amount: &'a str,
    /// The unit-letter run (`"ms"`, `"mins"`, `"μs"`).
    pub unit: &'a str,
}

impl Token<'_> {
    /// The signed numeric value of the amount.
    #[must_use]
    pub fn value(&self) -> f64 {
        // The scanner only emits literals `f64::from_str` accepts.
        let magnitude = self.amount.parse::<f64>().unwrap_or_default();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Iterator over the duration tokens of a lowercased string.
///
/// Finite, restartable (construct a new one), and allocation-free: tokens
/// borrow from the input.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Start a scan over `input`, which must already be lowercase.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            if let Some((token, end)) = match_at(self.input, self.pos) {
                self.pos = end;
                return Some(token);
            }
            self.pos += char_len_at(self.input, self.pos);
        }
        None
    }
}

/// Try to match one token starting exactly at `start`.
///
/// Returns the token and the byte offset just past it.
fn match_at(input: &str, start: usize) -> Option<(Token<'_>, usize)> {
    let mut pos = start;

    let negative = input[pos..].starts_with('-');
    if negative {
        pos += 1;
        pos = eat_while(input, pos, char::is_whitespace);
    }

    // Numeric literal: `.digits`, or `digits` with an optional point and
    // optional fraction digits.
    let amount_start = pos;
    pos = eat_while(input, pos, |c| c.is_ascii_digit());
    if pos > amount_start {
        if input[pos..].starts_with('.') {
            pos = eat_while(input, pos + 1, |c| c.is_ascii_digit());
        }
    } else if input[pos..].starts_with('.') {
        let frac_end = eat_while(input, pos + 1, |c| c.is_ascii_digit());
        if frac_end == pos + 1 {
            return None;
        }
        pos = frac_end;
    } else {
        return None;
    }
    let amount = &input[amount_start..pos];

    let unit_start = eat_while(input, pos, char::is_whitespace);
    let unit_end = eat_while(input, unit_start, is_unit_letter);
    if unit_end == unit_start {
        return None;
    }
    let unit = &input[unit_start..unit_end];

    Some((
        Token {
            negative,
            amount,
            unit,
        },
        unit_end,
    ))
}

/// Validate the structure of a lowercased string for strict-mode parsing.
///
/// Rejects, in order of detection:
/// - characters outside lowercase letters, digits, `.`, `-`, whitespace and
///   the micro sign,
/// - a string starting with unit letters (no preceding number),
/// - a string ending in a number (no unit after it),
/// - two whitespace-separated unit-letter runs (ambiguous unit),
/// - two whitespace-separated number runs (ambiguous number); a lone `-`
///   binding to the following number is a sign, not a number run.
///
/// # Errors
///
/// Returns [`DeltaTimeError::MalformedInput`] naming the offending string.
pub fn validate_strict(input: &str) -> Result<(), DeltaTimeError> {
    let malformed = || DeltaTimeError::MalformedInput {
        input: input.to_string(),
    };

    for c in input.chars() {
        if !(is_unit_letter(c) || is_number_char(c) || c.is_whitespace()) {
            return Err(malformed());
        }
    }

    let runs = classify_runs(input);

    if runs.first().is_some_and(|r| r.kind == RunKind::Letters) {
        return Err(malformed());
    }
    if runs.last().is_some_and(|r| r.kind == RunKind::Number) {
        return Err(malformed());
    }
    for pair in runs.windows(2) {
        if pair[0].kind == pair[1].kind {
            let sign_only = pair[0].kind == RunKind::Number && pair[0].text == "-";
            if !sign_only {
                return Err(malformed());
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Number,
    Letters,
}

#[derive(Debug, Clone, Copy)]
struct Run<'a> {
    kind: RunKind,
    text: &'a str,
}

/// Split a character-validated string into maximal runs of number-ish
/// (digits, `.`, `-`) and unit-letter characters, dropping whitespace.
///
/// Two same-kind runs in the output were necessarily whitespace-separated
/// in the input; they would have merged otherwise.
fn classify_runs(input: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        let Some(c) = input[pos..].chars().next() else {
            break;
        };
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }
        let kind = if is_number_char(c) {
            RunKind::Number
        } else {
            RunKind::Letters
        };
        let start = pos;
        pos = eat_while(input, pos, |c| match kind {
            RunKind::Number => is_number_char(c),
            RunKind::Letters => is_unit_letter(c),
        });
        runs.push(Run {
            kind,
            text: &input[start..pos],
        });
    }
    runs
}

const fn is_unit_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'μ'
}

const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

fn eat_while(input: &str, mut pos: usize, pred: impl Fn(char) -> bool) -> usize {
    while let Some(c) = input[pos..].chars().next() {
        if !pred(c) {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

fn char_len_at(input: &str, pos: usize) -> usize {
    input[pos..].chars().next().map_or(1, char::len_utf8)
}
