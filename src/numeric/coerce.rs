use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Anything that cannot be part of a number
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.,-]").unwrap();

    /// Longest float literal at the start of a scrubbed string
    static ref LEADING_FLOAT: Regex = Regex::new(r"^-?([0-9]+(\.[0-9]*)?|\.[0-9]+)").unwrap();
}

/// Something that can be read as an amount of money or a quantity
pub trait Amount {
    fn to_number(&self) -> f64;
}

impl Amount for f64 {
    fn to_number(&self) -> f64 {
        *self
    }
}

impl Amount for str {
    fn to_number(&self) -> f64 {
        parse_amount(self).unwrap_or(0.0)
    }
}

impl Amount for String {
    fn to_number(&self) -> f64 {
        self.as_str().to_number()
    }
}

impl<T: Amount + ?Sized> Amount for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

/// Coerce currency-like text (or a number) into an f64, falling back to 0
pub fn to_number<A: Amount + ?Sized>(value: &A) -> f64 {
    value.to_number()
}

/// A field value as it arrives from a form, a file or the command line
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    pub fn is_blank(&self) -> bool {
        match self {
            NumberInput::Number(_) => false,
            NumberInput::Text(s) => s.trim().is_empty(),
        }
    }
}

impl Default for NumberInput {
    fn default() -> Self {
        NumberInput::Text(String::new())
    }
}

impl Amount for NumberInput {
    fn to_number(&self) -> f64 {
        match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s.to_number(),
        }
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

/// Parse currency-like text, returning None when no number can be recovered
pub fn parse_amount(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }

    let scrubbed = NON_NUMERIC.replace_all(text, "");
    let normalized = resolve_separators(&scrubbed);

    let parsed = LEADING_FLOAT
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok());

    if parsed.is_none() {
        tracing::warn!("could not read a number from {:?}", text);
    }
    parsed
}

/// Rewrite grouping and decimal separators so that only a single `.`
/// remains as the decimal point.
///
/// - both `,` and `.` present: the last one is the decimal separator
/// - one kind repeated: grouping
/// - a single `,` after a non-zero digit, followed by exactly three digits: grouping
/// - any other single `,` or `.`: decimal
fn resolve_separators(s: &str) -> String {
    let commas = s.matches(',').count();
    let dots = s.matches('.').count();

    match (commas, dots) {
        (0, 0) => s.to_string(),
        (c, d) if c > 0 && d > 0 => {
            let last_comma = s.rfind(',').unwrap_or(0);
            let last_dot = s.rfind('.').unwrap_or(0);
            if last_comma > last_dot {
                with_decimal_at(s, last_comma)
            } else {
                with_decimal_at(s, last_dot)
            }
        }
        (1, 0) => {
            let pos = s.find(',').unwrap_or(0);
            let after = &s[pos + 1..];
            // A lone zero can't be a thousands group ("0,500" is half)
            let has_leading_digit = !s[..pos]
                .trim_start_matches('-')
                .trim_start_matches('0')
                .is_empty();
            if has_leading_digit && after.len() == 3 && after.chars().all(|c| c.is_ascii_digit()) {
                s.replace(',', "")
            } else {
                s.replace(',', ".")
            }
        }
        (0, 1) => s.to_string(),
        // Repeated separators of one kind only ever group thousands
        _ => s.replace([',', '.'], ""),
    }
}

/// Drop every separator except the one at `decimal`, which becomes `.`
fn with_decimal_at(s: &str, decimal: usize) -> String {
    s.char_indices()
        .filter_map(|(i, c)| match c {
            _ if i == decimal => Some('.'),
            ',' | '.' => None,
            _ => Some(c),
        })
        .collect()
}
