use crate::numeric::coerce::parse_amount;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref KEYSTROKE_FILTER: Regex = Regex::new(r"[^0-9.,]").unwrap();
}

/// How money is rendered in reports. There is one fixed locale; the
/// fields only exist so the config file can adjust the symbol and precision.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimals: usize,
    pub grouping: char,
    pub decimal: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
            grouping: ',',
            decimal: '.',
        }
    }
}

/// Render a value as money, e.g. 1234.5 -> "$1,234.50"
pub fn format_currency(value: f64, format: &CurrencyFormat) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, format.symbol);
    }

    let fixed = format!("{:.*}", format.decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(format.grouping);
        }
        grouped.push(c);
    }

    // "-0.00" reads oddly, only keep the sign when something non-zero shows
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(format.decimal);
        out.push_str(frac);
    }
    out
}

/// Price field formatting when the input loses focus.
/// Blank stays blank so the required-field check still fires, text with no
/// number in it is cleared, anything else gets two decimals.
pub fn format_price_field(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match parse_amount(trimmed) {
        Some(value) => format!("{:.2}", value),
        None => String::new(),
    }
}

/// Filter applied to the price field on every keystroke
pub fn sanitize_price_keystroke(text: &str) -> String {
    KEYSTROKE_FILTER.replace_all(text, "").into_owned()
}
