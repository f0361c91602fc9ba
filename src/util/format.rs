//! pt-BR number formatting for cards and tables.
//!
//! Mirrors `Number.prototype.toLocaleString('pt-BR')`: `.` groups thousands,
//! `,` separates decimals, and trailing fraction zeros are dropped down to the
//! requested minimum.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::error::ApiError;

/// Default `toLocaleString` precision for plain numbers.
const DEFAULT_MAX_FRACTION: usize = 3;

/// Shown in place of a value whose decimal string failed to parse.
pub const INVALID_VALUE: &str = "valor inválido";

/// Format `value` with pt-BR separators and the given fraction bounds.
pub fn format_decimal_br(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let max_fraction = max_fraction.max(min_fraction);
    let fixed = format!("{:.*}", max_fraction, round_half_away(value.abs(), max_fraction));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.to_owned();
    while frac.len() > min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let negative = value < 0.0 && (int_part.bytes().any(|b| b != b'0') || frac.bytes().any(|b| b != b'0'));
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(&frac);
    }
    out
}

/// Round to `digits` fraction digits with ties going away from zero, as
/// ICU does. `format!` alone rounds exact ties to even.
fn round_half_away(value: f64, digits: usize) -> f64 {
    let factor = (0..digits).fold(1.0_f64, |f, _| f * 10.0);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Plain number with default precision, e.g. `1.234,5`.
pub fn format_number(value: f64) -> String {
    format_decimal_br(value, 0, DEFAULT_MAX_FRACTION)
}

/// Energy amount, e.g. `1.234,5 kWh`.
pub fn format_kwh(value: f64) -> String {
    format!("{} kWh", format_number(value))
}

/// Money with exactly two decimals, without currency symbol.
pub fn format_money(value: f64) -> String {
    format_decimal_br(value, 2, 2)
}

/// Money with the `R$` prefix.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_money(value))
}

/// GD savings: absolute value, flagged when the balance is negative.
pub fn format_economia(value: f64) -> String {
    let base = format_brl(value.abs());
    if value < 0.0 { format!("{base} (negativo)") } else { base }
}

/// Table cell for a fallible decimal field.
pub fn format_cell(value: Result<f64, ApiError>, format: fn(f64) -> String) -> String {
    match value {
        Ok(v) => format(v),
        Err(err) => {
            log::warn!("{err}");
            INVALID_VALUE.to_owned()
        }
    }
}
