//! Number formatting shared by cost drivers, the report serializer and the console summary.
//!
//! In-memory values keep full precision; rounding happens only when a value is rendered.

use serde::Serializer;

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Currency precision (2 decimal places).
pub fn round_currency(value: f64) -> f64 {
    round_to(value, 2)
}

/// Percentage precision (1 decimal place).
pub fn round_percent(value: f64) -> f64 {
    round_to(value, 1)
}

pub fn serialize_currency<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_currency(*value))
}

pub fn serialize_percent<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_percent(*value))
}

/// Serializes a 0..=1 fraction as a percentage.
pub fn serialize_fraction_as_percent<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_percent(*value * 100.0))
}

/// Formats `value` with `decimals` fraction digits and `,` thousands separators.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Whole-number count with thousands separators, e.g. `100,000`.
pub fn count(value: f64) -> String {
    group_thousands(value, 0)
}

/// Dollar amount at currency precision, e.g. `$1,952.39`.
pub fn usd(value: f64) -> String {
    format!("${}", group_thousands(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(count(100_000.0), "100,000");
        assert_eq!(count(999.0), "999");
        assert_eq!(count(1_234_567.4), "1,234,567");
        assert_eq!(group_thousands(1952.3875, 2), "1,952.39");
        assert_eq!(usd(0.004), "$0.00");
        assert_eq!(usd(-1234.5), "$-1,234.50");
        assert_eq!(group_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn rounds_to_report_precision() {
        assert_eq!(round_currency(1069.2000000000001), 1069.2);
        assert_eq!(round_percent(18.26), 18.3);
        assert_eq!(round_to(0.125, 2), 0.13);
    }
}
