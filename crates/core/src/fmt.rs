//! Significant-digit number formatting for labels.

/// Formats `value` with `precision` significant digits, `%g` style.
///
/// Trailing zeros (and a trailing decimal point) are dropped. Scientific
/// notation is used when the decimal exponent is below -4 or at least
/// `precision`, with a signed two-digit exponent (`1.5e+06`). A precision
/// of 0 is treated as 1.
///
/// ```
/// use snowflake_core::fmt::format_significant;
/// assert_eq!(format_significant(1.123456, 3), "1.12");
/// assert_eq!(format_significant(125.123456, 4), "125.1");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let p = precision.max(1);
    // Round once in scientific form so the exponent reflects carries (9.99 -> 1.00e1).
    let sci = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
