/// Extra significant digits granted beyond the integer part.
const PRECISION: usize = 6;

/// Render a value with adaptive significant digits: the character count
/// of its integer part in default display (sign included) plus six.
/// A trailing all-zero fraction is trimmed to an integer display, so
/// `2.000000` prints as `2` and `-0.5000000` as `-0.5`.
pub fn format_value(value: f64) -> String {
    let display = format!("{value}");
    let int_len = display.split('.').next().unwrap_or(display.as_str()).len();
    format_significant(value, int_len + PRECISION)
}

fn format_significant(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= significant as i32 {
        return scientific(value, significant);
    }
    let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(format!("{value:.decimals$}"))
}

// Scientific fallback for magnitudes outside the fixed-notation range,
// rendered with a signed two-digit exponent (`1.5e+21`, `2e-07`).
fn scientific(value: f64, significant: usize) -> String {
    let precision = significant.saturating_sub(1);
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = trim_fraction(mantissa.to_string());
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            let magnitude = exponent.abs();
            format!("{mantissa}e{sign}{magnitude:02}")
        }
        None => formatted,
    }
}

fn trim_fraction(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
