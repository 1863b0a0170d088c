//! Number formatting for labels and tooltips.

/// Rounds half-way values toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Exact for every finite input: `0.49999999999999994 -> 0` and integers
/// above 2^52 are returned unchanged.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Magnitude from which numbers are written with an exponent.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero numbers are written with an exponent.
const EXPONENT_LOWER: f64 = 1e-6;

/// Shortest rendering of a number: integers without a fractional part and
/// no negative zero. Magnitudes of at least `1e21` or below `1e-6` use an
/// exponent with an explicit sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }
    format!("{value}")
}

/// Rounds to at most `max_decimals` fractional digits, then formats like
/// [`format_number`] (`41.3333 -> "41.33"`, `40.0 -> "40"`).
#[must_use]
pub fn format_decimal(value: f64, max_decimals: u32) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let factor = 10f64.powi(max_decimals as i32);
    format_number((value * factor).round() / factor)
}

/// Formats an axis tick with the precision implied by `step` and grouped
/// thousands (`1500 -> "1,500"`, `0.25 -> "0.25"`).
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10()).ceil().max(0.0) as usize
    } else {
        0
    };
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 + 1);
    let negative = value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative {
        grouped.push('−');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Escapes text for inclusion in SVG or HTML markup.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
