/// Unicode minus sign used for negative labels.
pub const MINUS_SIGN: char = '\u{2212}';

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Formats an axis value for humans: `2500000 -> "2.5M"`, `-2500 -> "−2.5K"`.
///
/// Magnitudes of a million or more get an `M` suffix, a thousand or more a
/// `K` suffix; the scaled value is printed without extra rounding. Negative
/// values use a true minus sign. With `with_sign`, positive values get a
/// leading `+`. Zero is always `"0"`; `NaN` and infinities pass through
/// as plain text.
#[must_use]
pub fn pretty_label(value: f64, with_sign: bool) -> String {
    if !value.is_finite() {
        return number_text(value);
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    if value < 0.0 {
        let mut label = String::new();
        label.push(MINUS_SIGN);
        label.push_str(&pretty_label(-value, false));
        return label;
    }

    let magnitude = if value >= MILLION {
        format!("{}M", number_text(value / MILLION))
    } else if value >= THOUSAND {
        format!("{}K", number_text(value / THOUSAND))
    } else {
        number_text(value)
    };

    if with_sign {
        format!("+{magnitude}")
    } else {
        magnitude
    }
}

/// Shortest round-trip text of `value`, switching to exponent notation
/// outside `[1e-6, 1e21)` the way browser number-to-string does.
pub(crate) fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}
