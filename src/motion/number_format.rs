//! Number rendering for the "en" locale.
//!
//! Mirrors what `Intl.NumberFormat("en")` prints for the two styles the page
//! uses, so counters look the same whether they render mid-animation or on
//! the final frame.

const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Rounds half away from zero to `decimals` fractional digits.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Grouped thousands with exactly `decimals` fractional digits, e.g. `12,300.50`.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let rounded = round_to(value, decimals);
    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    with_sign(rounded, &group_thousands(&digits))
}

/// Short compact notation with at most `max_decimals` fractional digits,
/// e.g. `12.3K`, `1.2M`. Trailing zeros are dropped.
pub fn format_compact(value: f64, max_decimals: u32) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let magnitude = value.abs();

    // Walk from the smallest unit up so a mantissa that rounds to 1000
    // rolls over into the next unit ("999.96K" -> "1M").
    let mut mantissa = round_to(magnitude, max_decimals);
    let mut unit = "";
    for (scale, label) in COMPACT_UNITS.iter() {
        if mantissa < 1000.0 {
            break;
        }
        mantissa = round_to(magnitude / scale, max_decimals);
        unit = label;
    }

    // Compact notation only groups from five integer digits up: "5000T", "50,000T".
    let digits = trim_fraction(&format!("{:.*}", max_decimals as usize, mantissa));
    let int_len = digits.split('.').next().map_or(0, str::len);
    let body = if int_len >= 5 {
        group_thousands(&digits)
    } else {
        digits
    };
    format!("{}{}", with_sign(value, &body), unit)
}

fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

fn trim_fraction(digits: &str) -> String {
    if !digits.contains('.') {
        return digits.to_string();
    }
    digits.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn with_sign(value: f64, body: &str) -> String {
    if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", body)
    } else {
        body.to_string()
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_negative() {
        "-∞".to_string()
    } else {
        "∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pads_fraction() {
        assert_eq!(format_fixed(42.0, 0), "42");
        assert_eq!(format_fixed(3.5, 2), "3.50");
        assert_eq!(format_fixed(0.0, 1), "0.0");
    }

    #[test]
    fn test_fixed_groups_thousands() {
        assert_eq!(format_fixed(12300.0, 0), "12,300");
        assert_eq!(format_fixed(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_fixed(999.0, 0), "999");
        assert_eq!(format_fixed(1000.0, 0), "1,000");
    }

    #[test]
    fn test_fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn test_fixed_negative_zero_has_no_sign() {
        assert_eq!(format_fixed(-0.04, 1), "0.0");
    }

    #[test]
    fn test_compact_thousands() {
        assert_eq!(format_compact(12300.0, 1), "12.3K");
        assert_eq!(format_compact(12300.0, 0), "12K");
        assert_eq!(format_compact(1000.0, 1), "1K");
    }

    #[test]
    fn test_compact_larger_units() {
        assert_eq!(format_compact(1_200_000.0, 1), "1.2M");
        assert_eq!(format_compact(2_500_000_000.0, 2), "2.5B");
        assert_eq!(format_compact(7_000_000_000_000.0, 0), "7T");
    }

    #[test]
    fn test_compact_small_values_have_no_unit() {
        assert_eq!(format_compact(0.0, 1), "0");
        assert_eq!(format_compact(950.0, 0), "950");
        assert_eq!(format_compact(12.34, 1), "12.3");
    }

    #[test]
    fn test_compact_rolls_over_to_next_unit() {
        assert_eq!(format_compact(999_960.0, 1), "1M");
        assert_eq!(format_compact(999.96, 1), "1K");
    }

    #[test]
    fn test_compact_beyond_trillions_groups_from_five_digits() {
        assert_eq!(format_compact(5e15, 0), "5000T");
        assert_eq!(format_compact(1.5e15, 0), "1500T");
        assert_eq!(format_compact(5e16, 0), "50,000T");
        assert_eq!(format_compact(-5e15, 0), "-5000T");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_fixed(f64::NAN, 0), "NaN");
        assert_eq!(format_compact(f64::INFINITY, 0), "∞");
    }
}
