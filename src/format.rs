//! Display helpers: pt-BR number grouping, coordinate rendering and the free-form
//! "X, Y, Z" coordinate parser used by the admin forms.

use crate::model::Point3;
use crate::statics;
use regex::Regex;
use std::sync::OnceLock;

fn coord_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("static regex"))
}

/// Format a number the way pt-BR locales do: `.` thousands separator, `,` decimal
/// separator, at most three fraction digits, no trailing zeros.
pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_negative() {
            "-∞".to_string()
        } else {
            "∞".to_string()
        };
    }

    let scaled = (v.abs() * 1000.0).round() as u128;
    let int_part = scaled / 1000;
    let frac_part = scaled % 1000;

    let digits = int_part.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 6);
    if v < 0.0 && scaled != 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    if frac_part != 0 {
        let frac = format!("{frac_part:03}");
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// `R$ 1.234,5`
pub fn fmt_money(v: f64) -> String {
    format!("{} {}", statics::PT_CURRENCY, fmt_number(v))
}

/// Shortest round-trip rendering of a coordinate, without a dangling `.0`.
pub fn fmt_coord(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let mut buf = ryu::Buffer::new();
    let s = buf.format_finite(v);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}

/// Entry coordinate text for the edit form: `"x, y, z"`.
pub fn fmt_coord_triplet(p: Point3) -> String {
    format!("{}, {}, {}", fmt_coord(p.x), fmt_coord(p.y), fmt_coord(p.z))
}

/// Lenient float parse for form fields. Anything unparsable (including empty input) is 0.
pub fn parse_float_or_zero(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    if let Ok(v) = t.parse::<f64>()
        && v.is_finite()
    {
        return v;
    }
    // Fall back to the leading numeric prefix ("12abc" -> 12).
    coord_number_re()
        .find(t)
        .filter(|m| m.start() == 0)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a coordinate string such as `"1239.5, -2350.6, 45.2"` (any separators).
/// Numeric substrings are taken in order; fewer than three yields the zero vector.
pub fn parse_coord_string(text: &str) -> Point3 {
    let nums: Vec<f64> = coord_number_re()
        .find_iter(text)
        .take(3)
        .map(|m| m.as_str().parse::<f64>().unwrap_or(0.0))
        .collect();

    match nums.as_slice() {
        [x, y, z] => Point3::new(*x, *y, *z),
        _ => Point3::ZERO,
    }
}
