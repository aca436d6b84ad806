/// Abbreviate a raw view or subscriber count.
///
/// The leading integer of `raw` is read the way a lenient number parser
/// would (leading whitespace, optional sign, then digits; the rest is
/// ignored). Millions and thousands get one decimal and an `M`/`K` suffix.
/// Anything smaller, or a string without a leading integer, is returned
/// unchanged, so already abbreviated values like `"1.4K"` pass through.
pub fn format_view_count(raw: &str) -> String {
    let Some(count) = leading_integer(raw) else {
        return raw.to_string();
    };

    if count >= 1_000_000.0 {
        format!("{}M", one_decimal(count / 1_000_000.0))
    } else if count >= 1_000.0 {
        format!("{}K", one_decimal(count / 1_000.0))
    } else {
        raw.to_string()
    }
}

/// `value` with one decimal, exact ties rounded up.
///
/// `{:.1}` rounds an exact tie to even (`1.25` becomes `1.2`). The only
/// doubles sitting exactly on a tie end in `.25` or `.75`, so those are
/// bumped explicitly; everything else already rounds to nearest.
fn one_decimal(value: f64) -> String {
    let quarter = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if quarter {
        format!("{:.1}", (value * 10.0).ceil() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

fn leading_integer(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end]
        .bytes()
        .fold(0f64, |acc, b| acc * 10.0 + f64::from(b - b'0'));
    Some(if negative { -value } else { value })
}
