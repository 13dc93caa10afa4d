//! Display formatting for reserve values
//!
//! Amounts come in as decimal strings. Anything unparseable is shown as a dash
//! rather than failing the render.

/// Shown in place of a value that is absent or not a number
pub const PLACEHOLDER: &str = "—";

const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Smallest magnitude rendered as digits; anything below shows as `< 0.01`
const MIN_VISIBLE: f64 = 0.01;

/// Parse a decimal string, rejecting non-finite values
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Compact form with K/M/B/T suffixes and two decimals
pub fn compact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let mut magnitude = value.abs();

    if magnitude < MIN_VISIBLE {
        return format!("{}< {:.2}", sign, MIN_VISIBLE);
    }

    let mut tier = 0;
    while tier + 1 < SUFFIXES.len() && magnitude >= 1000.0 {
        magnitude /= 1000.0;
        tier += 1;
    }

    // 999.996K must not print as 1000.00K
    if (magnitude * 100.0).round() / 100.0 >= 1000.0 && tier + 1 < SUFFIXES.len() {
        magnitude /= 1000.0;
        tier += 1;
    }

    format!("{}{:.2}{}", sign, magnitude, SUFFIXES[tier])
}

/// Full form with thousands separators and two decimals
pub fn grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    // Negative values that round to zero print unsigned
    let rounds_to_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }

    format!("{}{}.{}", sign, out, frac_part)
}

/// Compact rendering of a decimal string
pub fn format_compact(value: &str) -> String {
    parse_amount(value).map(compact).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Grouped, non-compact rendering of a decimal string
pub fn format_amount(value: &str) -> String {
    parse_amount(value).map(grouped).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// USD subheader, e.g. `$1.50M`
pub fn format_usd(value: &str) -> String {
    match parse_amount(value) {
        Some(v) if v < 0.0 => format!("-${}", compact(-v)),
        Some(v) => format!("${}", compact(v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fraction rendered as a percentage with `decimals` places
pub fn percent(fraction: f64, decimals: usize) -> String {
    let pct = fraction * 100.0;
    if pct != 0.0 && pct.abs() < MIN_VISIBLE {
        return format!("< {:.2}%", MIN_VISIBLE);
    }
    format!("{:.*}%", decimals, pct)
}

/// Percentage rendering of a fraction string
pub fn format_percent(value: &str) -> String {
    parse_amount(value)
        .map(|v| percent(v, 2))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// "X of Y" pairing used by capped quantities
pub fn of(used: &str, cap: &str) -> String {
    format!("{} of {}", used, cap)
}
