//! Utility functions for UI components

/// Abbreviate a play or follower count: "2.5M", "15K", "500".
///
/// Absent and zero counts format as an empty string so callers can skip them.
/// Millions always keep one decimal, even past a thousand million ("1000.0M").
/// Millions round the exact value of `n / 1e6` as a double, so 1,150,000 is
/// "1.1M" because 1.15 is stored just below itself. Exact ties round up.
pub fn format_count(count: Option<u64>) -> String {
    match count {
        None | Some(0) => String::new(),
        Some(n) if n >= 1_000_000 => format!("{}M", one_decimal(n as f64 / 1_000_000.0)),
        Some(n) if n >= 1_000 => format!("{}K", div_round_half_up(n, 1_000)),
        Some(n) => n.to_string(),
    }
}

/// "1.5M plays", or None when there is nothing to show
pub fn format_plays(plays: Option<u64>) -> Option<String> {
    with_unit(plays, "plays")
}

/// "1.5M followers", or None when there is nothing to show
pub fn format_followers(followers: Option<u64>) -> Option<String> {
    with_unit(followers, "followers")
}

fn with_unit(count: Option<u64>, unit: &str) -> Option<String> {
    let formatted = format_count(count);
    if formatted.is_empty() {
        None
    } else {
        Some(format!("{} {}", formatted, unit))
    }
}

/// `x` to one decimal place. `{:.1}` rounds the exact binary value but sends
/// exact ties to even, so ties are rounded up here instead. A double can only
/// sit exactly halfway between tenths when it is an odd number of quarters.
fn one_decimal(x: f64) -> String {
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (x * 10.0).ceil() as u64;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", x)
    }
}

fn div_round_half_up(n: u64, divisor: u64) -> u64 {
    n / divisor + u64::from(n % divisor >= divisor / 2)
}
