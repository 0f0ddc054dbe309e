//! Display formatting helpers
//!
//! Currency, percentage, compact and file-size formatting for dashboard
//! cells. These produce the display strings the normalizer later parses
//! back, so the two modules agree on symbols and separators.

/// Currency symbol used across the dashboard fixtures.
pub const CURRENCY_SYMBOL: char = '₹';

/// Format a currency amount with thousands separators: "₹18,542.00".
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped(value.abs()))
}

/// Format a currency amount with an explicit sign: "+₹1,234.00".
pub fn format_signed_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped(value.abs()))
}

/// Format a percentage: "2.34%".
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a percentage with an explicit sign: "+2.34%".
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value < 0.0 { "" } else { "+" };
    format!("{}{:.2}%", sign, value)
}

/// Compact magnitude formatting for summary tiles: "1.2B", "12.3M".
pub fn format_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{}{:.1}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.1}K", sign, abs / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs)
    }
}

/// Human-readable file size for the report library: "1.5 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut number = format!("{:.2}", scaled);
    if number.contains('.') {
        number = number
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }
    format!("{} {}", number, UNITS[exponent])
}

/// Two-decimal amount with comma-grouped integer digits.
fn grouped(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut out = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    format!("{}.{}", out, fraction)
}
