//! Currency formatting for scenario amounts.

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

pub const CURRENCY_PREFIX: &str = "A$";

/// Full amount with thousands separators and two decimals, e.g. `A$1,668,147,026.75`.
pub fn format_currency(amount: f64) -> String {
    // Round first so a cents carry lands in the integer part before grouping.
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY_PREFIX, group_thousands(whole), cents)
}

/// Compact axis label: `$1.67B`, `$56.69M`, or the full currency string below a million.
pub fn format_abbreviated(amount: f64) -> String {
    if amount >= BILLION {
        format!("${:.2}B", amount / BILLION)
    } else if amount >= MILLION {
        format!("${:.2}M", amount / MILLION)
    } else {
        format_currency(amount)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
