//! # Currency Formatting
//!
//! USD presentation helpers for quote totals. Presentation only; the
//! calculators keep raw `f64` values and never depend on this module.

/// Format a dollar amount with cents: `1234.5` → `"$1,234.50"`.
pub fn format_currency(amount: f64) -> String {
    format_usd(amount, 2)
}

/// Format a dollar amount to whole dollars: `4875.0` → `"$4,875"`.
///
/// Used where the sheet shows headline numbers (quote totals, stat tiles);
/// line items keep their cents.
pub fn format_currency_whole(amount: f64) -> String {
    format_usd(amount, 0)
}

fn format_usd(amount: f64, decimals: usize) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_formatting() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(142.5), "$142.50");
        assert_eq!(format_currency(3593.75), "$3,593.75");
    }

    #[test]
    fn test_whole_dollar_formatting() {
        assert_eq!(format_currency_whole(4875.0), "$4,875");
        assert_eq!(format_currency_whole(999.0), "$999");
        assert_eq!(format_currency_whole(1_000_000.0), "$1,000,000");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_currency(2.999), "$3.00");
        assert_eq!(format_currency_whole(4875.5), "$4,876");
    }

    #[test]
    fn test_negative_amounts() {
        // Credits and adjustments show a leading sign
        assert_eq!(format_currency(-250.0), "-$250.00");
        assert_eq!(format_currency_whole(-1234.0), "-$1,234");
    }
}
