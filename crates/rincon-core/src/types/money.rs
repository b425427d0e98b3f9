//! Currency helpers for Colombian peso amounts.
//!
//! Prices are whole pesos stored as `i64`. Display formatting groups
//! thousands with dots (`COP $4.786.092`), the convention the site uses
//! everywhere amounts are shown to guests.

/// Format a peso amount with dotted thousands groups, e.g. `4.786.092`.
pub fn format_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a peso amount with the `COP $` prefix used in price displays.
pub fn format_cop(amount: i64) -> String {
    format!("COP ${}", format_thousands(amount))
}

/// Round a raw total to the nearest multiple of 1000 pesos.
///
/// Halves round away from zero: 419,500 becomes 420,000.
pub fn round_to_thousand(raw: f64) -> i64 {
    (raw / 1000.0).round() as i64 * 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(4786092), "4.786.092");
        assert_eq!(format_thousands(-12967440), "-12.967.440");
    }

    #[test]
    fn test_format_cop() {
        assert_eq!(format_cop(8103339), "COP $8.103.339");
    }

    #[test]
    fn test_round_to_thousand() {
        assert_eq!(round_to_thousand(419_499.0), 419_000);
        assert_eq!(round_to_thousand(419_500.0), 420_000);
        assert_eq!(round_to_thousand(420_000.0), 420_000);
        assert_eq!(round_to_thousand(0.0), 0);
    }
}
