//! Price formatting
//!
//! Prices are whole rubles (`i64`); the catalog has no fractional
//! amounts.

/// Format an amount with the venue currency sign.
///
/// # Examples
///
/// ```
/// use smoky_loft_lib::utils::price::format_price;
///
/// assert_eq!(format_price(1200, "₽"), "1200 ₽");
/// assert_eq!(format_price(0, "₽"), "0 ₽");
/// ```
pub fn format_price(amount: i64, currency: &str) -> String {
    format!("{} {}", amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1200, "₽"), "1200 ₽");
        assert_eq!(format_price(2900, "₽"), "2900 ₽");
        assert_eq!(format_price(500, "€"), "500 €");
    }
}
