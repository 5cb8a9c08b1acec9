//! Display formatting for amounts and rates
//!
//! Indian Rupee conventions: the last three integer digits form one group
//! and the rest are grouped in pairs (12,34,567). These helpers only
//! produce strings; projection values are never rounded in place.

/// Whole-rupee currency string, e.g. `₹35,66,633`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&digits))
}

/// Grouped amount with at most two fraction digits, trailing zeros trimmed
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{}{}", sign, group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Two-decimal percentage, e.g. `8.00%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Magnitude abbreviation: crore, lakh, thousand
pub fn format_indian_large_number(num: f64) -> String {
    if num >= 10_000_000.0 {
        format!("{:.2} Cr", num / 10_000_000.0)
    } else if num >= 100_000.0 {
        format!("{:.2} L", num / 100_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2} K", num / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Insert Indian digit-group separators into a string of ASCII digits
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("7"), "7");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.4), "₹0");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(100_000.0), "₹1,00,000");
        assert_eq!(format_currency(3_566_632.8771416247), "₹35,66,633");
        assert_eq!(format_currency(-2_500.5), "-₹2,501");
        assert_eq!(format_currency(f64::NAN), "₹0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(700_000.0), "7,00,000");
        assert_eq!(format_amount(1_234.5), "1,234.5");
        assert_eq!(format_amount(2_866_632.8771416247), "28,66,632.88");
        assert_eq!(format_amount(-0.001), "0");
        assert_eq!(format_amount(-1_500.25), "-1,500.25");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(8.0), "8.00%");
        assert_eq!(format_percentage(12.346), "12.35%");
    }

    #[test]
    fn test_format_indian_large_number() {
        assert_eq!(format_indian_large_number(35_000_000.0), "3.50 Cr");
        assert_eq!(format_indian_large_number(250_000.0), "2.50 L");
        assert_eq!(format_indian_large_number(1_500.0), "1.50 K");
        assert_eq!(format_indian_large_number(999.0), "999");
        assert_eq!(format_indian_large_number(12.5), "12.5");
    }
}
