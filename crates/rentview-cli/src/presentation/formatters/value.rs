/// Format an optional ETH amount with its unit, `-` when absent.
///
/// Absent rates and collateral are a normal marketplace state, so they get
/// an explicit empty display value rather than an error.
pub fn format_amount(amount: Option<f64>, unit: &str) -> String {
    match amount {
        Some(value) => format!("{} {}", value, unit),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(0.5), "ETH/HOUR"), "0.5 ETH/HOUR");
        assert_eq!(format_amount(Some(1.0), "ETH"), "1 ETH");
        assert_eq!(format_amount(None, "ETH"), "-");
    }
}
