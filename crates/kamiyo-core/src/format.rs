//! Display formatting shared by the web pages and the CLI

/// Format large numbers (K, M, B)
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format a dollar amount, compacting millions and billions
pub fn format_usd(amount: f64) -> String {
    let abs = amount.abs();
    if abs >= 1_000_000_000.0 {
        format!("${:.1}B", amount / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format a USDC token amount
pub fn format_usdc(amount: f64) -> String {
    format!("{:.2} USDC", amount)
}

pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_300_000), "2.3M");
        assert_eq!(format_number(4_000_000_000), "4.0B");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12.5), "$12.50");
        assert_eq!(format_usd(2_460_000.0), "$2.5M");
        assert_eq!(format_usd(1_200_000_000.0), "$1.2B");
    }

    #[test]
    fn test_format_usdc_and_percent() {
        assert_eq!(format_usdc(3.0), "3.00 USDC");
        assert_eq!(format_percent(71.26), "71.3%");
    }
}
