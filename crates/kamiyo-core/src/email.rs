//! Email address validation for account-keyed routes

use crate::error::{CoreError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Trim and lowercase `email`, rejecting anything that is not an address
pub fn normalize_email(email: &str) -> Result<String> {
    let trimmed = email.trim();
    if trimmed.len() > 254 || !EMAIL_RE.is_match(trimmed) {
        return Err(CoreError::InvalidEmail {
            email: email.to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(
            normalize_email("  Dev@Kamiyo.AI ").unwrap(),
            "dev@kamiyo.ai"
        );
        assert_eq!(
            normalize_email("a+tag@sub.kamiyo.ai").unwrap(),
            "a+tag@sub.kamiyo.ai"
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(normalize_email("").is_err());
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("a@b").is_err());
        assert!(normalize_email("a b@kamiyo.ai").is_err());
    }
}
