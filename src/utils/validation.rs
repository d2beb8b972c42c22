use crate::utils::error::{MaritimeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MaritimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MaritimeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MaritimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| MaritimeError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MaritimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MaritimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Trims user input, rejecting blank text with `message`.
pub fn require_text(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MaritimeError::ValidationError {
            message: message.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("openweather.base_url", "https://example.com").is_ok());
        assert!(validate_url("openweather.base_url", "http://example.com").is_ok());
        assert!(validate_url("openweather.base_url", "").is_err());
        assert!(validate_url("openweather.base_url", "invalid-url").is_err());
        assert!(validate_url("openweather.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("voyage.lookup_timeout_seconds", 10, 1, 300).is_ok());
        assert!(validate_range("voyage.lookup_timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("voyage.lookup_timeout_seconds", 301, 1, 300).is_err());
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  Rotterdam ", "empty").unwrap(), "Rotterdam");
        let err = require_text("   ", "Please enter a city name.").unwrap_err();
        assert!(matches!(err, MaritimeError::ValidationError { .. }));
        assert_eq!(err.user_friendly_message(), "Please enter a city name.");
    }

    #[test]
    fn test_validate_required_field() {
        let key: Option<String> = None;
        let err = validate_required_field("huggingface.api_key", &key).unwrap_err();
        assert!(matches!(err, MaritimeError::MissingConfigError { .. }));
    }
}
