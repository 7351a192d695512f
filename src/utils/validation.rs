use crate::utils::error::{Result, ServiceError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ServiceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
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
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("trivia_endpoint", "http://numbersapi.com").is_ok());
        assert!(validate_url("trivia_endpoint", "https://example.com/trivia").is_ok());
        assert!(validate_url("trivia_endpoint", "").is_err());
        assert!(validate_url("trivia_endpoint", "numbersapi.com").is_err());
        assert!(validate_url("trivia_endpoint", "ftp://numbersapi.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("host", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("trivia_timeout_secs", 3u64, 1, 60).is_ok());
        assert!(validate_range("trivia_timeout_secs", 0u64, 1, 60).is_err());
        assert!(validate_range("trivia_timeout_secs", 61u64, 1, 60).is_err());

        let err = validate_range("port", 0u16, 1, u16::MAX).unwrap_err();
        assert!(err.to_string().contains("between 1 and 65535"));
    }
}
