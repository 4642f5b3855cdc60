use crate::utils::error::{ProxyError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ProxyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProxyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 憑證缺漏不阻止啟動，只提出警告；上游會回應未授權。
pub fn warn_on_missing_api_key(field_name: &str, api_key: &str) -> bool {
    let missing = api_key.trim().is_empty() || api_key.starts_with("${");
    if missing {
        tracing::warn!(
            "⚠️  {} is not set; upstream calls will be rejected as unauthorized",
            field_name
        );
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("upstream_base_url", "https://api.yelp.com/v3").is_ok());
        assert!(validate_url("upstream_base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("upstream_base_url", "").is_err());
        assert!(validate_url("upstream_base_url", "invalid-url").is_err());
        assert!(validate_url("upstream_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request_timeout", 30, 1).is_ok());
        assert!(validate_positive_number("request_timeout", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("host", "   ").is_err());
    }

    #[test]
    fn test_missing_api_key_is_only_a_warning() {
        assert!(warn_on_missing_api_key("API_KEY_YELP", ""));
        assert!(warn_on_missing_api_key("API_KEY_YELP", "${API_KEY_YELP}"));
        assert!(!warn_on_missing_api_key("API_KEY_YELP", "secret"));
    }
}
