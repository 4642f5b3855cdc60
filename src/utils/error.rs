use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Upstream request failed: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    #[error("Unexpected upstream payload from {endpoint}: {message}")]
    UpstreamPayload { endpoint: String, message: String },

    #[error("Invalid upstream credential: {message}")]
    InvalidCredential { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProxyError {
    pub fn upstream_payload(endpoint: &str, message: impl Into<String>) -> Self {
        Self::UpstreamPayload {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    /// 對外回應的 HTTP 狀態碼。上游故障一律視為 502，不做重試。
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::UpstreamTransport(_) | ProxyError::UpstreamPayload { .. } => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ProxyError::ConfigError { .. }
                | ProxyError::ConfigValidationError { .. }
                | ProxyError::InvalidConfigValueError { .. }
                | ProxyError::InvalidCredential { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProxyError::UpstreamTransport(_) => {
                "Check network connectivity and the configured upstream base URL"
            }
            ProxyError::UpstreamPayload { .. } => {
                "Check API_KEY_YELP; the upstream answers with an error body when it is invalid"
            }
            ProxyError::InvalidCredential { .. } => {
                "The API key must only contain visible ASCII characters"
            }
            ProxyError::IoError(_) => {
                "Check that the address is free and the config file is readable"
            }
            ProxyError::SerializationError(_) => "Report this as a bug",
            ProxyError::ConfigError { .. }
            | ProxyError::ConfigValidationError { .. }
            | ProxyError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart the proxy"
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!("❌ Request failed ({}): {}", status, self);
        // 不提供領域 JSON 錯誤格式，只回傳狀態碼的預設文字
        let body = status.canonical_reason().unwrap_or("Error");
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
