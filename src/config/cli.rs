use crate::core::upstream::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url,
    warn_on_missing_api_key, Validate,
};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(name = "yelp-proxy")]
#[command(about = "A small proxy in front of the Yelp Fusion API")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub upstream_base_url: String,

    #[arg(
        long,
        env = "API_KEY_YELP",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub api_key: String,

    #[arg(long, help = "Upstream request timeout in seconds (no timeout when omitted)")]
    pub request_timeout: Option<u64>,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

// api_key 不輸出到日誌
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("upstream_base_url", &self.upstream_base_url)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn bind_host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_url("upstream_base_url", &self.upstream_base_url)?;
        if let Some(timeout) = self.request_timeout {
            validate_positive_number("request_timeout", timeout, 1)?;
        }
        warn_on_missing_api_key("API_KEY_YELP", &self.api_key);
        Ok(())
    }
}
