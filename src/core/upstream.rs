use crate::core::{CategoriesPayload, ConfigProvider, ListingsApi, SearchPayload, SearchQuery};
use crate::domain::model::CATEGORY_LOCALE;
use crate::utils::error::{ProxyError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3";

const USER_AGENT: &str = concat!("yelp-proxy/", env!("CARGO_PKG_VERSION"));

/// Yelp Fusion API 用戶端。憑證在建構時注入，之後不會變動。
pub struct YelpClient {
    client: Client,
    base_url: Url,
    authorization: HeaderValue,
}

impl YelpClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ProxyError::ConfigError {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        let base_url =
            Url::parse(config.upstream_base_url()).map_err(|e| ProxyError::InvalidConfigValueError {
                field: "upstream_base_url".to_string(),
                value: config.upstream_base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ProxyError::InvalidConfigValueError {
                field: "upstream_base_url".to_string(),
                value: config.upstream_base_url().to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|e| ProxyError::InvalidCredential {
                message: e.to_string(),
            })?;
        authorization.set_sensitive(true);

        Ok(Self {
            client,
            base_url,
            authorization,
        })
    }

    /// 在 base URL 之後附加路徑段落，每段都會做百分比編碼。
    fn build_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        let endpoint = url.path().to_string();
        tracing::debug!("Making upstream request to: {}", endpoint);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.authorization.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);
        if !status.is_success() {
            // 非 2xx 仍照常解析內容，由呼叫端決定結構是否可用
            tracing::warn!("⚠️  Upstream {} answered {}", endpoint, status);
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ProxyError::upstream_payload(&endpoint, e.to_string()))
    }
}

#[async_trait]
impl ListingsApi for YelpClient {
    async fn fetch_categories(&self) -> Result<CategoriesPayload> {
        let url = self.build_url(&["categories"]);
        self.get_json(url, &[("locale", CATEGORY_LOCALE.to_string())])
            .await
    }

    async fn search_businesses(&self, query: &SearchQuery) -> Result<SearchPayload> {
        let url = self.build_url(&["businesses", "search"]);
        self.get_json(url, &query.upstream_params()).await
    }

    async fn fetch_business(&self, id: &str) -> Result<serde_json::Value> {
        let url = self.build_url(&["businesses", id]);
        self.get_json(url, &[]).await
    }
}
