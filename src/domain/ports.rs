use crate::domain::model::{CategoriesPayload, SearchPayload, SearchQuery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn bind_host(&self) -> &str;
    fn port(&self) -> u16;
    fn upstream_base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host(), self.port())
    }
}

/// 上游商家目錄 API。每個方法對應一次上游呼叫。
#[async_trait]
pub trait ListingsApi: Send + Sync {
    async fn fetch_categories(&self) -> Result<CategoriesPayload>;
    async fn search_businesses(&self, query: &SearchQuery) -> Result<SearchPayload>;
    async fn fetch_business(&self, id: &str) -> Result<serde_json::Value>;
}
