use crate::core::{BusinessSummary, Envelope, ListingsApi, SearchQuery};
use crate::domain::model::SEARCH_LIMIT;
use crate::utils::error::Result;
use std::sync::Arc;

/// 三個對外操作：每個都是一次上游呼叫、轉換、包成 `{ "data": ... }`。
#[derive(Clone)]
pub struct ProxyHandler {
    api: Arc<dyn ListingsApi>,
}

impl ProxyHandler {
    pub fn new(api: Arc<dyn ListingsApi>) -> Self {
        Self { api }
    }

    pub async fn list_categories(&self) -> Result<Envelope<Vec<String>>> {
        let payload = self.api.fetch_categories().await?;
        let aliases: Vec<String> = payload
            .categories
            .into_iter()
            .map(|category| category.alias)
            .collect();

        tracing::debug!("Listed {} categories", aliases.len());
        Ok(Envelope::new(aliases))
    }

    pub async fn search_businesses(
        &self,
        query: &SearchQuery,
    ) -> Result<Envelope<Vec<BusinessSummary>>> {
        tracing::debug!(
            "Searching businesses near {:?},{:?} (radius: {:?}, categories: {:?})",
            query.latitude,
            query.longitude,
            query.radius,
            query.categories
        );

        let payload = self.api.search_businesses(query).await?;
        let summaries: Vec<BusinessSummary> =
            payload.businesses.into_iter().take(SEARCH_LIMIT).collect();

        tracing::debug!("Found {} businesses", summaries.len());
        Ok(Envelope::new(summaries))
    }

    /// 上游內容原封不動包進 `data`，包含上游的錯誤內容。
    pub async fn business_details(&self, id: &str) -> Result<Envelope<serde_json::Value>> {
        let body = self.api.fetch_business(id).await?;
        Ok(Envelope::new(body))
    }
}
