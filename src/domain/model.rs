use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_RADIUS_METERS: &str = "1600";
pub const SEARCH_LIMIT: usize = 10;
pub const CATEGORY_LOCALE: &str = "en_US";

/// 所有回應共用的 `{ "data": ... }` 外層。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// 搜尋參數。保留呼叫端送來的原始字串，不在本地驗證。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    pub categories: Option<String>,
}

impl SearchQuery {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..Default::default()
        }
    }

    /// 由查詢字串的鍵值對建立。同一個鍵出現多次時只取第一個值，未知的鍵忽略。
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "latitude" => &mut query.latitude,
                "longitude" => &mut query.longitude,
                "radius" => &mut query.radius,
                "categories" => &mut query.categories,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    /// 轉成上游查詢參數。
    ///
    /// 只有 `categories` 等於空字串時才省略；其他值一律轉送。
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);

        if let Some(latitude) = &self.latitude {
            params.push(("latitude", latitude.clone()));
        }
        if let Some(longitude) = &self.longitude {
            params.push(("longitude", longitude.clone()));
        }

        let radius = self
            .radius
            .clone()
            .unwrap_or_else(|| DEFAULT_RADIUS_METERS.to_string());
        params.push(("radius", radius));

        if let Some(categories) = &self.categories {
            if !categories.is_empty() {
                params.push(("categories", categories.clone()));
            }
        }

        params.push(("limit", SEARCH_LIMIT.to_string()));
        params
    }
}

/// 搜尋結果中每間商家只保留的欄位。
///
/// 欄位值照上游原樣保留（包含 `null` 與整數座標）；上游沒有的欄位就不輸出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSummary {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
}

// 欄位存在（即使是 null）就是 Some，缺欄位才由 default 給 None
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// 上游回應的局部結構，只描述實際用到的欄位，其餘欄位由 serde 忽略

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub alias: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesPayload {
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPayload {
    pub businesses: Vec<BusinessSummary>,
}
