pub mod proxy;
pub mod upstream;

pub use crate::domain::model::{
    BusinessSummary, CategoriesPayload, Envelope, SearchPayload, SearchQuery,
};
pub use crate::domain::ports::{ConfigProvider, ListingsApi};
pub use crate::utils::error::Result;
