use crate::core::proxy::ProxyHandler;
use crate::core::{BusinessSummary, Envelope, SearchQuery};
use crate::utils::error::Result;
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub proxy: ProxyHandler,
}

impl AppState {
    pub fn new(proxy: ProxyHandler) -> Self {
        Self { proxy }
    }
}

pub fn router(state: AppState) -> Router {
    // 呼叫端是其他網域上的瀏覽器
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/yelp/categories", get(list_categories))
        .route("/yelp/businesses/search", get(search_businesses))
        .route("/yelp/businesses/details/:id", get(business_details))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🚀 Proxy listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Proxy server stopped");
    Ok(())
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Envelope<Vec<String>>>> {
    let envelope = state.proxy.list_categories().await?;
    Ok(Json(envelope))
}

async fn search_businesses(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Envelope<Vec<BusinessSummary>>>> {
    let query = SearchQuery::from_pairs(pairs);
    let envelope = state.proxy.search_businesses(&query).await?;
    Ok(Json(envelope))
}

async fn business_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<serde_json::Value>>> {
    let envelope = state.proxy.business_details(&id).await?;
    Ok(Json(envelope))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
