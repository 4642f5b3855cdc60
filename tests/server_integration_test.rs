use anyhow::Result;
use httpmock::prelude::*;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use yelp_proxy::{router, serve, AppState, ProxyHandler, TomlConfig, YelpClient};

/// 透過真實的 TCP 監聽啟動代理，從瀏覽器的角度打完整流程
#[tokio::test]
async fn test_end_to_end_proxy_over_tcp() -> Result<()> {
    let upstream = MockServer::start();
    let categories_mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/v3/categories")
            .query_param("locale", "en_US")
            .header("authorization", "Bearer e2e-key");
        then.status(200).json_body(serde_json::json!({
            "categories": [{"alias": "bakeries"}, {"alias": "coffee"}]
        }));
    });
    let detail_mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/v3/businesses/north-india-restaurant-san-francisco")
            .header("authorization", "Bearer e2e-key");
        then.status(200).json_body(serde_json::json!({
            "id": "4kMBvIEWPxWkWKFN__8SxQ",
            "is_closed": false,
            "rating": 4.0
        }));
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[upstream]
base_url = "{}/v3"
api_key = "e2e-key"
timeout_seconds = 5
"#,
        upstream.base_url()
    ))?;
    let client = YelpClient::new(&config)?;
    let app = router(AppState::new(ProxyHandler::new(Arc::new(client))));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, app, async move {
        let _ = shutdown_rx.await;
    }));

    let http = reqwest::Client::new();

    let categories = http
        .get(format!("http://{}/yelp/categories", address))
        .send()
        .await?;
    assert_eq!(categories.status(), reqwest::StatusCode::OK);
    assert_eq!(
        categories.text().await?,
        r#"{"data":["bakeries","coffee"]}"#
    );

    let detail: serde_json::Value = http
        .get(format!(
            "http://{}/yelp/businesses/details/north-india-restaurant-san-francisco",
            address
        ))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        detail,
        serde_json::json!({"data": {"id": "4kMBvIEWPxWkWKFN__8SxQ", "is_closed": false, "rating": 4.0}})
    );

    let not_found = http
        .get(format!("http://{}/yelp/unknown", address))
        .send()
        .await?;
    assert_eq!(not_found.status(), reqwest::StatusCode::NOT_FOUND);

    categories_mock.assert();
    detail_mock.assert();

    shutdown_tx.send(()).ok();
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_cors_headers_for_browser_callers() -> Result<()> {
    let config = TomlConfig::default();
    let client = YelpClient::new(&config)?;
    let app = router(AppState::new(ProxyHandler::new(Arc::new(client))));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, app, async move {
        let _ = shutdown_rx.await;
    }));

    let response = reqwest::Client::new()
        .get(format!("http://{}/healthz", address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    shutdown_tx.send(()).ok();
    server.await??;
    Ok(())
}
