//! End-to-end coverage of `TmdbProvider` against a local stand-in for the
//! TMDB API.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use marquee_config::TmdbConfig;
use marquee_contracts::{LoadErrorKind, MediaProvider, ProviderError, TrendingQuery};
use marquee_core::TmdbProvider;
use marquee_model::MediaId;
use serde_json::json;
use url::Url;

const GOOD_KEY: &str = "test-key";

async fn trending(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("api_key").map(String::as_str) != Some(GOOD_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key.",
                "success": false
            })),
        )
            .into_response();
    }

    let language = params.get("language").cloned().unwrap_or_default();
    Json(json!({
        "page": 1,
        "results": [
            {"id": 693134, "title": "Dune: Part Two", "overview": language,
             "backdrop_path": "/xOMo8BRK7PfcJv9JCnx7s5hj0PX.jpg", "popularity": 3437.8},
            {"id": 11, "title": "Star Wars", "overview": "A long time ago.",
             "backdrop_path": null, "popularity": 21.4}
        ],
        "total_pages": 500,
        "total_results": 10000
    }))
    .into_response()
}

async fn broken() -> Response {
    (StatusCode::OK, "{\"page\": 1, \"results\": \"nope\"}").into_response()
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

fn config_for(addr: SocketAddr, key: Option<&str>) -> TmdbConfig {
    let mut config = TmdbConfig::default();
    config.base_url = Url::parse(&format!("http://{addr}/3")).expect("url");
    match key {
        Some(key) => config.with_api_key(key),
        None => config,
    }
}

#[tokio::test]
async fn fetches_and_decodes_trending_movies() {
    let addr = spawn(Router::new().route("/3/trending/movie/week", get(trending))).await;
    let mut config = config_for(addr, Some(GOOD_KEY));
    config.language = Some("en-US".to_string());
    let provider = TmdbProvider::new(config).expect("client builds");

    let items = provider
        .fetch_trending(TrendingQuery::default())
        .await
        .expect("trending list");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, MediaId(693134));
    assert_eq!(items[0].overview, "en-US");
    assert!(items[0].is_popular());
    assert_eq!(
        provider.backdrop_url(&items[0]).as_deref(),
        Some("https://image.tmdb.org/t/p/w1280/xOMo8BRK7PfcJv9JCnx7s5hj0PX.jpg")
    );
    assert_eq!(provider.backdrop_url(&items[1]), None);
}

#[tokio::test]
async fn rejected_key_is_a_load_failure() {
    let addr = spawn(Router::new().route("/3/trending/movie/week", get(trending))).await;
    let provider = TmdbProvider::new(config_for(addr, Some("wrong"))).expect("client builds");

    let err = provider
        .fetch_trending(TrendingQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Status { status: 401 }));
    assert_eq!(err.kind(), LoadErrorKind::LoadFailure);
}

#[tokio::test]
async fn wrong_shape_is_a_schema_error() {
    let addr = spawn(Router::new().route("/3/trending/movie/week", get(broken))).await;
    let provider = TmdbProvider::new(config_for(addr, Some(GOOD_KEY))).expect("client builds");

    let err = provider
        .fetch_trending(TrendingQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Schema(_)));
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let addr = spawn(Router::new()).await;
    let provider = TmdbProvider::new(config_for(addr, Some(GOOD_KEY))).expect("client builds");

    let err = provider
        .fetch_trending(TrendingQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Status { status: 404 }));
}

#[tokio::test]
async fn missing_key_is_a_configuration_error() {
    let addr = spawn(Router::new().route("/3/trending/movie/week", get(trending))).await;
    let provider = TmdbProvider::new(config_for(addr, None)).expect("client builds");

    let err = provider
        .fetch_trending(TrendingQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), LoadErrorKind::ConfigurationMissing);
}
