use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use companysearch::{AppConfig, ElasticsearchClient};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

/// Config pointing at a mock engine and the bundled static files.
#[allow(dead_code)]
pub fn config_for(engine: &MockServer) -> AppConfig {
    AppConfig {
        es_url: engine.uri(),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        ..AppConfig::default()
    }
}

#[allow(dead_code)]
pub fn client_for(engine: &MockServer) -> Arc<ElasticsearchClient> {
    Arc::new(ElasticsearchClient::new(engine.uri()))
}

/// Router wired to a mock engine, without middleware layers.
#[allow(dead_code)]
pub fn app_for(engine: &MockServer) -> Router {
    let state = Arc::new(companysearch_http::handlers::AppState::new(client_for(engine)));
    companysearch_http::build_router(state)
}

/// In-process GET via tower::ServiceExt, no TCP.
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[allow(dead_code)]
pub fn company(id: &str, name: &str, owner: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "telephone": format!("555-01{:0>2}", id),
        "address": "55 Harbour Road, Bristol",
        "dateOfIncorporation": "07/14/1979",
        "services": ["logistics"],
        "owner": owner,
        "status": "ACTIVE"
    })
}

/// `_search` response body wrapping `sources` as hits.
#[allow(dead_code)]
pub fn search_response(index: &str, total: u64, sources: Vec<Value>) -> Value {
    let hits: Vec<Value> = sources
        .into_iter()
        .map(|source| {
            json!({
                "_index": index,
                "_id": source["id"].clone(),
                "_score": 1.0,
                "_source": source
            })
        })
        .collect();
    json!({
        "took": 2,
        "timed_out": false,
        "hits": {
            "total": { "value": total, "relation": "eq" },
            "max_score": 1.0,
            "hits": hits
        }
    })
}

#[allow(dead_code)]
pub fn acknowledged() -> Value {
    json!({ "acknowledged": true })
}
