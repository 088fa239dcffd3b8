use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{Result, SearchError};
use crate::query::SearchRequest;
use crate::types::CompanyDocument;

/// REST client for the Elasticsearch node.
///
/// Wraps one pooled `reqwest::Client`; cheap to share behind an `Arc`.
pub struct ElasticsearchClient {
    base_url: String,
    http_client: reqwest::Client,
    credentials: Option<(String, Option<String>)>,
}

#[derive(Debug, Deserialize)]
struct Acknowledged {
    #[serde(default)]
    acknowledged: bool,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct GetResponse<T> {
    found: Option<bool>,
    #[serde(rename = "_source")]
    source: Option<T>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse<T> {
    hits: HitsMetadata<T>,
}

#[derive(Debug, Deserialize)]
struct HitsMetadata<T> {
    total: Option<TotalHits>,
    #[serde(default = "Vec::new")]
    hits: Vec<Hit<T>>,
}

#[derive(Debug, Deserialize)]
struct TotalHits {
    value: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: Option<T>,
}

/// Hits of one `_search` call.
#[derive(Debug, Clone)]
pub struct SearchHits<T> {
    pub total: u64,
    pub hits: Vec<Hit<T>>,
}

impl<T> SearchHits<T> {
    /// Document bodies of the hits, skipping any returned without `_source`.
    pub fn into_sources(self) -> Vec<T> {
        self.hits.into_iter().filter_map(|h| h.source).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<HashMap<String, BulkItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkItem {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub status: u16,
    pub error: Option<Value>,
}

impl BulkResponse {
    /// Ids of the documents the engine rejected, with the reason it gave.
    pub fn failed_documents(&self) -> HashMap<String, String> {
        self.items
            .iter()
            .flat_map(|item| item.values())
            .filter_map(|item| {
                let error = item.error.as_ref()?;
                let reason = error
                    .get("reason")
                    .and_then(|r| r.as_str())
                    .map(String::from)
                    .unwrap_or_else(|| error.to_string());
                Some((item.id.clone().unwrap_or_default(), reason))
            })
            .collect()
    }

    pub fn succeeded(&self) -> usize {
        self.items
            .iter()
            .flat_map(|item| item.values())
            .filter(|item| item.error.is_none())
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterHealth {
    pub cluster_name: String,
    pub status: String,
    #[serde(default)]
    pub number_of_nodes: u64,
}

#[derive(Serialize)]
struct BulkAction<'a> {
    create: BulkTarget<'a>,
}

#[derive(Serialize)]
struct BulkTarget<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_id")]
    id: &'a str,
}

impl ElasticsearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    ?timeout,
                    "engine client build failed, falling back to defaults without timeout"
                );
                reqwest::Client::new()
            }
        };

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
            credentials: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut client = Self::with_timeout(&config.es_url, config.es_timeout);
        if let Some(username) = &config.es_username {
            client.credentials = Some((username.clone(), config.es_password.clone()));
        }
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "engine request");
        let req = self.http_client.request(method, &url);
        match &self.credentials {
            Some((user, pass)) => req.basic_auth(user, pass.as_ref()),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Engine {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn acknowledged(&self, req: RequestBuilder) -> Result<bool> {
        let ack: Acknowledged = self.send(req).await?.json().await?;
        Ok(ack.acknowledged)
    }

    pub async fn index_exists(&self, index: &str) -> Result<bool> {
        let resp = self
            .request(Method::HEAD, &format!("/{}", urlencoding::encode(index)))
            .send()
            .await?;
        match resp.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(SearchError::Engine {
                status: status.as_u16(),
                body: String::new(),
            }),
        }
    }

    /// Create an index, optionally with a settings/mappings body.
    pub async fn create_index(&self, index: &str, body: Option<&Value>) -> Result<bool> {
        let mut req = self.request(Method::PUT, &format!("/{}", urlencoding::encode(index)));
        if let Some(body) = body {
            req = req.json(body);
        }
        self.acknowledged(req).await
    }

    pub async fn close_index(&self, index: &str) -> Result<bool> {
        let path = format!("/{}/_close", urlencoding::encode(index));
        self.acknowledged(self.request(Method::POST, &path)).await
    }

    pub async fn open_index(&self, index: &str) -> Result<bool> {
        let path = format!("/{}/_open", urlencoding::encode(index));
        self.acknowledged(self.request(Method::POST, &path)).await
    }

    /// Apply index settings. Analysis settings require the index to be closed.
    pub async fn put_settings(&self, index: &str, settings: &Value) -> Result<bool> {
        let path = format!("/{}/_settings", urlencoding::encode(index));
        self.acknowledged(self.request(Method::PUT, &path).json(settings))
            .await
    }

    pub async fn put_mapping(&self, index: &str, mapping: &Value) -> Result<bool> {
        let path = format!("/{}/_mapping", urlencoding::encode(index));
        self.acknowledged(self.request(Method::PUT, &path).json(mapping))
            .await
    }

    pub async fn count(&self, index: &str) -> Result<u64> {
        let path = format!("/{}/_count", urlencoding::encode(index));
        let resp: CountResponse = self.send(self.request(Method::GET, &path)).await?.json().await?;
        Ok(resp.count)
    }

    /// Fetch one document by id. A missing document is `Ok(None)`; a missing
    /// index is an engine error.
    pub async fn get<T: DeserializeOwned>(&self, index: &str, id: &str) -> Result<Option<T>> {
        let path = format!(
            "/{}/_doc/{}",
            urlencoding::encode(index),
            urlencoding::encode(id)
        );
        let resp = self.request(Method::GET, &path).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            let body = resp.text().await.unwrap_or_default();
            return match serde_json::from_str::<GetResponse<Value>>(&body) {
                Ok(r) if r.found == Some(false) => Ok(None),
                _ => Err(SearchError::Engine {
                    status: status.as_u16(),
                    body,
                }),
            };
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Engine {
                status: status.as_u16(),
                body,
            });
        }

        let doc: GetResponse<T> = resp.json().await?;
        Ok(if doc.found.unwrap_or(false) {
            doc.source
        } else {
            None
        })
    }

    pub async fn search<T: DeserializeOwned>(
        &self,
        index: &str,
        request: &SearchRequest,
    ) -> Result<SearchHits<T>> {
        let path = format!("/{}/_search", urlencoding::encode(index));
        let resp: SearchResponse<T> = self
            .send(self.request(Method::POST, &path).json(request))
            .await?
            .json()
            .await?;

        let hits = resp.hits.hits;
        let total = resp
            .hits
            .total
            .map(|t| t.value)
            .unwrap_or(hits.len() as u64);
        Ok(SearchHits { total, hits })
    }

    /// Bulk-insert documents with op type `create`, keyed by their own id.
    /// Waits for a refresh so the documents are searchable on return.
    pub async fn bulk_create<T: CompanyDocument>(
        &self,
        index: &str,
        docs: &[T],
    ) -> Result<BulkResponse> {
        if docs.is_empty() {
            return Ok(BulkResponse::default());
        }

        let mut body = String::new();
        for doc in docs {
            let action = BulkAction {
                create: BulkTarget { index, id: doc.id() },
            };
            body.push_str(&serde_json::to_string(&action)?);
            body.push('\n');
            body.push_str(&serde_json::to_string(doc)?);
            body.push('\n');
        }

        let path = format!("/{}/_bulk?refresh=wait_for", urlencoding::encode(index));
        let req = self
            .request(Method::POST, &path)
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body);
        let resp: BulkResponse = self.send(req).await?.json().await?;
        Ok(resp)
    }

    pub async fn cluster_health(&self) -> Result<ClusterHealth> {
        let health = self
            .send(self.request(Method::GET, "/_cluster/health"))
            .await?
            .json()
            .await?;
        Ok(health)
    }
}
