//! # companysearch
//!
//! Company document schemas, index bootstrap and a small typed client over an
//! Elasticsearch node. Tokenization, fuzzy matching and scoring all happen in
//! the engine; this crate builds requests and maps responses.
//!
//! The REST surface lives in the companion `companysearch-http` crate and the
//! binary in `companysearch-server`.
//!
//! ```rust,no_run
//! use companysearch::{AppConfig, ElasticsearchClient, Query, Repository};
//! use companysearch::types::CompanyManual;
//! use std::sync::Arc;
//!
//! # async fn run() -> companysearch::Result<()> {
//! let config = AppConfig::from_env()?;
//! let client = Arc::new(ElasticsearchClient::from_config(&config));
//! companysearch::bootstrap::bootstrap_indices(&client, &config).await?;
//!
//! let companies = Repository::<CompanyManual>::new(client);
//! let hits = companies.search(Query::fuzzy("name.search", "acme")).await?;
//! println!("{} hits", hits.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Dependencies | Use case |
//! |---------|-------------|----------|
//! | `axum-support` | axum | [`SearchError`] implements `IntoResponse` |
//! | `openapi` | utoipa | OpenAPI schemas for the record types |

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod error;
pub mod fixture;
pub mod mapping;
pub mod query;
pub mod repository;
pub mod types;

pub use client::{BulkResponse, ClusterHealth, ElasticsearchClient, SearchHits};
pub use config::AppConfig;
pub use error::{Result, SearchError};
pub use query::{Page, Pageable, Query, SearchRequest};
pub use repository::Repository;
