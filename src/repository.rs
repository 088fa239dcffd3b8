use std::marker::PhantomData;
use std::sync::Arc;

use crate::client::ElasticsearchClient;
use crate::error::Result;
use crate::query::{Page, Pageable, Query, SearchRequest};
use crate::types::CompanyDocument;

/// Typed access to the index backing `T`.
pub struct Repository<T> {
    client: Arc<ElasticsearchClient>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _marker: PhantomData,
        }
    }
}

impl<T: CompanyDocument> Repository<T> {
    pub fn new(client: Arc<ElasticsearchClient>) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }

    pub fn index(&self) -> &'static str {
        T::INDEX
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        self.client.get(T::INDEX, id).await
    }

    /// First document whose keyword `field` equals `value`.
    pub async fn find_one_by(&self, field: &str, value: &str) -> Result<Option<T>> {
        let mut request = SearchRequest::new(Query::term(field, value));
        request.size = Some(1);
        let hits = self.client.search::<T>(T::INDEX, &request).await?;
        Ok(hits.into_sources().into_iter().next())
    }

    /// All documents whose keyword `field` equals `value`, one page at a time.
    pub async fn find_all_by(
        &self,
        field: &str,
        value: &str,
        pageable: &Pageable,
    ) -> Result<Page<T>> {
        let request = SearchRequest::paged(Query::term(field, value), pageable);
        let hits = self.client.search::<T>(T::INDEX, &request).await?;
        let total = hits.total;
        Ok(Page::new(hits.into_sources(), pageable, total))
    }

    pub async fn search(&self, query: Query) -> Result<Vec<T>> {
        let hits = self
            .client
            .search::<T>(T::INDEX, &SearchRequest::new(query))
            .await?;
        tracing::debug!(index = T::INDEX, total = hits.total, "search complete");
        Ok(hits.into_sources())
    }
}
