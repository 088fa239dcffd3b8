use companysearch::types::{CompanyAuto, CompanyManual};
use companysearch::{ElasticsearchClient, Repository};
use std::sync::Arc;

pub mod company_auto;
pub mod company_manual;
pub mod health;

pub struct AppState {
    pub client: Arc<ElasticsearchClient>,
    pub auto: Repository<CompanyAuto>,
    pub manual: Repository<CompanyManual>,
}

impl AppState {
    pub fn new(client: Arc<ElasticsearchClient>) -> Self {
        Self {
            auto: Repository::new(Arc::clone(&client)),
            manual: Repository::new(Arc::clone(&client)),
            client,
        }
    }
}

/// Name sub-field analysed for autocomplete.
pub(crate) const NAME_SEARCH_FIELD: &str = "name.search";

pub use health::health;
