//! Startup setup of the company indices.
//!
//! Each index is checked, created when missing, configured, and seeded from
//! the fixture when empty. Bulk insert failures are logged and dropped; any
//! other engine error aborts startup.

use crate::client::ElasticsearchClient;
use crate::config::AppConfig;
use crate::error::Result;
use crate::fixture::{load_fixture, load_settings};
use crate::mapping::{auto_index_body, manual_mapping};
use crate::types::{CompanyAuto, CompanyDocument, CompanyManual, IndexKind};

/// What bootstrap did to one index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSetup {
    pub existed: bool,
    pub created: bool,
    /// Documents the engine accepted from the fixture.
    pub seeded: usize,
    /// Documents the engine rejected; their ids are logged.
    pub failed: usize,
}

/// Set up `companymanual`, then `companyauto`.
pub async fn bootstrap_indices(
    client: &ElasticsearchClient,
    config: &AppConfig,
) -> Result<(IndexSetup, IndexSetup)> {
    let manual = setup_index::<CompanyManual>(client, config).await?;
    let auto = setup_index::<CompanyAuto>(client, config).await?;
    Ok((manual, auto))
}

pub async fn setup_index<T: CompanyDocument>(
    client: &ElasticsearchClient,
    config: &AppConfig,
) -> Result<IndexSetup> {
    let index = T::INDEX;
    tracing::info!(index, "Checking if index exists");

    if client.index_exists(index).await? {
        tracing::info!(index, "Index exists");
        let mut setup = seed_index::<T>(client, config).await?;
        setup.existed = true;
        return Ok(setup);
    }

    tracing::info!(index, "Index does not exist, creating");
    let created = create_index(client, config, T::KIND).await?;
    if !created {
        tracing::warn!(index, "Index creation was not acknowledged, skipping seed");
        return Ok(IndexSetup::default());
    }
    tracing::info!(index, "Index created");

    if T::KIND == IndexKind::Manual {
        apply_manual_settings(client, config, index).await?;
        tracing::info!(index, "Creating mapping");
        let ack = client.put_mapping(index, &manual_mapping()).await?;
        tracing::info!(index, acknowledged = ack, "Mapping applied");
    }

    let mut setup = seed_index::<T>(client, config).await?;
    setup.created = true;
    Ok(setup)
}

async fn create_index(
    client: &ElasticsearchClient,
    config: &AppConfig,
    kind: IndexKind,
) -> Result<bool> {
    match kind {
        IndexKind::Manual => client.create_index(kind.index_name(), None).await,
        IndexKind::Auto => {
            let settings = load_settings(&config.settings_path())?;
            let body = auto_index_body(&settings);
            client.create_index(kind.index_name(), Some(&body)).await
        }
    }
}

/// Analysis settings can only change on a closed index.
async fn apply_manual_settings(
    client: &ElasticsearchClient,
    config: &AppConfig,
    index: &str,
) -> Result<()> {
    let settings = load_settings(&config.settings_path())?;

    let closed = client.close_index(index).await?;
    tracing::info!(index, acknowledged = closed, "Closed index");

    let applied = client.put_settings(index, &settings).await?;
    tracing::info!(index, acknowledged = applied, "Settings applied");

    let opened = client.open_index(index).await?;
    tracing::info!(index, acknowledged = opened, "Opened index");
    Ok(())
}

async fn seed_index<T: CompanyDocument>(
    client: &ElasticsearchClient,
    config: &AppConfig,
) -> Result<IndexSetup> {
    let index = T::INDEX;
    let count = client.count(index).await?;

    if count > 0 && !config.force_seed {
        tracing::info!(index, count, "Not seeding, index already holds data");
        return Ok(IndexSetup::default());
    }

    let docs: Vec<T> = load_fixture(&config.fixture_path())?;
    tracing::info!(index, documents = docs.len(), "Seeding index from fixture");

    let resp = client.bulk_create(index, &docs).await?;
    let failed = resp.failed_documents();
    if resp.errors || !failed.is_empty() {
        let ids: Vec<&str> = failed.keys().map(String::as_str).collect();
        tracing::error!(
            index,
            failed = failed.len(),
            ids = ?ids,
            "Bulk insert had failures"
        );
        for (id, reason) in &failed {
            tracing::debug!(index, id = %id, reason = %reason, "Bulk item rejected");
        }
    }

    let seeded = resp.succeeded();
    tracing::info!(index, seeded, "Seeding complete");
    Ok(IndexSetup {
        seeded,
        failed: failed.len(),
        ..IndexSetup::default()
    })
}
