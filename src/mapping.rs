//! Index mappings and create-index bodies for the company indices.
//!
//! `companyauto` gets its mapping at creation time, derived from the
//! [`CompanyAuto`](crate::types::CompanyAuto) layout. `companymanual` is created
//! bare and receives [`manual_mapping`] after its analysis settings are applied.

use serde_json::{json, Value};

pub const AUTOCOMPLETE_INDEX_ANALYZER: &str = "autocomplete_index";
pub const AUTOCOMPLETE_SEARCH_ANALYZER: &str = "autocomplete_search";

/// Date formats accepted for `dateOfIncorporation`. The first one matches the
/// wire format of the records.
pub const DATE_FORMAT: &str = "MM/dd/yyyy||date_optional_time||epoch_millis";

const AUTO_SHARDS: u32 = 1;
const AUTO_REPLICAS: u32 = 1;

/// `name` is a keyword; `name.search` is analysed for autocomplete.
fn name_property() -> Value {
    json!({
        "type": "keyword",
        "fields": {
            "search": {
                "type": "text",
                "analyzer": AUTOCOMPLETE_INDEX_ANALYZER,
                "search_analyzer": AUTOCOMPLETE_SEARCH_ANALYZER
            }
        }
    })
}

/// Mapping implied by the `CompanyAuto` record.
pub fn auto_mapping() -> Value {
    json!({
        "dynamic": true,
        "properties": {
            "id": { "type": "keyword" },
            "name": name_property(),
            "telephone": { "type": "keyword" },
            "address": {
                "type": "text",
                "fields": {
                    "kw": { "type": "keyword" }
                }
            },
            "dateOfIncorporation": { "type": "date", "format": DATE_FORMAT },
            "services": { "type": "keyword" },
            "owner": { "type": "keyword" },
            "status": { "type": "keyword" }
        }
    })
}

/// Mapping put on `companymanual` once its settings are in place.
/// `status` is left to dynamic mapping.
pub fn manual_mapping() -> Value {
    json!({
        "properties": {
            "id": { "type": "keyword" },
            "name": name_property(),
            "telephone": { "type": "keyword" },
            "address": { "type": "text" },
            "dateOfIncorporation": { "type": "date", "format": DATE_FORMAT },
            "services": { "type": "keyword" },
            "owner": { "type": "keyword" }
        }
    })
}

/// Create-index body for `companyauto`: static analysis settings plus shard
/// counts, and the derived mapping.
pub fn auto_index_body(analysis_settings: &Value) -> Value {
    let mut settings = match analysis_settings {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    settings.insert("number_of_shards".to_string(), json!(AUTO_SHARDS));
    settings.insert("number_of_replicas".to_string(), json!(AUTO_REPLICAS));

    json!({
        "settings": Value::Object(settings),
        "mappings": auto_mapping()
    })
}
