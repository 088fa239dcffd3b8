use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

use crate::error::{Result, SearchError};

/// Read a JSON array of records from `path`.
pub fn load_fixture<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SearchError::Io(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| SearchError::Json(format!("{}: {}", path.display(), e)))
}

/// Read the static index settings. Must be a JSON object.
pub fn load_settings(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SearchError::Io(format!("{}: {}", path.display(), e)))?;
    let settings: Value = serde_json::from_str(&content)
        .map_err(|e| SearchError::Json(format!("{}: {}", path.display(), e)))?;
    if !settings.is_object() {
        return Err(SearchError::Config(format!(
            "{} must contain a JSON object",
            path.display()
        )));
    }
    Ok(settings)
}
