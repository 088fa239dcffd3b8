use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// The two company indices. Each one is bootstrapped differently: `Auto`
/// derives its mapping from the record layout and is created with settings
/// in one call, `Manual` is created bare and configured afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Manual,
    Auto,
}

impl IndexKind {
    pub fn index_name(&self) -> &'static str {
        match self {
            IndexKind::Manual => CompanyManual::INDEX,
            IndexKind::Auto => CompanyAuto::INDEX,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.index_name())
    }
}

/// A record type stored in one of the company indices.
pub trait CompanyDocument: Serialize + DeserializeOwned + Send + Sync + 'static {
    const INDEX: &'static str;
    const KIND: IndexKind;

    /// Document id; also used as the engine `_id`.
    fn id(&self) -> &str;
}

/// Reference to the owning party. Stored as a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct Owner(pub String);

impl Owner {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Inactive,
    Dissolved,
}

/// Company whose index mapping is derived from this layout at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompanyAuto {
    pub id: String,
    pub name: String,
    pub telephone: String,
    pub address: String,
    #[serde(with = "mdy_date")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "04/21/2009"))]
    pub date_of_incorporation: NaiveDate,
    pub services: Vec<String>,
    pub owner: Owner,
    pub status: Status,
}

impl CompanyDocument for CompanyAuto {
    const INDEX: &'static str = "companyauto";
    const KIND: IndexKind = IndexKind::Auto;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Company whose index mapping is applied explicitly after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompanyManual {
    pub id: String,
    pub name: String,
    pub telephone: String,
    pub address: String,
    #[serde(with = "mdy_date")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "04/21/2009"))]
    pub date_of_incorporation: NaiveDate,
    pub services: Vec<String>,
    pub owner: Owner,
    pub status: Status,
}

impl CompanyDocument for CompanyManual {
    const INDEX: &'static str = "companymanual";
    const KIND: IndexKind = IndexKind::Manual;

    fn id(&self) -> &str {
        &self.id
    }
}

/// `MM/dd/yyyy` calendar dates, as used by the fixture and the REST surface.
pub mod mdy_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
