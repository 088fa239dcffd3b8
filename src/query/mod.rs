//! Builders for the handful of query shapes the REST surface forwards to the
//! engine. Each variant serialises straight into the engine's query DSL.

pub mod pageable;

pub use pageable::{Page, Pageable, SortDirection, SortOrder};

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Or,
    And,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Exact keyword lookup.
    Term { field: String, value: String },
    /// Analysed full-text match.
    Match {
        field: String,
        query: String,
        operator: Operator,
    },
    /// Edit-distance match; the engine picks the fuzziness.
    Fuzzy { field: String, value: String },
    /// Substring match, expressed as a `*value*` wildcard query string.
    Contains { field: String, value: String },
}

impl Query {
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matching(field: impl Into<String>, query: impl Into<String>) -> Self {
        Query::Match {
            field: field.into(),
            query: query.into(),
            operator: Operator::Or,
        }
    }

    pub fn matching_all(field: impl Into<String>, query: impl Into<String>) -> Self {
        Query::Match {
            field: field.into(),
            query: query.into(),
            operator: Operator::And,
        }
    }

    pub fn fuzzy(field: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Fuzzy {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Query::Term { field, value } => json!({ "term": { field: value } }),
            Query::Match {
                field,
                query,
                operator,
            } => json!({
                "match": { field: { "query": query, "operator": operator } }
            }),
            Query::Fuzzy { field, value } => json!({ "fuzzy": { field: { "value": value } } }),
            Query::Contains { field, value } => json!({
                "query_string": {
                    "query": format!("*{}*", escape_query_string(value)),
                    "fields": [field],
                    "analyze_wildcard": true
                }
            }),
        }
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Escape query_string syntax so user input is matched literally.
/// `<` and `>` cannot be escaped and are dropped.
pub fn escape_query_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' | '>' => {}
            '+' | '-' | '=' | '&' | '|' | '!' | '(' | ')' | '{' | '}' | '[' | ']' | '^' | '"'
            | '~' | '*' | '?' | ':' | '\\' | '/' | ' ' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Body of a `_search` call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<Value>,
    /// Ask for an exact hit count instead of the engine's 10k lower bound.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub track_total_hits: bool,
}

impl SearchRequest {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            from: None,
            size: None,
            sort: Vec::new(),
            track_total_hits: false,
        }
    }

    pub fn paged(query: Query, pageable: &Pageable) -> Self {
        Self {
            query,
            from: Some(pageable.offset()),
            size: Some(pageable.size),
            sort: pageable.sort.iter().map(SortOrder::to_json).collect(),
            track_total_hits: true,
        }
    }
}
