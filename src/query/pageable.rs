use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{Result, SearchError};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 2000;
/// Engine default for `index.max_result_window`; `from + size` may not exceed it.
pub const MAX_RESULT_WINDOW: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn to_json(&self) -> Value {
        let order = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        json!({ &self.field: { "order": order } })
    }
}

/// Page request taken from `?page=&size=&sort=` query parameters.
///
/// `sort` may repeat and takes the form `field[,field...][,asc|desc]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    pub page: usize,
    pub size: usize,
    pub sort: Vec<SortOrder>,
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl Pageable {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let mut pageable = Pageable::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    pageable.page = value.parse().map_err(|_| {
                        SearchError::InvalidQuery(format!("Invalid page: {}", value))
                    })?;
                }
                "size" => {
                    let size: usize = value.parse().map_err(|_| {
                        SearchError::InvalidQuery(format!("Invalid size: {}", value))
                    })?;
                    pageable.size = match size {
                        0 => DEFAULT_PAGE_SIZE,
                        s => s.min(MAX_PAGE_SIZE),
                    };
                }
                "sort" => pageable.sort.extend(parse_sort(value)),
                _ => {}
            }
        }

        let window = pageable
            .page
            .checked_mul(pageable.size)
            .and_then(|from| from.checked_add(pageable.size));
        if window.map_or(true, |w| w > MAX_RESULT_WINDOW) {
            return Err(SearchError::InvalidQuery(format!(
                "Page {} of size {} is beyond the first {} results",
                pageable.page, pageable.size, MAX_RESULT_WINDOW
            )));
        }

        Ok(pageable)
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

fn parse_sort(value: &str) -> Vec<SortOrder> {
    let mut parts: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let direction = match parts.last().map(|p| p.to_ascii_lowercase()) {
        Some(ref p) if p == "desc" => {
            parts.pop();
            SortDirection::Desc
        }
        Some(ref p) if p == "asc" => {
            parts.pop();
            SortDirection::Asc
        }
        _ => SortDirection::Asc,
    };

    parts
        .into_iter()
        .map(|field| SortOrder {
            field: field.to_string(),
            direction,
        })
        .collect()
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: usize,
    pub size: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &Pageable, total_elements: u64) -> Self {
        let size = pageable.size.max(1) as u64;
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len();
        Self {
            first: pageable.page == 0,
            last: (pageable.page as u64).saturating_add(1) >= total_pages,
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: pageable.page,
            size: pageable.size,
            number_of_elements,
        }
    }
}
