//! `/company/manual` routes, backed by the `companymanual` index.

use axum::{
    extract::{Path, State},
    Json,
};
use companysearch::types::CompanyManual;
use companysearch::{Query, SearchError};
use std::sync::Arc;

use super::{AppState, NAME_SEARCH_FIELD};

/// Get a company by id
#[utoipa::path(
    get,
    path = "/company/manual/{id}",
    tag = "company-manual",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = CompanyManual),
        (status = 404, description = "No company with this id")
    )
)]
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CompanyManual>, SearchError> {
    match state.manual.find_by_id(&id).await? {
        Some(company) => Ok(Json(company)),
        None => Err(SearchError::NotFound(format!("Company {} not found", id))),
    }
}

/// Companies whose address matches any of the terms
#[utoipa::path(
    get,
    path = "/company/manual/search/{term}",
    tag = "company-manual",
    params(("term" = String, Path, description = "Address words")),
    responses((status = 200, description = "Matching companies", body = [CompanyManual]))
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Vec<CompanyManual>>, SearchError> {
    let companies = state.manual.search(Query::matching("address", term)).await?;
    Ok(Json(companies))
}

/// Companies whose name matches the term.
///
/// Names can carry special characters, so `name.search` is analysed with an
/// analyzer that strips them before tokenizing.
#[utoipa::path(
    get,
    path = "/company/manual/autocomplete/search/{term}",
    tag = "company-manual",
    params(("term" = String, Path, description = "Name prefix or words")),
    responses((status = 200, description = "Matching companies", body = [CompanyManual]))
)]
pub async fn autocomplete_search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Vec<CompanyManual>>, SearchError> {
    let companies = state
        .manual
        .search(Query::matching(NAME_SEARCH_FIELD, term))
        .await?;
    Ok(Json(companies))
}

#[utoipa::path(
    get,
    path = "/company/manual/autocomplete/fuzzy/search/{term}",
    tag = "company-manual",
    params(("term" = String, Path, description = "Possibly misspelled name")),
    responses((status = 200, description = "Matching companies", body = [CompanyManual]))
)]
pub async fn autocomplete_fuzzy_search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Vec<CompanyManual>>, SearchError> {
    let companies = state
        .manual
        .search(Query::fuzzy(NAME_SEARCH_FIELD, term))
        .await?;
    Ok(Json(companies))
}
