//! `/company/auto` routes, backed by the `companyauto` index.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use companysearch::types::CompanyAuto;
use companysearch::{Page, Pageable, Query as EsQuery, SearchError};
use std::sync::Arc;

use super::{AppState, NAME_SEARCH_FIELD};

/// Get a company by id
#[utoipa::path(
    get,
    path = "/company/auto/{id}",
    tag = "company-auto",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = CompanyAuto),
        (status = 404, description = "No company with this id")
    )
)]
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CompanyAuto>, SearchError> {
    state
        .auto
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| SearchError::NotFound(format!("Company {} not found", id)))
}

/// Companies whose address contains the term
#[utoipa::path(
    get,
    path = "/company/auto/search/{term}",
    tag = "company-auto",
    params(("term" = String, Path, description = "Address fragment")),
    responses((status = 200, description = "Matching companies", body = [CompanyAuto]))
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Vec<CompanyAuto>>, SearchError> {
    let companies = state.auto.search(EsQuery::contains("address", term)).await?;
    Ok(Json(companies))
}

/// Companies whose name matches every term
#[utoipa::path(
    get,
    path = "/company/auto/autocomplete/search/{term}",
    tag = "company-auto",
    params(("term" = String, Path, description = "Name prefix or words")),
    responses((status = 200, description = "Matching companies", body = [CompanyAuto]))
)]
pub async fn autocomplete_search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Vec<CompanyAuto>>, SearchError> {
    let companies = state
        .auto
        .search(EsQuery::matching_all(NAME_SEARCH_FIELD, term))
        .await?;
    Ok(Json(companies))
}

/// Companies whose name approximately matches the term
#[utoipa::path(
    get,
    path = "/company/auto/autocomplete/fuzzy/search/{term}",
    tag = "company-auto",
    params(("term" = String, Path, description = "Possibly misspelled name")),
    responses((status = 200, description = "Matching companies", body = [CompanyAuto]))
)]
pub async fn autocomplete_fuzzy_search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Vec<CompanyAuto>>, SearchError> {
    let companies = state
        .auto
        .search(EsQuery::fuzzy(NAME_SEARCH_FIELD, term))
        .await?;
    Ok(Json(companies))
}

/// Company with this exact telephone number
#[utoipa::path(
    get,
    path = "/company/auto/search/telephone/{term}",
    tag = "company-auto",
    params(("term" = String, Path, description = "Telephone number")),
    responses(
        (status = 200, description = "Company found", body = CompanyAuto),
        (status = 404, description = "No company with this telephone")
    )
)]
pub async fn telephone_search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<CompanyAuto>, SearchError> {
    state
        .auto
        .find_one_by("telephone", &term)
        .await?
        .map(Json)
        .ok_or_else(|| SearchError::NotFound(format!("No company with telephone {}", term)))
}

/// Page through the companies of one owner
#[utoipa::path(
    get,
    path = "/company/auto/search/owner/{term}",
    tag = "company-auto",
    params(
        ("term" = String, Path, description = "Owner reference"),
        ("page" = Option<usize>, Query, description = "Zero-based page number"),
        ("size" = Option<usize>, Query, description = "Page size (default 20, max 2000)"),
        ("sort" = Option<String>, Query, description = "field[,asc|desc], repeatable")
    ),
    responses(
        (status = 200, description = "One page of companies", body = serde_json::Value),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn owner_search(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Page<CompanyAuto>>, SearchError> {
    let pageable = Pageable::from_pairs(&params)?;
    let page = state.auto.find_all_by("owner", &term, &pageable).await?;
    Ok(Json(page))
}
