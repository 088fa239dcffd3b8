use axum::Json;
use utoipa::OpenApi;

use companysearch::types::{CompanyAuto, CompanyManual, Owner, Status};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company Search API",
        version = "0.1.0",
        description = "Read-only company lookup and search over Elasticsearch: get by id, match, and fuzzy autocomplete.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::company_auto::get_company,
        crate::handlers::company_auto::search,
        crate::handlers::company_auto::autocomplete_search,
        crate::handlers::company_auto::autocomplete_fuzzy_search,
        crate::handlers::company_auto::telephone_search,
        crate::handlers::company_auto::owner_search,
        crate::handlers::company_manual::get_company,
        crate::handlers::company_manual::search,
        crate::handlers::company_manual::autocomplete_search,
        crate::handlers::company_manual::autocomplete_fuzzy_search,
    ),
    components(schemas(CompanyAuto, CompanyManual, Owner, Status)),
    tags(
        (name = "health", description = "Service and engine status"),
        (name = "company-auto", description = "Companies in the index with a derived mapping"),
        (name = "company-manual", description = "Companies in the index with an explicit mapping")
    )
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
