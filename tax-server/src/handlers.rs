use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use tracing::{debug, info};

use crate::dto::{
    AllBracketsResponse, CalculateRequest, CalculationResponse, HealthResponse, TaxBracketDto,
    brackets_to_dtos,
};
use crate::error::{ApiError, ErrorBody};
use crate::routes::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to PY's Tax Calculator API";

/// GET / - plain-text greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "general"
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// GET /tax-calculator/health
#[utoipa::path(
    get,
    path = "/tax-calculator/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "general"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /tax-calculator/ - brackets for the default year
#[utoipa::path(
    get,
    path = "/tax-calculator/",
    responses(
        (status = 200, description = "Brackets for the default tax year", body = Vec<TaxBracketDto>)
    ),
    tag = "brackets"
)]
pub async fn default_brackets(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaxBracketDto>>, ApiError> {
    let (year, brackets) = state.service.brackets_for_year("")?;
    debug!(year, "serving default tax brackets");

    Ok(Json(brackets_to_dtos(brackets)))
}

/// GET /tax-calculator/tax-year/:year
#[utoipa::path(
    get,
    path = "/tax-calculator/tax-year/{year}",
    params(("year" = String, Path, description = "Tax year, e.g. 2022")),
    responses(
        (status = 200, description = "Brackets for the year", body = Vec<TaxBracketDto>),
        (status = 400, description = "Year is not an integer", body = ErrorBody),
        (status = 404, description = "No brackets for the year", body = ErrorBody)
    ),
    tag = "brackets"
)]
pub async fn brackets_by_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<TaxBracketDto>>, ApiError> {
    let (year, brackets) = state.service.brackets_for_year(&year)?;
    debug!(year, "serving tax brackets");

    Ok(Json(brackets_to_dtos(brackets)))
}

/// GET /tax-calculator/tax-years - every year's brackets
#[utoipa::path(
    get,
    path = "/tax-calculator/tax-years",
    responses(
        (status = 200, description = "Brackets keyed by year", body = std::collections::BTreeMap<String, Vec<TaxBracketDto>>),
        (status = 401, description = "Missing or invalid API key", body = ErrorBody)
    ),
    security(("api_key" = [])),
    tag = "brackets"
)]
pub async fn all_brackets(State(state): State<AppState>) -> Json<AllBracketsResponse> {
    let response = state
        .service
        .all_brackets()
        .map(|(year, brackets)| (year.to_string(), brackets_to_dtos(brackets)))
        .collect();

    Json(response)
}

/// POST /tax-calculator/tax-year/:year - tax owed on `{"salary": n}`
#[utoipa::path(
    post,
    path = "/tax-calculator/tax-year/{year}",
    params(("year" = String, Path, description = "Tax year, e.g. 2022")),
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Tax owed with per-band breakdown", body = CalculationResponse),
        (status = 400, description = "Invalid year, salary or body", body = ErrorBody),
        (status = 401, description = "Missing or invalid API key", body = ErrorBody),
        (status = 404, description = "No brackets for the year", body = ErrorBody)
    ),
    security(("api_key" = [])),
    tag = "calculations"
)]
pub async fn calculate(
    State(state): State<AppState>,
    Path(year): Path<String>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(request) = payload?;

    let calculation = state.service.calculate(&year, request.salary)?;
    info!(
        tax_year = calculation.tax_year,
        total_tax_owed = %calculation.total_tax_owed,
        effective_rate = %calculation.effective_rate,
        "tax calculated"
    );

    Ok(Json(calculation.into()))
}
