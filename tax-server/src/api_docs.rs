//! OpenAPI document for the HTTP API and a Swagger UI page that renders it.
//!
//! The document is served at `/swagger/doc.json`; the UI at `/swagger/`.

use std::sync::LazyLock;

use axum::Json;
use axum::response::Html;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::API_KEY_HEADER_NAME;
use crate::dto::{CalculateRequest, CalculationResponse, HealthResponse, TaxBracketDto};
use crate::error::ErrorBody;

pub const DOC_PATH: &str = "/swagger/doc.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tax Calculator API",
        description = "Marginal income tax over yearly bracket schedules."
    ),
    paths(
        crate::handlers::welcome,
        crate::handlers::health,
        crate::handlers::default_brackets,
        crate::handlers::brackets_by_year,
        crate::handlers::all_brackets,
        crate::handlers::calculate,
    ),
    components(schemas(
        TaxBracketDto,
        CalculateRequest,
        CalculationResponse,
        HealthResponse,
        ErrorBody,
    )),
    modifiers(&ApiKeyScheme),
    tags(
        (name = "general", description = "Greeting and health"),
        (name = "brackets", description = "Tax bracket schedules"),
        (name = "calculations", description = "Tax owed on a salary"),
    )
)]
pub struct ApiDoc;

/// Registers the `X-Api-Key` header scheme that gated paths refer to.
struct ApiKeyScheme;

impl Modify for ApiKeyScheme {
    fn modify(
        &self,
        openapi: &mut utoipa::openapi::OpenApi,
    ) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER_NAME))),
            );
        }
    }
}

static DOC: LazyLock<utoipa::openapi::OpenApi> = LazyLock::new(ApiDoc::openapi);

/// GET /swagger/doc.json
pub async fn doc_json() -> Json<&'static utoipa::openapi::OpenApi> {
    Json(&*DOC)
}

/// GET /swagger/ - Swagger UI loading [`DOC_PATH`]
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Tax Calculator API - Swagger UI</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5.0.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.0.0/swagger-ui-bundle.js"></script>
    <script>
        SwaggerUIBundle({{
            url: '{DOC_PATH}',
            dom_id: '#swagger-ui',
            presets: [
                SwaggerUIBundle.presets.apis,
                SwaggerUIBundle.presets.standalone
            ]
        }});
    </script>
</body>
</html>
"#
    ))
}
