//! Route table and middleware stack.
//!
//! | method | path                              | API key |
//! |--------|-----------------------------------|---------|
//! | GET    | `/`                               | no      |
//! | GET    | `/tax-calculator/health`          | no      |
//! | GET    | `/tax-calculator/`                | no      |
//! | GET    | `/tax-calculator/tax-year/:year`  | no      |
//! | GET    | `/tax-calculator/tax-years`       | yes     |
//! | POST   | `/tax-calculator/tax-year/:year`  | yes     |
//! | GET    | `/swagger/doc.json`               | no      |
//! | GET    | `/swagger/`                       | no      |

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use tax_core::TaxService;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api_docs::{self, DOC_PATH};
use crate::auth::require_api_key;
use crate::handlers;

/// Shared per-request state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: TaxService,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(
        service: TaxService,
        api_key: &str,
    ) -> Self {
        Self {
            service,
            api_key: Arc::from(api_key),
        }
    }
}

pub fn router(
    state: AppState,
    request_timeout: Duration,
) -> Router {
    let api_key = from_fn_with_state(state.clone(), require_api_key);

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/tax-calculator", get(handlers::default_brackets))
        .route("/tax-calculator/", get(handlers::default_brackets))
        .route("/tax-calculator/health", get(handlers::health))
        .route(
            "/tax-calculator/tax-years",
            get(handlers::all_brackets).route_layer(api_key.clone()),
        )
        .route(
            "/tax-calculator/tax-year/:year",
            get(handlers::brackets_by_year)
                .merge(post(handlers::calculate).route_layer(api_key)),
        )
        .route(DOC_PATH, get(api_docs::doc_json))
        .route("/swagger", get(api_docs::swagger_ui))
        .route("/swagger/", get(api_docs::swagger_ui))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
