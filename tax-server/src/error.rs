//! Translation of service failures into JSON error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tax_core::TaxError;
use thiserror::Error;
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::API_KEY_HEADER_NAME;

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 404)]
    pub code: u16,
    #[schema(example = "year")]
    pub field: String,
    #[schema(example = "tax brackets for the tax year '2018' were not found")]
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Tax(#[from] TaxError),

    #[error("{0}")]
    InvalidBody(String),

    #[error("header X-Api-Key not provided")]
    MissingApiKey,

    #[error("invalid api key provided")]
    InvalidApiKey,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Tax(TaxError::Validation { .. }) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Tax(TaxError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::MissingApiKey | Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::Tax(err) => err.field(),
            Self::InvalidBody(_) => "body",
            Self::MissingApiKey | Self::InvalidApiKey => API_KEY_HEADER_NAME,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Self::Tax(TaxError::Validation { .. }) => "validation",
            Self::Tax(TaxError::NotFound { .. }) => "not_found",
            Self::InvalidBody(_) => "invalid_body",
            Self::MissingApiKey => "missing_api_key",
            Self::InvalidApiKey => "invalid_api_key",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: status.as_u16(),
            field: self.field().to_string(),
            message: self.to_string(),
        };

        warn!(
            status = body.code,
            error_type = self.error_type(),
            field = %body.field,
            message = %body.message,
            "request failed"
        );

        (status, Json(body)).into_response()
    }
}
