pub mod api_docs;
pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::{AppState, router};
