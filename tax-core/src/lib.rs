pub mod calculations;
pub mod error;
pub mod models;
pub mod service;
pub mod table;
pub mod validation;

pub use error::TaxError;
pub use models::*;
pub use service::TaxService;
pub use table::{DEFAULT_TAX_YEAR, TaxTable, TaxTableError};
pub use validation::{validate_salary, validate_year};
