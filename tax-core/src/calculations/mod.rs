//! Tax calculation over progressive bracket schedules.

pub mod bracket_tax;
pub mod common;

pub use bracket_tax::BracketTaxCalculator;
