mod tax_bracket;
mod tax_calculation;

pub use tax_bracket::TaxBracket;
pub use tax_calculation::{BracketTax, EffectiveRate, TaxCalculation};
