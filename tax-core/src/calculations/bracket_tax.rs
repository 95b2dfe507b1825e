//! Marginal tax owed on a salary across a year's bracket schedule.
//!
//! Each bracket taxes only the slice of the salary that falls inside it:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Skip brackets whose lower bound the salary does not exceed |
//! | 2    | Taxable slice: `min(salary, max) - min` (salary itself when open) |
//! | 3    | Bracket tax: slice × rate, rounded to cents |
//! | 4    | Total: sum of the rounded bracket taxes |
//! | 5    | Effective rate: total ÷ salary × 100 (0.00% for a zero salary) |
//!
//! The total always equals the sum of the reported breakdown.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::BracketTaxCalculator;
//! use tax_core::TaxTable;
//!
//! let table = TaxTable::builtin();
//! let brackets = table.brackets(2022).unwrap();
//!
//! let calculator = BracketTaxCalculator::new(2022, brackets);
//! let result = calculator.calculate(dec!(60000)).unwrap();
//!
//! assert_eq!(result.total_tax_owed, dec!(9539.17));
//! assert_eq!(result.effective_rate.to_string(), "15.90%");
//! assert_eq!(result.tax_owed_per_bracket.len(), 2);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{percentage_of, round_half_up};
use crate::validation::validate_salary;
use crate::{BracketTax, EffectiveRate, TaxBracket, TaxCalculation, TaxError};

/// Calculator over one year's brackets.
///
/// Brackets must be sorted by `min_income` ascending, as every
/// [`TaxTable`](crate::TaxTable) schedule is.
#[derive(Debug, Clone, Copy)]
pub struct BracketTaxCalculator<'a> {
    tax_year: i32,
    tax_brackets: &'a [TaxBracket],
}

impl<'a> BracketTaxCalculator<'a> {
    pub fn new(
        tax_year: i32,
        tax_brackets: &'a [TaxBracket],
    ) -> Self {
        Self {
            tax_year,
            tax_brackets,
        }
    }

    /// Calculates the tax owed on `salary`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::Validation`] on field `salary` for a negative salary.
    pub fn calculate(
        &self,
        salary: Decimal,
    ) -> Result<TaxCalculation, TaxError> {
        validate_salary(salary)?;

        let mut total = Decimal::ZERO;
        let mut tax_owed_per_bracket = Vec::new();

        for bracket in self.tax_brackets {
            let Some(taxable) = bracket.taxable_amount(salary) else {
                continue;
            };
            let tax_owed = round_half_up(taxable * bracket.tax_rate);
            total += tax_owed;

            tax_owed_per_bracket.push(BracketTax {
                bracket: bracket.clone(),
                tax_owed,
            });
        }

        let total_tax_owed = total;
        let effective_rate = EffectiveRate::from_percent(percentage_of(total_tax_owed, salary));

        debug!(
            tax_year = self.tax_year,
            %salary,
            %total_tax_owed,
            %effective_rate,
            brackets = tax_owed_per_bracket.len(),
            "calculated tax"
        );

        Ok(TaxCalculation {
            tax_year: self.tax_year,
            salary,
            total_tax_owed,
            effective_rate,
            tax_owed_per_bracket,
        })
    }
}
