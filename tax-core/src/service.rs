use std::sync::Arc;

use rust_decimal::Decimal;

use crate::calculations::BracketTaxCalculator;
use crate::validation::validate_salary;
use crate::{TaxBracket, TaxCalculation, TaxError, TaxTable};

/// Entry point for the boundary layer: bracket lookups and tax calculations
/// against a shared, read-only [`TaxTable`].
#[derive(Debug, Clone)]
pub struct TaxService {
    table: Arc<TaxTable>,
}

impl TaxService {
    pub fn new(table: Arc<TaxTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TaxTable {
        &self.table
    }

    /// Brackets for `year`; an empty year means the default year.
    pub fn brackets_for_year(
        &self,
        year: &str,
    ) -> Result<(i32, &[TaxBracket]), TaxError> {
        self.table.lookup(year)
    }

    /// Every known year with its brackets, ascending by year.
    pub fn all_brackets(&self) -> impl Iterator<Item = (i32, &[TaxBracket])> {
        self.table.iter()
    }

    /// Validates the salary, resolves the year and runs the calculation.
    ///
    /// The salary is checked before the year, so a request that is wrong on
    /// both counts reports the salary.
    pub fn calculate(
        &self,
        year: &str,
        salary: Decimal,
    ) -> Result<TaxCalculation, TaxError> {
        validate_salary(salary)?;
        let (tax_year, brackets) = self.table.lookup(year)?;

        BracketTaxCalculator::new(tax_year, brackets).calculate(salary)
    }
}

impl Default for TaxService {
    fn default() -> Self {
        Self::new(Arc::new(TaxTable::builtin()))
    }
}
