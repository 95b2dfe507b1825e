use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A salary range taxed at a single marginal rate.
///
/// `max_income` of `None` marks the open-ended top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }

    /// Portion of `salary` that falls inside this bracket, or `None` when the
    /// salary does not exceed the bracket's lower bound.
    pub fn taxable_amount(
        &self,
        salary: Decimal,
    ) -> Option<Decimal> {
        if salary <= self.min_income {
            return None;
        }

        let upper = match self.max_income {
            Some(max) => salary.min(max),
            None => salary,
        };
        Some(upper - self.min_income)
    }
}
