use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::TaxBracket;
use crate::calculations::common::round_half_up;

/// A bracket from the breakdown together with the tax owed inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTax {
    pub bracket: TaxBracket,
    pub tax_owed: Decimal,
}

/// Effective tax rate as a percentage with two decimal places.
///
/// Renders and serializes as `"15.90%"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EffectiveRate(Decimal);

impl EffectiveRate {
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, 2));

    /// Wraps a percentage, fixing its scale at two decimal places.
    pub fn from_percent(percent: Decimal) -> Self {
        let mut percent = round_half_up(percent);
        percent.rescale(2);
        Self(percent)
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }
}

impl Default for EffectiveRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for EffectiveRate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for EffectiveRate {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result of running a salary through a year's brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxCalculation {
    pub tax_year: i32,
    pub salary: Decimal,
    pub total_tax_owed: Decimal,
    pub effective_rate: EffectiveRate,

    /// Only brackets the salary reaches into, lowest first.
    pub tax_owed_per_bracket: Vec<BracketTax>,
}
