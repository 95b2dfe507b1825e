//! Bracket schedules keyed by tax year.
//!
//! A [`TaxTable`] is built once at startup and never mutated afterwards;
//! callers share it behind an `Arc`.

mod builtin;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::validation::{YEAR_FIELD, validate_year};
use crate::{TaxBracket, TaxError};

/// Year used when a lookup is given an empty year.
pub const DEFAULT_TAX_YEAR: i32 = 2022;

/// Violations of the bracket schedule invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTableError {
    #[error("tax year {0} has no brackets")]
    Empty(i32),

    #[error("tax year {year}: bracket {index} starts below zero ({min_income})")]
    NegativeMinimum {
        year: i32,
        index: usize,
        min_income: Decimal,
    },

    #[error("tax year {year}: bracket {index} starts at {found}, expected {expected}")]
    NotContiguous {
        year: i32,
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("tax year {year}: bracket {index} has max {max_income} not above min {min_income}")]
    EmptyRange {
        year: i32,
        index: usize,
        min_income: Decimal,
        max_income: Decimal,
    },

    #[error("tax year {year}: bracket {index} has rate {rate} outside (0, 1]")]
    RateOutOfRange {
        year: i32,
        index: usize,
        rate: Decimal,
    },

    #[error("tax year {year}: only the last bracket may be unbounded (found at {index})")]
    MisplacedUnbounded { year: i32, index: usize },

    #[error("tax year {0}: last bracket must be unbounded")]
    MissingUnbounded(i32),
}

/// Immutable mapping from tax year to its ordered brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTable {
    years: BTreeMap<i32, Vec<TaxBracket>>,
}

impl TaxTable {
    /// Builds a table from caller-supplied schedules, checking every year.
    pub fn new(years: BTreeMap<i32, Vec<TaxBracket>>) -> Result<Self, TaxTableError> {
        let table = Self { years };
        table.validate()?;
        Ok(table)
    }

    /// The schedules compiled into the service (2019 through 2023).
    pub fn builtin() -> Self {
        Self {
            years: builtin::brackets_by_year(),
        }
    }

    /// Checks ordering, contiguity, rates and the single open bracket for
    /// every year.
    pub fn validate(&self) -> Result<(), TaxTableError> {
        for (&year, brackets) in &self.years {
            validate_schedule(year, brackets)?;
        }
        Ok(())
    }

    /// Resolves a year string to its brackets.
    ///
    /// An empty string means [`DEFAULT_TAX_YEAR`]. Otherwise the string is
    /// matched against the canonical spelling of each table year, so `"+2022"`
    /// and `"02022"` are numeric but not found.
    ///
    /// # Errors
    ///
    /// * [`TaxError::Validation`] on field `year` when the year is not an integer.
    /// * [`TaxError::NotFound`] on field `year` when the table has no such year.
    pub fn lookup(
        &self,
        year: &str,
    ) -> Result<(i32, &[TaxBracket]), TaxError> {
        if year.is_empty() {
            return self.lookup(&DEFAULT_TAX_YEAR.to_string());
        }
        let parsed = validate_year(year)?;

        debug!(year, "looking up tax brackets");
        i32::try_from(parsed)
            .ok()
            .filter(|candidate| candidate.to_string() == year)
            .and_then(|candidate| self.brackets(candidate).map(|brackets| (candidate, brackets)))
            .ok_or_else(|| {
                TaxError::not_found(
                    YEAR_FIELD,
                    format!("tax brackets for the tax year '{year}' were not found"),
                )
            })
    }

    pub fn brackets(
        &self,
        year: i32,
    ) -> Option<&[TaxBracket]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// Known years, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Every year with its brackets, ascending by year.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[TaxBracket])> {
        self.years
            .iter()
            .map(|(year, brackets)| (*year, brackets.as_slice()))
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_schedule(
    year: i32,
    brackets: &[TaxBracket],
) -> Result<(), TaxTableError> {
    let Some(first) = brackets.first() else {
        return Err(TaxTableError::Empty(year));
    };
    if first.min_income < Decimal::ZERO {
        return Err(TaxTableError::NegativeMinimum {
            year,
            index: 0,
            min_income: first.min_income,
        });
    }

    let last = brackets.len() - 1;
    let mut expected_min = first.min_income;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.min_income != expected_min {
            return Err(TaxTableError::NotContiguous {
                year,
                index,
                expected: expected_min,
                found: bracket.min_income,
            });
        }
        if bracket.tax_rate <= Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
            return Err(TaxTableError::RateOutOfRange {
                year,
                index,
                rate: bracket.tax_rate,
            });
        }

        match bracket.max_income {
            Some(max_income) if max_income <= bracket.min_income => {
                return Err(TaxTableError::EmptyRange {
                    year,
                    index,
                    min_income: bracket.min_income,
                    max_income,
                });
            }
            Some(_) if index == last => return Err(TaxTableError::MissingUnbounded(year)),
            Some(max_income) => expected_min = max_income,
            None if index != last => {
                return Err(TaxTableError::MisplacedUnbounded { year, index });
            }
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn table_with(brackets: Vec<TaxBracket>) -> Result<TaxTable, TaxTableError> {
        TaxTable::new(BTreeMap::from([(2030, brackets)]))
    }

    // =========================================================================
    // builtin table
    // =========================================================================

    #[test]
    fn builtin_covers_2019_through_2023() {
        let years: Vec<i32> = TaxTable::builtin().years().collect();

        assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);
    }

    #[test]
    fn builtin_satisfies_invariants() {
        assert_eq!(TaxTable::builtin().validate(), Ok(()));
    }

    #[test]
    fn builtin_years_are_ascending_with_one_open_bracket() {
        for (year, brackets) in TaxTable::builtin().iter() {
            assert!(
                brackets
                    .windows(2)
                    .all(|pair| pair[0].min_income < pair[1].min_income),
                "{year} not ascending"
            );
            assert_eq!(
                brackets.iter().filter(|b| b.is_unbounded()).count(),
                1,
                "{year}"
            );
        }
    }

    #[test]
    fn builtin_2022_schedule() {
        let table = TaxTable::builtin();
        let brackets = table.brackets(2022).unwrap();

        assert_eq!(
            brackets,
            &[
                TaxBracket::new(dec!(0), Some(dec!(50197)), dec!(0.15)),
                TaxBracket::new(dec!(50197), Some(dec!(100392)), dec!(0.205)),
                TaxBracket::new(dec!(100392), Some(dec!(155625)), dec!(0.26)),
                TaxBracket::new(dec!(155625), Some(dec!(221708)), dec!(0.29)),
                TaxBracket::new(dec!(221708), None, dec!(0.33)),
            ]
        );
    }

    // =========================================================================
    // lookup
    // =========================================================================

    #[test]
    fn lookup_empty_year_defaults_to_2022() {
        let table = TaxTable::builtin();

        assert_eq!(table.lookup(""), table.lookup("2022"));
        assert_eq!(table.lookup("").unwrap().0, 2022);
    }

    #[test]
    fn lookup_non_numeric_year_is_validation_error() {
        let err = TaxTable::builtin().lookup("abc").unwrap_err();

        assert_eq!(
            err,
            TaxError::validation("year", "the tax year abc is not a valid year")
        );
    }

    #[test]
    fn lookup_unknown_year_is_not_found() {
        let err = TaxTable::builtin().lookup("2018").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.field(), "year");
        assert_eq!(
            err.message(),
            "tax brackets for the tax year '2018' were not found"
        );
    }

    #[test]
    fn lookup_non_canonical_year_is_not_found() {
        let table = TaxTable::builtin();

        for year in ["+2022", "02022", "-0"] {
            let err = table.lookup(year).unwrap_err();

            assert!(err.is_not_found(), "{year}");
            assert_eq!(
                err.message(),
                format!("tax brackets for the tax year '{year}' were not found")
            );
        }
    }

    #[test]
    fn lookup_year_beyond_i32_is_not_found() {
        let err = TaxTable::builtin().lookup("3000000000").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.field(), "year");
    }

    // =========================================================================
    // validation
    // =========================================================================

    #[test]
    fn new_rejects_empty_schedule() {
        assert_eq!(table_with(vec![]), Err(TaxTableError::Empty(2030)));
    }

    #[test]
    fn new_rejects_negative_minimum() {
        let result = table_with(vec![TaxBracket::new(dec!(-1), None, dec!(0.1))]);

        assert!(matches!(
            result,
            Err(TaxTableError::NegativeMinimum { index: 0, .. })
        ));
    }

    #[test]
    fn new_rejects_gap_between_brackets() {
        let result = table_with(vec![
            TaxBracket::new(dec!(0), Some(dec!(100)), dec!(0.1)),
            TaxBracket::new(dec!(150), None, dec!(0.2)),
        ]);

        assert_eq!(
            result,
            Err(TaxTableError::NotContiguous {
                year: 2030,
                index: 1,
                expected: dec!(100),
                found: dec!(150),
            })
        );
    }

    #[test]
    fn new_rejects_inverted_range() {
        let result = table_with(vec![
            TaxBracket::new(dec!(100), Some(dec!(100)), dec!(0.1)),
            TaxBracket::new(dec!(100), None, dec!(0.2)),
        ]);

        assert!(matches!(result, Err(TaxTableError::EmptyRange { index: 0, .. })));
    }

    #[test]
    fn new_rejects_rates_outside_unit_interval() {
        for rate in [dec!(0), dec!(-0.1), dec!(1.01)] {
            let result = table_with(vec![TaxBracket::new(dec!(0), None, rate)]);

            assert!(matches!(result, Err(TaxTableError::RateOutOfRange { .. })));
        }
    }

    #[test]
    fn new_accepts_full_rate() {
        assert!(table_with(vec![TaxBracket::new(dec!(0), None, dec!(1))]).is_ok());
    }

    #[test]
    fn new_rejects_open_bracket_before_the_end() {
        let result = table_with(vec![
            TaxBracket::new(dec!(0), None, dec!(0.1)),
            TaxBracket::new(dec!(0), None, dec!(0.2)),
        ]);

        assert_eq!(
            result,
            Err(TaxTableError::MisplacedUnbounded {
                year: 2030,
                index: 0
            })
        );
    }

    #[test]
    fn new_rejects_bounded_last_bracket() {
        let result = table_with(vec![TaxBracket::new(dec!(0), Some(dec!(100)), dec!(0.1))]);

        assert_eq!(result, Err(TaxTableError::MissingUnbounded(2030)));
    }
}
