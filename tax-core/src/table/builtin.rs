//! Federal bracket schedules shipped with the service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::TaxBracket;

const RATES: [Decimal; 5] = [dec!(0.15), dec!(0.205), dec!(0.26), dec!(0.29), dec!(0.33)];

/// Upper bounds of the four bounded brackets for each year.
const THRESHOLDS: [(i32, [Decimal; 4]); 5] = [
    (2019, [dec!(47630), dec!(95259), dec!(147667), dec!(210371)]),
    (2020, [dec!(48535), dec!(97069), dec!(150473), dec!(214368)]),
    (2021, [dec!(49020), dec!(98040), dec!(151978), dec!(216511)]),
    (2022, [dec!(50197), dec!(100392), dec!(155625), dec!(221708)]),
    (2023, [dec!(53359), dec!(106717), dec!(165430), dec!(235675)]),
];

pub(super) fn brackets_by_year() -> BTreeMap<i32, Vec<TaxBracket>> {
    THRESHOLDS
        .iter()
        .map(|(year, bounds)| (*year, schedule(bounds)))
        .collect()
}

/// Chains the bounds into contiguous brackets, ending with an open one.
fn schedule(bounds: &[Decimal; 4]) -> Vec<TaxBracket> {
    let mut min_income = Decimal::ZERO;
    let mut brackets = Vec::with_capacity(RATES.len());

    for (max_income, tax_rate) in bounds.iter().zip(RATES) {
        brackets.push(TaxBracket::new(min_income, Some(*max_income), tax_rate));
        min_income = *max_income;
    }
    brackets.push(TaxBracket::new(min_income, None, RATES[RATES.len() - 1]));

    brackets
}
