//! Input checks applied before brackets are looked up or a salary is taxed.

use rust_decimal::Decimal;

use crate::TaxError;

pub const YEAR_FIELD: &str = "year";
pub const SALARY_FIELD: &str = "salary";

/// Checks that a tax year is numeric.
///
/// Any integer that fits in 64 bits passes, including signed or zero-padded
/// forms; whether such a year has brackets is the table's concern.
/// Surrounding whitespace is rejected.
pub fn validate_year(year: &str) -> Result<i64, TaxError> {
    year.parse::<i64>().map_err(|_| {
        TaxError::validation(
            YEAR_FIELD,
            format!("the tax year {year} is not a valid year"),
        )
    })
}

/// Zero and positive salaries are accepted.
pub fn validate_salary(salary: Decimal) -> Result<(), TaxError> {
    if salary < Decimal::ZERO {
        return Err(TaxError::validation(
            SALARY_FIELD,
            format!("the salary must not be negative. Invalid value: {salary:.2}"),
        ));
    }
    Ok(())
}
