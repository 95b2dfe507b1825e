//! JSON shapes of the HTTP API.
//!
//! Money and rates travel as JSON numbers; the core keeps them as `Decimal`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::{BracketTax, EffectiveRate, TaxBracket, TaxCalculation};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// One bracket. `max` is absent on the open top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaxBracketDto {
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 50197.0)]
    pub min: Decimal,

    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>, example = 100392.0)]
    pub max: Option<Decimal>,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.205)]
    pub rate: Decimal,

    /// Present only in calculation breakdowns.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>, example = 2009.62)]
    pub tax_owed: Option<Decimal>,
}

impl From<&TaxBracket> for TaxBracketDto {
    fn from(bracket: &TaxBracket) -> Self {
        Self {
            min: bracket.min_income,
            max: bracket.max_income,
            rate: bracket.tax_rate,
            tax_owed: None,
        }
    }
}

impl From<&BracketTax> for TaxBracketDto {
    fn from(band: &BracketTax) -> Self {
        Self {
            tax_owed: Some(band.tax_owed),
            ..Self::from(&band.bracket)
        }
    }
}

pub fn brackets_to_dtos(brackets: &[TaxBracket]) -> Vec<TaxBracketDto> {
    brackets.iter().map(TaxBracketDto::from).collect()
}

/// All schedules keyed by year, as `{"2019": [...], "2020": [...]}`.
pub type AllBracketsResponse = BTreeMap<String, Vec<TaxBracketDto>>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CalculateRequest {
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, minimum = 0.0, example = 60000.0)]
    pub salary: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CalculationResponse {
    #[schema(example = "2022")]
    pub tax_year: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 60000.0)]
    pub salary: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 9539.17)]
    pub total_tax_owed: Decimal,

    #[schema(value_type = String, example = "15.90%")]
    pub effective_tax_rate: EffectiveRate,

    pub tax_owed_per_band: Vec<TaxBracketDto>,
}

impl From<TaxCalculation> for CalculationResponse {
    fn from(calc: TaxCalculation) -> Self {
        Self {
            tax_year: calc.tax_year.to_string(),
            salary: calc.salary,
            total_tax_owed: calc.total_tax_owed,
            effective_tax_rate: calc.effective_rate,
            tax_owed_per_band: calc
                .tax_owed_per_bracket
                .iter()
                .map(TaxBracketDto::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn open_bracket_omits_max_and_tax_owed() {
        let dto = TaxBracketDto::from(&TaxBracket::new(dec!(221708), None, dec!(0.33)));

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"min": 221708.0, "rate": 0.33})
        );
    }

    #[test]
    fn breakdown_bracket_carries_tax_owed() {
        let band = BracketTax {
            bracket: TaxBracket::new(dec!(0), Some(dec!(50197)), dec!(0.15)),
            tax_owed: dec!(7529.55),
        };

        assert_eq!(
            serde_json::to_value(TaxBracketDto::from(&band)).unwrap(),
            json!({"min": 0.0, "max": 50197.0, "rate": 0.15, "tax_owed": 7529.55})
        );
    }

    #[test]
    fn calculate_request_reads_json_number() {
        let request: CalculateRequest = serde_json::from_str(r#"{"salary": 60000}"#).unwrap();

        assert_eq!(request.salary, dec!(60000));
    }

    #[test]
    fn calculation_response_shape() {
        let calc = TaxCalculation {
            tax_year: 2022,
            salary: dec!(0),
            total_tax_owed: dec!(0),
            effective_rate: EffectiveRate::ZERO,
            tax_owed_per_bracket: vec![],
        };

        assert_eq!(
            serde_json::to_value(CalculationResponse::from(calc)).unwrap(),
            json!({
                "tax_year": "2022",
                "salary": 0.0,
                "total_tax_owed": 0.0,
                "effective_tax_rate": "0.00%",
                "tax_owed_per_band": []
            })
        );
    }
}
