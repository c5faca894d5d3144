use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

//account state at the end of one elapsed year
//field order is the export column order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    #[serde(rename = "Year")]
    pub year: u32,

    #[serde(rename = "Total Amount")]
    pub total_amount: f64,

    #[serde(rename = "Total Invested")]
    pub total_invested: f64,

    #[serde(rename = "Interest Earned")]
    pub interest_earned: f64,
}

impl YearlyRecord {
    //builds a record from raw year-end balances
    //amount and invested are rounded independently, interest is their difference
    pub fn from_balances(year: u32, total_amount: f64, total_invested: f64) -> Self {
        let total_amount = round_to_cents(total_amount);
        let total_invested = round_to_cents(total_invested);

        YearlyRecord {
            year,
            total_amount,
            total_invested,
            interest_earned: round_to_cents(total_amount - total_invested),
        }
    }
}

//rounds the exact stored binary value to 2 decimal places, half away from zero
//values outside the Decimal range (or non-finite) are returned unchanged
pub fn round_to_cents(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    //scale is at most 2, so this is one correctly rounded division
    rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_the_stored_value_not_its_decimal_spelling() {
        //0.015 and 2.675 are stored just below the half cent
        assert_eq!(round_to_cents(0.015), 0.01);
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(-2.675), -2.67);
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(2279.047447043329), 2279.05);
    }

    #[test]
    fn exact_midpoints_round_away_from_zero() {
        assert_eq!(round_to_cents(1.125), 1.13);
        assert_eq!(round_to_cents(-1.125), -1.13);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        assert_eq!(round_to_cents(1e30), 1e30);
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn interest_is_difference_of_rounded_values() {
        //unrounded difference 0.008 would round to 0.01
        let record = YearlyRecord::from_balances(1, 100.004, 99.996);
        assert_eq!(record.total_amount, 100.0);
        assert_eq!(record.total_invested, 100.0);
        assert_eq!(record.interest_earned, 0.0);
    }

    #[test]
    fn serializes_with_export_keys() {
        let record = YearlyRecord::from_balances(3, 1157.6251, 1000.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Year":3,"Total Amount":1157.63,"Total Invested":1000.0,"Interest Earned":157.63}"#
        );
    }
}
