use crate::config::{CalculatorLimits, Interval};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Initial amount cannot be negative: {0}")]
    NegativeInitialAmount(f64),
    #[error("Interest rate must be between {min} and {max}: got {rate}")]
    RateOutOfRange { rate: f64, min: f64, max: f64 },
    #[error("Years must be between 1 and {max}: got {years}")]
    YearsOutOfRange { years: u32, max: u32 },
    #[error("Regular deposit cannot be negative: {0}")]
    NegativeDeposit(f64),
    #[error("Invalid interval code: {0:?}")]
    UnknownInterval(String),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

//inputs for one calculator run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    //starting principal
    pub initial_amount: f64,

    //nominal annual interest rate in percent
    pub annual_rate_percent: f64,

    //horizon length in years
    pub years: u32,

    //compounding and deposit interval
    pub interval: Interval,

    //amount added at every compounding period
    pub deposit_per_period: f64,
}

impl SimulationParameters {
    pub fn new(
        initial_amount: f64,
        annual_rate_percent: f64,
        years: u32,
        interval: Interval,
        deposit_per_period: f64,
    ) -> Self {
        SimulationParameters {
            initial_amount,
            annual_rate_percent,
            years,
            interval,
            deposit_per_period,
        }
    }

    //checks every input against the configured limits
    //the engine assumes this has passed
    pub fn validate(&self, limits: &CalculatorLimits) -> Result<(), ParameterError> {
        let finite = [
            ("Initial amount", self.initial_amount),
            ("Interest rate", self.annual_rate_percent),
            ("Regular deposit", self.deposit_per_period),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParameterError::NonFinite { field });
        }

        if self.initial_amount < limits.min_amount {
            return Err(ParameterError::NegativeInitialAmount(self.initial_amount));
        }

        if self.annual_rate_percent < limits.min_interest_rate
            || self.annual_rate_percent > limits.max_interest_rate
        {
            return Err(ParameterError::RateOutOfRange {
                rate: self.annual_rate_percent,
                min: limits.min_interest_rate,
                max: limits.max_interest_rate,
            });
        }

        if self.years == 0 || self.years > limits.max_years {
            return Err(ParameterError::YearsOutOfRange {
                years: self.years,
                max: limits.max_years,
            });
        }

        if self.deposit_per_period < limits.min_amount {
            return Err(ParameterError::NegativeDeposit(self.deposit_per_period));
        }

        Ok(())
    }
}
