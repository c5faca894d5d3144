use crate::engine::{round_to_cents, YearlyRecord};
use crate::metrics::format::format_currency;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    #[error("cannot summarize an empty sequence of yearly records")]
    EmptyInput,
    #[error("{metric} is undefined: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        reason: &'static str,
    },
}

//aggregate metrics for one calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_invested: f64,
    pub total_interest: f64,
    pub final_amount: f64,
    pub roi_percentage: f64,
    pub cagr_percentage: f64,
    pub years: usize,
    pub interest_to_investment_ratio: f64,
}

//derives summary statistics from the final record and the sequence length
pub fn summarize(records: &[YearlyRecord]) -> Result<SummaryStatistics, SummaryError> {
    let final_year = records.last().ok_or(SummaryError::EmptyInput)?;

    let total_invested = final_year.total_invested;
    let total_interest = final_year.interest_earned;
    let final_amount = final_year.total_amount;
    let years = records.len();

    if total_invested == 0.0 {
        return Err(SummaryError::UndefinedMetric {
            metric: "return on investment",
            reason: "total invested is zero",
        });
    }

    let roi = total_interest / total_invested * 100.0;
    let ratio = total_interest / total_invested;

    let growth = final_amount / total_invested;
    if !growth.is_finite() || growth < 0.0 {
        return Err(SummaryError::UndefinedMetric {
            metric: "compound annual growth rate",
            reason: "final amount to invested ratio is negative or not finite",
        });
    }
    let cagr = (growth.powf(1.0 / years as f64) - 1.0) * 100.0;

    Ok(SummaryStatistics {
        total_invested,
        total_interest,
        final_amount,
        roi_percentage: round_to_cents(roi),
        cagr_percentage: round_to_cents(cagr),
        years,
        interest_to_investment_ratio: round_to_cents(ratio),
    })
}

impl SummaryStatistics {
    //plain text result lines
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(
                "Total amount invested: {}",
                format_currency(self.total_invested)
            ),
            format!(
                "Total amount in interest: {}",
                format_currency(self.total_interest)
            ),
            format!("Final Amount: {}", format_currency(self.final_amount)),
            format!("Return on Investment: {:.2}%", self.roi_percentage),
            format!("Compound Annual Growth Rate: {:.2}%", self.cagr_percentage),
            format!(
                "For every $1 invested, you earned ${:.2} in interest",
                self.interest_to_investment_ratio
            ),
        ]
    }

    //builds the metrics table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

        table.add_row(Row::new(vec![
            Cell::new("Years"),
            Cell::new(&format!("{}", self.years)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Total Invested"),
            Cell::new(&format_currency(self.total_invested)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Total Interest"),
            Cell::new(&format_currency(self.total_interest)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Final Amount"),
            Cell::new(&format_currency(self.final_amount)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Return on Investment"),
            Cell::new(&format!("{:.2}%", self.roi_percentage)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("CAGR"),
            Cell::new(&format!("{:.2}%", self.cagr_percentage)),
        ]));

        table.add_row(Row::new(vec![
            Cell::new("Interest per $1 Invested"),
            Cell::new(&format!("${:.2}", self.interest_to_investment_ratio)),
        ]));

        table
    }

    //prints metrics in a formatted table
    pub fn pretty_print_table(&self) {
        self.to_table().printstd();
    }
}

//builds a year-by-year table of the simulation
pub fn yearly_table(records: &[YearlyRecord]) -> Table {
    let mut table = Table::new();

    table.add_row(Row::new(vec![
        Cell::new("Year"),
        Cell::new("Total Amount"),
        Cell::new("Total Invested"),
        Cell::new("Interest Earned"),
    ]));

    for record in records {
        table.add_row(Row::new(vec![
            Cell::new(&record.year.to_string()),
            Cell::new(&format_currency(record.total_amount)),
            Cell::new(&format_currency(record.total_invested)),
            Cell::new(&format_currency(record.interest_earned)),
        ]));
    }

    table
}
