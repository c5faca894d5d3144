use crate::config::{Interval, SimulationParameters};
use crate::engine::record::YearlyRecord;
use tracing::debug;

//runs the compound interest simulation
//one record per year, in year order
//inputs are assumed to have passed SimulationParameters::validate
pub fn simulate(params: &SimulationParameters) -> Vec<YearlyRecord> {
    let periods_per_year = params.interval.periods_per_year();
    let rate_per_period = params.annual_rate_percent / 100.0 / periods_per_year as f64;
    let deposit = params.deposit_per_period;

    let mut total_amount = params.initial_amount;
    let mut total_invested = params.initial_amount;
    let mut records = Vec::with_capacity(params.years as usize);

    for year in 1..=params.years {
        for _ in 0..periods_per_year {
            //interest accrues on the pre-deposit balance
            total_amount *= 1.0 + rate_per_period;
            total_amount += deposit;
            total_invested += deposit;
        }

        records.push(YearlyRecord::from_balances(year, total_amount, total_invested));
    }

    debug!(
        initial_amount = params.initial_amount,
        annual_rate_percent = params.annual_rate_percent,
        years = params.years,
        interval = %params.interval,
        deposit_per_period = deposit,
        final_amount = total_amount,
        "simulation finished"
    );

    records
}

//positional form of simulate
pub fn calculate_compound_interest(
    initial_amount: f64,
    annual_rate_percent: f64,
    years: u32,
    interval: Interval,
    deposit_per_period: f64,
) -> Vec<YearlyRecord> {
    simulate(&SimulationParameters::new(
        initial_amount,
        annual_rate_percent,
        years,
        interval,
        deposit_per_period,
    ))
}
