use crate::config::SimulationParameters;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

//folder name encoding the run parameters and a timestamp
//e.g. 1000.0_5.0_M_100.0_20250301_142530
pub fn results_folder_name(params: &SimulationParameters, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}_{}_{}",
        folder_number(params.initial_amount),
        folder_number(params.annual_rate_percent),
        params.interval.code(),
        folder_number(params.deposit_per_period),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

//shortest round-trip form, ".0" on integral values
//exponents carry a sign and at least two digits: 1e+16, 1.5e-05
fn folder_number(value: f64) -> String {
    let debug = format!("{:?}", value);
    let Some(index) = debug.find('e') else {
        return debug;
    };
    let (mantissa, exponent) = (&debug[..index], &debug[index + 1..]);

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

//creates the results folder under base, reusing it if it already exists
pub fn create_results_folder(
    base: &Path,
    params: &SimulationParameters,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    let folder_path = base.join(results_folder_name(params, timestamp));

    std::fs::create_dir_all(&folder_path)
        .context(format!("Failed to create results folder {:?}", folder_path))?;

    debug!(path = %folder_path.display(), "results folder ready");
    Ok(folder_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interval;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(14, 25, 30)
            .unwrap()
    }

    #[test]
    fn name_encodes_parameters_and_timestamp() {
        let params = SimulationParameters::new(1000.0, 5.5, 30, Interval::Monthly, 100.0);
        assert_eq!(
            results_folder_name(&params, timestamp()),
            "1000.0_5.5_M_100.0_20250301_142530"
        );
    }

    #[test]
    fn large_and_tiny_numbers_use_signed_exponents() {
        assert_eq!(folder_number(1e16), "1e+16");
        assert_eq!(folder_number(2.5e20), "2.5e+20");
        assert_eq!(folder_number(1.5e-5), "1.5e-05");
        assert_eq!(folder_number(1e15), "1000000000000000.0");
        assert_eq!(folder_number(0.0001), "0.0001");

        let params = SimulationParameters::new(1e16, 5.0, 1, Interval::Yearly, 0.0);
        assert_eq!(
            results_folder_name(&params, timestamp()),
            "1e+16_5.0_Y_0.0_20250301_142530"
        );
    }

    #[test]
    fn creating_twice_reuses_the_folder() {
        let dir = tempfile::tempdir().unwrap();
        let params = SimulationParameters::new(0.0, 0.0, 1, Interval::Daily, 1.25);

        let first = create_results_folder(dir.path(), &params, timestamp()).unwrap();
        let second = create_results_folder(dir.path(), &params, timestamp()).unwrap();

        assert_eq!(first, second);
        assert!(first.is_dir());
        assert!(first.ends_with("0.0_0.0_D_1.25_20250301_142530"));
    }
}
