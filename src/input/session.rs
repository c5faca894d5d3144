use crate::config::CalculatorConfiguration;
use crate::engine::simulate;
use crate::export::save_results;
use crate::input::prompt::Prompter;
use crate::metrics::{summarize, yearly_table};
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};
use tracing::{info, warn};

//the prompt-driven calculator loop
pub struct InteractiveSession<'a> {
    config: &'a CalculatorConfiguration,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(config: &'a CalculatorConfiguration) -> Self {
        InteractiveSession { config }
    }

    //runs calculations until the user declines another one
    //clock supplies the timestamp for result folders
    pub fn run<R, W, C>(&self, prompter: &mut Prompter<R, W>, clock: C) -> Result<()>
    where
        R: BufRead,
        W: Write,
        C: Fn() -> NaiveDateTime,
    {
        prompter.say("===== Compound Interest Calculator =====")?;
        prompter.say(
            "Welcome! This tool will help you calculate how your investments grow over time.",
        )?;

        loop {
            let params = prompter.collect_parameters(&self.config.limits)?;

            if let Err(err) = params.validate(&self.config.limits) {
                warn!(error = %err, "rejected calculator input");
                prompter.say(&format!("Error: {}", err))?;
                continue;
            }

            let records = simulate(&params);

            match summarize(&records) {
                Ok(summary) => {
                    prompter.say("\n===== Investment Results =====")?;
                    for line in summary.describe() {
                        prompter.say(&line)?;
                    }
                    prompter.say("==============================")?;
                }
                Err(err) => {
                    warn!(error = %err, "summary unavailable");
                    prompter.say(&format!("\nNo summary available: {}", err))?;
                }
            }

            if self.config.show_yearly_table {
                prompter.say(&yearly_table(&records).to_string())?;
            }

            if prompter.prompt_yes_no("\nDo you want to save the data?")? {
                let files = save_results(&records, &params, &self.config.output_dir, clock())?;
                let folder_name = files
                    .folder
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();

                prompter.say(&format!("\nData saved in folder: {}", folder_name))?;
                prompter.say("Files generated:")?;
                for path in [Some(&files.csv), Some(&files.json), files.chart_data.as_ref()]
                    .into_iter()
                    .flatten()
                {
                    if let Ok(relative) = path.strip_prefix(&files.folder) {
                        prompter.say(&format!("  - {}", relative.display()))?;
                    }
                }
                info!(folder = %files.folder.display(), "interactive results saved");
            }

            if !prompter.prompt_yes_no("Do you want to do another calculation?")? {
                prompter.say("\nThank you for using the Compound Interest Calculator. Goodbye!")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    fn run_script(config: &CalculatorConfiguration, script: &str) -> (Result<()>, String) {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = InteractiveSession::new(config).run(&mut prompter, clock);
        let out = String::from_utf8(prompter.into_writer()).unwrap();
        (result, out)
    }

    #[test]
    fn single_calculation_without_saving() {
        let config = CalculatorConfiguration::default();
        let (result, out) = run_script(&config, "1000\n5\n4\n0\n1\nn\nn\n");

        assert!(result.is_ok());
        assert!(out.contains("===== Investment Results ====="));
        assert!(out.contains("Final Amount: $1,050.00"));
        assert!(out.contains("Return on Investment: 5.00%"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn invalid_rate_restarts_the_questions() {
        let config = CalculatorConfiguration::default();
        let script = "1000\n150\n4\n0\n1\n1000\n5\n4\n0\n1\nn\nn\n";
        let (result, out) = run_script(&config, script);

        assert!(result.is_ok());
        assert!(out.contains("Error: Interest rate must be between 0 and 100"));
        assert!(out.contains("Final Amount: $1,050.00"));
    }

    #[test]
    fn zero_investment_reports_missing_summary() {
        let config = CalculatorConfiguration::default();
        let (result, out) = run_script(&config, "0\n5\n4\n0\n2\nn\nn\n");

        assert!(result.is_ok());
        assert!(out.contains("No summary available"));
    }

    #[test]
    fn saving_writes_the_result_folder() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalculatorConfiguration {
            output_dir: dir.path().to_path_buf(),
            ..CalculatorConfiguration::default()
        };
        let (result, out) = run_script(&config, "1000\n5\n3\n100\n2\ny\nn\n");

        assert!(result.is_ok());
        let folder = dir.path().join("1000.0_5.0_M_100.0_20250102_030405");
        assert!(folder.join("compound_interest_data.csv").is_file());
        assert!(folder.join("compound_interest_data.json").is_file());
        assert!(folder.join("chart_data").join("chart_series.json").is_file());
        let chart_entry = std::path::Path::new("chart_data").join("chart_series.json");
        assert!(out.contains(&format!("  - {}", chart_entry.display())));
        assert!(out.contains("Data saved in folder: 1000.0_5.0_M_100.0_20250102_030405"));
    }

    #[test]
    fn running_out_of_input_fails() {
        let config = CalculatorConfiguration::default();
        let (result, _) = run_script(&config, "1000\n");
        assert!(result.is_err());
    }
}
