use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

//input bounds enforced before a simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorLimits {
    pub min_amount: f64,
    pub max_years: u32,
    pub min_interest_rate: f64,
    pub max_interest_rate: f64,
}

impl Default for CalculatorLimits {
    fn default() -> Self {
        CalculatorLimits {
            min_amount: 0.0,
            max_years: 100,
            min_interest_rate: 0.0,
            max_interest_rate: 100.0,
        }
    }
}

//complete calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfiguration {
    //validation bounds
    pub limits: CalculatorLimits,

    //base directory for result folders
    pub output_dir: PathBuf,

    //print the full year-by-year table after the summary
    pub show_yearly_table: bool,
}

impl Default for CalculatorConfiguration {
    fn default() -> Self {
        CalculatorConfiguration {
            limits: CalculatorLimits::default(),
            output_dir: PathBuf::from("."),
            show_yearly_table: false,
        }
    }
}

impl CalculatorConfiguration {
    //load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: CalculatorConfiguration = serde_json::from_str(&contents)?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
