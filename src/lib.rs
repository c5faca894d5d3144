//a Rust-based compound interest calculator with periodic deposits

pub mod config;
pub mod engine;
pub mod export;
pub mod input;
pub mod logging;
pub mod metrics;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{
        CalculatorConfiguration, CalculatorLimits, Interval, ParameterError, SimulationParameters,
    };
    pub use crate::engine::{calculate_compound_interest, round_to_cents, simulate, YearlyRecord};
    pub use crate::export::{
        create_results_folder, generate_chart_data, load_csv, results_folder_name, save_results,
        save_to_csv, save_to_json, ChartData, ExportedFiles,
    };
    pub use crate::input::{InteractiveSession, Prompter};
    pub use crate::logging::init_logging;
    pub use crate::metrics::{
        format_currency, summarize, yearly_table, SummaryError, SummaryStatistics,
    };
}
