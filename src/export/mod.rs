pub mod chart;
pub mod folder;
pub mod writer;

pub use chart::{generate_chart_data, ChartData, ChartSeries, LineChart, PieChart, StackedBarChart};
pub use folder::{create_results_folder, results_folder_name};
pub use writer::{load_csv, save_to_csv, save_to_json};

use crate::config::SimulationParameters;
use crate::engine::YearlyRecord;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::info;

//paths written by one export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub folder: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
    pub chart_data: Option<PathBuf>,
}

//writes the full result bundle into a fresh folder under base
pub fn save_results(
    records: &[YearlyRecord],
    params: &SimulationParameters,
    base: &Path,
    timestamp: NaiveDateTime,
) -> Result<ExportedFiles> {
    let folder = create_results_folder(base, params, timestamp)?;

    let csv = save_to_csv(records, &folder)?;
    let json = save_to_json(records, &folder)?;
    let chart_data = generate_chart_data(records, &folder)?;

    info!(folder = %folder.display(), records = records.len(), "results exported");

    Ok(ExportedFiles {
        folder,
        csv,
        json,
        chart_data,
    })
}
