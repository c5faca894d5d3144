use crate::engine::YearlyRecord;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CHART_DATA_DIR: &str = "chart_data";
pub const CHART_DATA_FILE_NAME: &str = "chart_series.json";

pub const INTEREST_COLOR: &str = "#55a630";
pub const INVESTED_COLOR: &str = "#e09f3e";
pub const TOTAL_COLOR: &str = "#0096c7";

//one plotted series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn new(label: &str, color: &str, values: Vec<f64>) -> Self {
        ChartSeries {
            label: label.to_string(),
            color: color.to_string(),
            values,
        }
    }
}

//growth over time, one line per series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub years: Vec<u32>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub value: f64,
    //share of the whole, in percent with one decimal
    pub share_percent: f64,
    pub color: String,
}

//breakdown of the final amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: IndexMap<String, PieSlice>,
}

//yearly breakdown, layers stacked bottom to top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub years: Vec<u32>,
    pub layers: Vec<ChartSeries>,
}

//everything a renderer needs to draw the three result charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub line: LineChart,
    pub pie: PieChart,
    pub stacked_bar: StackedBarChart,
}

impl ChartData {
    //derives chart datasets, None for an empty sequence
    pub fn from_records(records: &[YearlyRecord]) -> Option<Self> {
        let last = records.last()?;

        let years: Vec<u32> = records.iter().map(|r| r.year).collect();
        let total_amounts: Vec<f64> = records.iter().map(|r| r.total_amount).collect();
        let total_invested: Vec<f64> = records.iter().map(|r| r.total_invested).collect();
        let interest_earned: Vec<f64> = records.iter().map(|r| r.interest_earned).collect();

        let line = LineChart {
            title: "Compound Interest Growth".to_string(),
            x_label: "Years".to_string(),
            y_label: "Amount".to_string(),
            years: years.clone(),
            series: vec![
                ChartSeries::new("Total Amount", TOTAL_COLOR, total_amounts),
                ChartSeries::new("Total Invested", INVESTED_COLOR, total_invested.clone()),
                ChartSeries::new("Interest Earned", INTEREST_COLOR, interest_earned.clone()),
            ],
        };

        let whole = last.total_invested + last.interest_earned;
        let share = |value: f64| {
            if whole > 0.0 {
                (value / whole * 1000.0).round() / 10.0
            } else {
                0.0
            }
        };

        let mut slices = IndexMap::new();
        slices.insert(
            "Invested Amount".to_string(),
            PieSlice {
                value: last.total_invested,
                share_percent: share(last.total_invested),
                color: INVESTED_COLOR.to_string(),
            },
        );
        slices.insert(
            "Interest Earned".to_string(),
            PieSlice {
                value: last.interest_earned,
                share_percent: share(last.interest_earned),
                color: INTEREST_COLOR.to_string(),
            },
        );

        let pie = PieChart {
            title: "Breakdown of Final Amount".to_string(),
            slices,
        };

        let stacked_bar = StackedBarChart {
            title: "Compound Interest Growth (Stacked)".to_string(),
            x_label: "Years".to_string(),
            y_label: "Amount".to_string(),
            years,
            layers: vec![
                ChartSeries::new("Invested Amount", INVESTED_COLOR, total_invested),
                ChartSeries::new("Interest Earned", INTEREST_COLOR, interest_earned),
            ],
        };

        Some(ChartData {
            line,
            pie,
            stacked_bar,
        })
    }
}

//writes chart datasets to <folder>/chart_data/chart_series.json
//these are series for a renderer, no images are drawn
//nothing is written for an empty sequence
pub fn generate_chart_data(records: &[YearlyRecord], folder: &Path) -> Result<Option<PathBuf>> {
    let Some(charts) = ChartData::from_records(records) else {
        return Ok(None);
    };

    let chart_folder = folder.join(CHART_DATA_DIR);
    std::fs::create_dir_all(&chart_folder)
        .context(format!("Failed to create chart data folder {:?}", chart_folder))?;

    let file_path = chart_folder.join(CHART_DATA_FILE_NAME);
    let json = serde_json::to_string_pretty(&charts)?;
    std::fs::write(&file_path, json)
        .context(format!("Failed to write chart data: {:?}", file_path))?;

    Ok(Some(file_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<YearlyRecord> {
        vec![
            YearlyRecord::from_balances(1, 1200.0, 1100.0),
            YearlyRecord::from_balances(2, 1420.0, 1200.0),
        ]
    }

    #[test]
    fn empty_records_have_no_charts() {
        assert!(ChartData::from_records(&[]).is_none());
    }

    #[test]
    fn line_chart_tracks_every_year() {
        let charts = ChartData::from_records(&records()).unwrap();

        assert_eq!(charts.line.years, vec![1, 2]);
        assert_eq!(charts.line.series.len(), 3);
        assert_eq!(charts.line.series[0].label, "Total Amount");
        assert_eq!(charts.line.series[0].color, TOTAL_COLOR);
        assert_eq!(charts.line.series[0].values, vec![1200.0, 1420.0]);
    }

    #[test]
    fn pie_chart_splits_final_amount() {
        let charts = ChartData::from_records(&records()).unwrap();
        let slices: Vec<_> = charts.pie.slices.keys().cloned().collect();
        assert_eq!(slices, vec!["Invested Amount", "Interest Earned"]);

        let invested = &charts.pie.slices["Invested Amount"];
        let interest = &charts.pie.slices["Interest Earned"];
        assert_eq!(invested.value, 1200.0);
        assert_eq!(invested.share_percent, 84.5);
        assert_eq!(interest.share_percent, 15.5);
    }

    #[test]
    fn writes_series_into_chart_data_folder() {
        let dir = tempfile::tempdir().unwrap();

        let path = generate_chart_data(&records(), dir.path()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("chart_data").join("chart_series.json"));
        assert!(path.is_file());
        assert!(!dir.path().join("graphs").exists());
    }

    #[test]
    fn nothing_is_written_without_records() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(generate_chart_data(&[], dir.path()).unwrap(), None);
        assert!(!dir.path().join(CHART_DATA_DIR).exists());
    }

    #[test]
    fn stacked_layers_start_with_invested() {
        let charts = ChartData::from_records(&records()).unwrap();
        assert_eq!(charts.stacked_bar.layers[0].values, vec![1100.0, 1200.0]);
        assert_eq!(charts.stacked_bar.layers[1].values, vec![100.0, 220.0]);
    }
}
