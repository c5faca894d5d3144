use crate::engine::YearlyRecord;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const CSV_FILE_NAME: &str = "compound_interest_data.csv";
pub const JSON_FILE_NAME: &str = "compound_interest_data.json";

//writes the yearly records as csv into folder
//columns: Year, Total Amount, Total Invested, Interest Earned
pub fn save_to_csv(records: &[YearlyRecord], folder: &Path) -> Result<PathBuf> {
    let file_path = folder.join(CSV_FILE_NAME);
    let file = File::create(&file_path)
        .context(format!("Failed to create CSV file: {:?}", file_path))?;

    //no rows means no header either
    if records.is_empty() {
        return Ok(file_path);
    }

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);
    for record in records {
        writer
            .serialize(record)
            .context(format!("Failed to write CSV record for year {}", record.year))?;
    }
    writer.flush()?;

    Ok(file_path)
}

//writes the yearly records as a json array into folder
pub fn save_to_json(records: &[YearlyRecord], folder: &Path) -> Result<PathBuf> {
    let file_path = folder.join(JSON_FILE_NAME);
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(&file_path, json)
        .context(format!("Failed to write JSON file: {:?}", file_path))?;
    Ok(file_path)
}

//loads yearly records back from an exported csv file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<YearlyRecord>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open CSV file: {:?}", path))?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let record: YearlyRecord =
            result.context(format!("Failed to parse CSV record at line {}", index + 2))?;
        records.push(record);
    }

    Ok(records)
}
