//! Dataset loading from CSV and JSON sources.
//!
//! The loaders turn raw bytes into a [`Dataset`]. Cell typing is decided per
//! cell: empty cells are null, anything that parses as a finite `f64` is
//! numeric and everything else is text.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use super::dataset::Dataset;
use crate::models::AttributeValue;

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }
}

/// Unified interface for loading accident tables.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a dataset from a file (format from the extension).
    pub fn load_from_file(path: &Path) -> Result<Dataset> {
        let format = DatasetFormat::from_path(path)?;
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
        Ok(Self::parse(&bytes, format)?.with_source(path))
    }

    /// Parse raw bytes in the given format.
    pub fn parse(bytes: &[u8], format: DatasetFormat) -> Result<Dataset> {
        match format {
            DatasetFormat::Csv => Self::parse_csv(bytes),
            DatasetFormat::Json => Self::parse_json(bytes),
        }
    }

    /// Parse CSV with a header row.
    pub fn parse_csv(bytes: &[u8]) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (line, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Malformed CSV record {}", line + 1))?;
            let row: HashMap<String, AttributeValue> = columns
                .iter()
                .zip(record.iter())
                .map(|(name, cell)| (name.clone(), AttributeValue::from_raw(cell)))
                .collect();
            rows.push(row);
        }

        Ok(Dataset::from_rows(columns, rows)?)
    }

    /// Parse a JSON array of flat objects.
    pub fn parse_json(bytes: &[u8]) -> Result<Dataset> {
        let objects: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_slice(bytes).context("Expected a JSON array of objects")?;

        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(objects.len());
        for object in objects {
            let mut row = HashMap::with_capacity(object.len());
            for (key, value) in object {
                if !columns.contains(&key) {
                    columns.push(key.clone());
                }
                row.insert(key, json_to_attribute(value));
            }
            rows.push(row);
        }

        Ok(Dataset::from_rows(columns, rows)?)
    }
}

fn json_to_attribute(value: serde_json::Value) -> AttributeValue {
    use serde_json::Value;
    match value {
        Value::Null => AttributeValue::Null,
        Value::Number(n) => n
            .as_f64()
            .map(AttributeValue::Number)
            .unwrap_or(AttributeValue::Null),
        Value::String(s) if s.is_empty() => AttributeValue::Null,
        Value::String(s) => AttributeValue::Text(s),
        Value::Bool(b) => AttributeValue::Text(b.to_string()),
        other => AttributeValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "accident_severity,day_of_week,time,latitude,longitude\n\
slight,Monday,08:15,51.5,-0.12\n\
fatal,Tuesday,17:40,,-1.0\n\
serious,Sunday,23:05,53.48,-2.24\n";

    #[test]
    fn test_parse_csv_types_cells_and_drops_rows() {
        let ds = DatasetLoader::parse_csv(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dropped_rows(), 1);
        assert_eq!(ds.columns()[0], "accident_severity");

        let first = &ds.records()[0];
        assert_eq!(first.value("time").as_text(), Some("08:15"));
        assert_eq!(first.latitude, 51.5);
    }

    #[test]
    fn test_parse_json_records() {
        let json = r#"[
            {"latitude": 51.5, "longitude": -0.12, "accident_severity": "slight", "number_of_vehicles": 2},
            {"latitude": "52.0", "longitude": "-1.5", "accident_severity": "fatal", "number_of_vehicles": null},
            {"latitude": null, "longitude": -1.0, "accident_severity": "serious"}
        ]"#;
        let ds = DatasetLoader::parse_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].value("number_of_vehicles").as_f64(), Some(2.0));
        assert!(ds.records()[1].value("number_of_vehicles").is_null());
        assert!(ds.has_column("accident_severity"));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("a/Road_Accident_Data.CSV")).unwrap(),
            DatasetFormat::Csv
        );
        assert!(DatasetFormat::from_path(Path::new("data.parquet")).is_err());
        assert!(DatasetFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_load_from_file_sets_source() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let ds = DatasetLoader::load_from_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.summary().source.is_some());
    }

    #[test]
    fn test_missing_coordinates_fail() {
        let result = DatasetLoader::parse_csv(b"a,b\n1,2\n");
        assert!(result.is_err());
    }
}
