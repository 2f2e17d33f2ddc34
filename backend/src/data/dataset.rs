//! In-memory accident table.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::api::RowId;
use crate::error::{ErrorContext, ExplorerError, ExplorerResult};
use crate::models::{infer_kind, AttributeValue, FieldKind, Record, LATITUDE_FIELD, LONGITUDE_FIELD};

/// The loaded table. Rows without usable coordinates never make it in.
///
/// Column kinds are inferred once over every kept row, so they stay fixed
/// for the lifetime of the dataset whatever sample is drawn from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: Option<PathBuf>,
    columns: Vec<String>,
    kinds: HashMap<String, FieldKind>,
    records: Vec<Record>,
    dropped_rows: usize,
    loaded_at: DateTime<Utc>,
}

/// Lightweight description of a dataset for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub source: Option<String>,
    pub columns: Vec<String>,
    pub row_count: usize,
    pub dropped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Coerce a coordinate cell to a finite number.
pub fn coerce_coordinate(value: &AttributeValue) -> Option<f64> {
    match value {
        AttributeValue::Number(v) if v.is_finite() => Some(*v),
        AttributeValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

impl Dataset {
    /// Build a dataset from raw rows, dropping those whose coordinates fail coercion.
    ///
    /// `columns` is the column order as it appeared in the source.
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<HashMap<String, AttributeValue>>,
    ) -> ExplorerResult<Self> {
        for required in [LATITUDE_FIELD, LONGITUDE_FIELD] {
            if !columns.iter().any(|c| c == required) {
                return Err(ExplorerError::load_with_context(
                    format!("Missing required column: {}", required),
                    ErrorContext::new("build_dataset").with_entity("column"),
                ));
            }
        }

        let total = rows.len();
        let mut records = Vec::with_capacity(total);
        for attributes in rows {
            let lat = attributes.get(LATITUDE_FIELD).and_then(coerce_coordinate);
            let lon = attributes.get(LONGITUDE_FIELD).and_then(coerce_coordinate);
            if let (Some(lat), Some(lon)) = (lat, lon) {
                let id = RowId::new(records.len());
                records.push(Record::new(id, lat, lon, attributes));
            }
        }

        let dropped_rows = total - records.len();
        if dropped_rows > 0 {
            debug!(
                "Dropped {} of {} rows with missing or invalid coordinates",
                dropped_rows, total
            );
        }

        Ok(Self {
            source: None,
            kinds: infer_kinds(&columns, &records),
            columns,
            records,
            dropped_rows,
            loaded_at: Utc::now(),
        })
    }

    /// Build a dataset from records that already carry valid coordinates.
    pub fn from_records(columns: Vec<String>, records: Vec<Record>) -> Self {
        let mut columns = columns;
        for required in [LATITUDE_FIELD, LONGITUDE_FIELD] {
            if !columns.iter().any(|c| c == required) {
                columns.push(required.to_string());
            }
        }
        Self {
            source: None,
            kinds: infer_kinds(&columns, &records),
            columns,
            records,
            dropped_rows: 0,
            loaded_at: Utc::now(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Kind of a column, or `None` when the column does not exist.
    pub fn kind(&self, name: &str) -> Option<FieldKind> {
        self.kinds.get(name).copied()
    }

    pub fn kinds(&self) -> &HashMap<String, FieldKind> {
        &self.kinds
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            source: self.source.as_ref().map(|p| p.display().to_string()),
            columns: self.columns.clone(),
            row_count: self.records.len(),
            dropped_rows: self.dropped_rows,
            loaded_at: self.loaded_at,
        }
    }
}

fn infer_kinds(columns: &[String], records: &[Record]) -> HashMap<String, FieldKind> {
    columns
        .iter()
        .map(|c| (c.clone(), infer_kind(c, records)))
        .collect()
}
