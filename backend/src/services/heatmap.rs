//! Heatmap view: accidents per day of week and hour of day.

use log::debug;

use super::filter::{rows_for, ViewKind};
use super::palette::{DAY_OF_WEEK_FIELD, DAY_ORDER};
use super::selection::SelectionState;
use crate::api::{HeatmapCell, HeatmapViewData};
use crate::models::{AttributeValue, Record};

/// Exact column names tried, in order, before any name containing "time".
pub const TIME_FIELD_CANDIDATES: [&str; 3] = ["hour", "accident_time", "time"];

/// Column to read the hour from, if the dataset has one.
pub fn find_time_field(columns: &[String]) -> Option<&str> {
    TIME_FIELD_CANDIDATES
        .iter()
        .find_map(|c| columns.iter().find(|col| col.as_str() == *c))
        .or_else(|| columns.iter().find(|col| col.to_lowercase().contains("time")))
        .map(String::as_str)
}

/// Hour of day from a numeric hour or a `"HH:MM"`-style string.
///
/// Only the leading one or two digits of a string are read, so `"08:15"`
/// and `"8:15"` both give 8. Anything outside 0-23 is `None`.
pub fn derive_hour(value: &AttributeValue) -> Option<u8> {
    let hour = match value {
        AttributeValue::Number(n) if n.is_finite() && *n >= 0.0 => n.trunc() as u32,
        AttributeValue::Number(_) | AttributeValue::Null => return None,
        AttributeValue::Text(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take(2)
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse::<u32>().ok()?
        }
    };
    u8::try_from(hour).ok().filter(|h| *h < 24)
}

/// Canonical day name for a day-of-week cell, matched case-insensitively.
fn day_slot(record: &Record) -> Option<usize> {
    let key = record.category(DAY_OF_WEEK_FIELD)?;
    let key = key.trim();
    DAY_ORDER.iter().position(|d| d.eq_ignore_ascii_case(key))
}

pub fn compute_heatmap_view<'r, I>(
    records: I,
    columns: &[String],
    state: &SelectionState,
) -> HeatmapViewData
where
    I: IntoIterator<Item = &'r Record>,
{
    if !columns.iter().any(|c| c == DAY_OF_WEEK_FIELD) {
        return HeatmapViewData::Unavailable {
            message: format!("Heatmap needs a '{}' column", DAY_OF_WEEK_FIELD),
        };
    }
    let Some(time_field) = find_time_field(columns) else {
        return HeatmapViewData::Unavailable {
            message: "Heatmap needs an hour or time column".to_string(),
        };
    };

    let filter = rows_for(ViewKind::Heatmap, state);
    let mut grid = [[0usize; 24]; 7];
    let mut skipped = 0usize;
    for record in records.into_iter().filter(|r| filter.matches(r)) {
        match (day_slot(record), derive_hour(record.value(time_field))) {
            (Some(day), Some(hour)) => grid[day][hour as usize] += 1,
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("Heatmap skipped {} rows without a usable day or hour", skipped);
    }

    let mut cells = Vec::with_capacity(7 * 24);
    for (day, row) in DAY_ORDER.iter().zip(grid.iter()) {
        for (hour, count) in row.iter().enumerate() {
            cells.push(HeatmapCell {
                day: day.to_string(),
                hour: hour as u8,
                count: *count,
            });
        }
    }

    HeatmapViewData::Available {
        day_field: DAY_OF_WEEK_FIELD.to_string(),
        time_field: time_field.to_string(),
        days: DAY_ORDER.iter().map(|d| d.to_string()).collect(),
        hours: (0..24).collect(),
        max_count: cells.iter().map(|c| c.count).max().unwrap_or(0),
        cells,
    }
}
