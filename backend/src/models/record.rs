//! Dataset rows and their attribute values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::RowId;

/// Column holding the point latitude.
pub const LATITUDE_FIELD: &str = "latitude";
/// Column holding the point longitude.
pub const LONGITUDE_FIELD: &str = "longitude";

static MISSING: AttributeValue = AttributeValue::Null;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
    Null,
}

impl AttributeValue {
    /// Parse a raw text cell: empty means null, anything `f64` accepts is numeric.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return AttributeValue::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => AttributeValue::Number(v),
            _ => AttributeValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AttributeValue::Number(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Key identifying this value as a category, `None` for null.
    ///
    /// Integral numbers render without a fractional part so that `3.0` and a
    /// picked `"3"` refer to the same category.
    pub fn category_key(&self) -> Option<String> {
        match self {
            AttributeValue::Null => None,
            AttributeValue::Text(s) => Some(s.clone()),
            AttributeValue::Number(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    Some(format!("{}", *v as i64))
                } else {
                    Some(v.to_string())
                }
            }
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Number(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

/// One accident with valid coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RowId,
    pub latitude: f64,
    pub longitude: f64,
    /// Every column of the row, coordinates included.
    pub attributes: HashMap<String, AttributeValue>,
}

impl Record {
    /// Build a record, mirroring the coordinates into the attribute map.
    pub fn new(
        id: RowId,
        latitude: f64,
        longitude: f64,
        mut attributes: HashMap<String, AttributeValue>,
    ) -> Self {
        attributes.insert(LATITUDE_FIELD.to_string(), AttributeValue::Number(latitude));
        attributes.insert(LONGITUDE_FIELD.to_string(), AttributeValue::Number(longitude));
        Self {
            id,
            latitude,
            longitude,
            attributes,
        }
    }

    /// Value of `field`, null when the row has no such column.
    pub fn value(&self, field: &str) -> &AttributeValue {
        self.attributes.get(field).unwrap_or(&MISSING)
    }

    pub fn category(&self, field: &str) -> Option<String> {
        self.value(field).category_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_classifies_cells() {
        assert_eq!(AttributeValue::from_raw(""), AttributeValue::Null);
        assert_eq!(AttributeValue::from_raw("  "), AttributeValue::Null);
        assert_eq!(AttributeValue::from_raw("51.5"), AttributeValue::Number(51.5));
        assert_eq!(
            AttributeValue::from_raw("Monday"),
            AttributeValue::Text("Monday".to_string())
        );
        // "NaN" parses as f64 but is not a usable number
        assert_eq!(
            AttributeValue::from_raw("NaN"),
            AttributeValue::Text("NaN".to_string())
        );
    }

    #[test]
    fn test_category_key_for_integral_numbers() {
        assert_eq!(AttributeValue::Number(3.0).category_key().as_deref(), Some("3"));
        assert_eq!(AttributeValue::Number(2.5).category_key().as_deref(), Some("2.5"));
        assert_eq!(AttributeValue::Null.category_key(), None);
    }

    #[test]
    fn test_record_exposes_coordinates_as_attributes() {
        let record = Record::new(RowId::new(0), 51.5, -0.12, HashMap::new());
        assert_eq!(record.value(LATITUDE_FIELD).as_f64(), Some(51.5));
        assert_eq!(record.value(LONGITUDE_FIELD).as_f64(), Some(-0.12));
        assert!(record.value("weather_conditions").is_null());
    }
}
