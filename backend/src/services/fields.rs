//! Field binding: column names to kinds, encodings and tooltips.

use log::warn;
use std::collections::HashMap;

use super::palette::{DAY_OF_WEEK_FIELD, SEVERITY_FIELD};
use crate::data::Dataset;
use crate::models::{
    EncodingDescriptor, FieldDescriptor, FieldKind, LATITUDE_FIELD, LONGITUDE_FIELD,
};

/// Selector entry meaning "no field".
pub const NONE_OPTION: &str = "(none)";
/// Format applied to coordinate tooltips.
pub const COORDINATE_FORMAT: &str = ".4f";
pub const COUNT_FORMAT: &str = ",";
pub const PERCENT_FORMAT: &str = ".1%";

/// Default map/bar color field: severity, then day of week, then the first column.
pub fn default_color_field(columns: &[String]) -> Option<String> {
    [SEVERITY_FIELD, DAY_OF_WEEK_FIELD]
        .into_iter()
        .find(|f| columns.iter().any(|c| c == f))
        .map(str::to_string)
        .or_else(|| columns.first().cloned())
}

/// Default pie field: day of week, then the color default.
pub fn default_pie_field(columns: &[String]) -> Option<String> {
    if columns.iter().any(|c| c == DAY_OF_WEEK_FIELD) {
        Some(DAY_OF_WEEK_FIELD.to_string())
    } else {
        default_color_field(columns)
    }
}

/// Column kinds and encodings for one dataset.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    kinds: HashMap<String, FieldKind>,
}

impl FieldResolver {
    /// Bind against the kinds the dataset inferred over all of its rows.
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            kinds: dataset.kinds().clone(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Descriptor for color and tooltip use.
    pub fn bind(&self, name: &str) -> FieldDescriptor {
        let kind = self.kinds.get(name).copied().unwrap_or(FieldKind::Nominal);
        FieldDescriptor::new(name, kind)
    }

    /// Shape channels are always nominal.
    pub fn bind_shape(&self, name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, FieldKind::Nominal)
    }

    /// Size channels promote nominal fields to ordinal.
    pub fn bind_size(&self, name: &str) -> FieldDescriptor {
        let mut descriptor = self.bind(name);
        if descriptor.kind == FieldKind::Nominal {
            descriptor.kind = FieldKind::Ordinal;
        }
        descriptor
    }

    /// Categorical charts treat any field as nominal.
    pub fn bind_categorical(&self, name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, FieldKind::Nominal)
    }

    /// Validate a required field name, falling back to `fallback` when unknown.
    pub fn resolve_field(&self, requested: Option<&str>, fallback: &str) -> String {
        match requested {
            Some(name) if self.has_field(name) => name.to_string(),
            Some(name) => {
                warn!("Unknown field '{}', falling back to '{}'", name, fallback);
                fallback.to_string()
            }
            None => fallback.to_string(),
        }
    }

    /// Validate an optional field name; `(none)` and unknown names mean unset.
    pub fn resolve_optional(&self, requested: Option<&str>) -> Option<String> {
        match requested {
            None => None,
            Some(NONE_OPTION) | Some("") => None,
            Some(name) if self.has_field(name) => Some(name.to_string()),
            Some(name) => {
                warn!("Unknown optional field '{}', leaving it unset", name);
                None
            }
        }
    }

    pub fn color_encoding(&self, field: &str) -> EncodingDescriptor {
        EncodingDescriptor::from_field(&self.bind(field))
    }

    pub fn shape_encoding(&self, field: &str) -> EncodingDescriptor {
        EncodingDescriptor::from_field(&self.bind_shape(field))
    }

    pub fn size_encoding(&self, field: &str) -> EncodingDescriptor {
        EncodingDescriptor::from_field(&self.bind_size(field))
    }

    /// Map tooltip: color, shape and size fields, then both coordinates.
    pub fn map_tooltips(
        &self,
        color: &str,
        shape: Option<&str>,
        size: Option<&str>,
    ) -> Vec<EncodingDescriptor> {
        let mut tooltips = vec![self.color_encoding(color)];
        if let Some(shape) = shape {
            tooltips.push(self.shape_encoding(shape));
        }
        if let Some(size) = size {
            tooltips.push(self.size_encoding(size));
        }
        for coord in [LATITUDE_FIELD, LONGITUDE_FIELD] {
            tooltips.push(
                EncodingDescriptor::from_field(&FieldDescriptor::new(
                    coord,
                    FieldKind::Quantitative,
                ))
                .with_format(COORDINATE_FORMAT),
            );
        }
        tooltips
    }

    pub fn bar_tooltips(&self, field: &str) -> Vec<EncodingDescriptor> {
        vec![
            EncodingDescriptor::from_field(&self.bind_categorical(field)),
            count_tooltip(),
        ]
    }

    pub fn pie_tooltips(&self, field: &str) -> Vec<EncodingDescriptor> {
        vec![
            EncodingDescriptor::from_field(&self.bind_categorical(field)),
            count_tooltip(),
            EncodingDescriptor::from_field(&FieldDescriptor::new(
                "percent",
                FieldKind::Quantitative,
            ))
            .with_title("Percent")
            .with_format(PERCENT_FORMAT),
        ]
    }
}

fn count_tooltip() -> EncodingDescriptor {
    EncodingDescriptor::from_field(&FieldDescriptor::new("count", FieldKind::Quantitative))
        .with_title("Count")
        .with_format(COUNT_FORMAT)
}
