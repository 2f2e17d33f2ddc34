//! Field descriptors and encoding channel descriptors.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Semantic type of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Quantitative,
    Nominal,
    Ordinal,
}

impl FieldKind {
    /// One-letter shorthand used in `field:K` encoding strings.
    pub fn shorthand(&self) -> &'static str {
        match self {
            FieldKind::Quantitative => "Q",
            FieldKind::Nominal => "N",
            FieldKind::Ordinal => "O",
        }
    }
}

/// Quantitative when every non-null value in the column is numeric, nominal otherwise.
///
/// A column with no values at all is nominal.
pub fn infer_kind<'a, I>(field: &str, records: I) -> FieldKind
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut saw_value = false;
    for record in records {
        let value = record.value(field);
        if value.is_null() {
            continue;
        }
        if !value.is_numeric() {
            return FieldKind::Nominal;
        }
        saw_value = true;
    }
    if saw_value {
        FieldKind::Quantitative
    } else {
        FieldKind::Nominal
    }
}

/// A column name together with its inferred kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// `name:K` shorthand, e.g. `accident_severity:N`.
    pub fn shorthand(&self) -> String {
        format!("{}:{}", self.name, self.kind.shorthand())
    }
}

/// Encoding or tooltip entry handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingDescriptor {
    pub field: String,
    pub kind: FieldKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl EncodingDescriptor {
    /// Descriptor titled after the field itself.
    pub fn from_field(descriptor: &FieldDescriptor) -> Self {
        Self {
            field: descriptor.name.clone(),
            kind: descriptor.kind,
            title: descriptor.name.clone(),
            format: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand() {
        let d = FieldDescriptor::new("number_of_vehicles", FieldKind::Quantitative);
        assert_eq!(d.shorthand(), "number_of_vehicles:Q");
        assert_eq!(FieldKind::Ordinal.shorthand(), "O");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&FieldKind::Nominal).unwrap();
        assert_eq!(json, "\"nominal\"");
    }

    #[test]
    fn test_encoding_descriptor_builders() {
        let d = FieldDescriptor::new("latitude", FieldKind::Quantitative);
        let enc = EncodingDescriptor::from_field(&d).with_format(".4f");
        assert_eq!(enc.title, "latitude");
        assert_eq!(enc.format.as_deref(), Some(".4f"));
    }
}
