//! Core data model: records, attribute values and field descriptors.

pub mod field;
pub mod record;

pub use field::{infer_kind, EncodingDescriptor, FieldDescriptor, FieldKind};
pub use record::{AttributeValue, Record, LATITUDE_FIELD, LONGITUDE_FIELD};
