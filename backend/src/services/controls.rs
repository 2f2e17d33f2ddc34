//! Control bounds, field choices and the sampling caption.

use crate::api::{FieldOptions, OpacityControl, SampleSizeControl};
use crate::data::MIN_SAMPLE_SIZE;
use crate::error::{ErrorContext, ExplorerError, ExplorerResult};

use super::fields::NONE_OPTION;

pub const MIN_OPACITY: f64 = 0.01;
pub const MAX_OPACITY: f64 = 1.0;
pub const DEFAULT_OPACITY: f64 = 0.5;
pub const OPACITY_STEP: f64 = 0.01;
/// Datasets above this many rows get the coarse sample-size step.
pub const FINE_STEP_LIMIT: usize = 200_000;

/// Sample size slider for a dataset of `dataset_len` rows.
pub fn sample_size_control(dataset_len: usize, requested: usize) -> SampleSizeControl {
    let min = MIN_SAMPLE_SIZE.min(dataset_len);
    SampleSizeControl {
        min,
        max: dataset_len,
        step: if dataset_len <= FINE_STEP_LIMIT { 1_000 } else { 5_000 },
        default: default_sample_size(dataset_len),
        value: requested.max(MIN_SAMPLE_SIZE).min(dataset_len),
    }
}

pub fn default_sample_size(dataset_len: usize) -> usize {
    MIN_SAMPLE_SIZE.min(dataset_len)
}

pub fn opacity_control(value: f64) -> OpacityControl {
    OpacityControl {
        min: MIN_OPACITY,
        max: MAX_OPACITY,
        step: OPACITY_STEP,
        default: DEFAULT_OPACITY,
        value,
    }
}

/// Clamp a point opacity into `[0.01, 1.0]`. NaN is rejected.
pub fn clamp_opacity(value: f64) -> ExplorerResult<f64> {
    if value.is_nan() {
        return Err(ExplorerError::validation_with_context(
            "Point opacity must be a number",
            ErrorContext::new("set_opacity").with_entity("opacity"),
        ));
    }
    Ok(value.clamp(MIN_OPACITY, MAX_OPACITY))
}

/// Every column for color and pie; shape and size also offer `(none)`.
pub fn field_options(columns: &[String]) -> FieldOptions {
    let with_none: Vec<String> = std::iter::once(NONE_OPTION.to_string())
        .chain(columns.iter().cloned())
        .collect();
    FieldOptions {
        color: columns.to_vec(),
        pie: columns.to_vec(),
        shape: with_none.clone(),
        size: with_none,
    }
}

/// `1234567` => `"1,234,567"`.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Caption shown under the sample slider.
pub fn sample_caption(dataset_len: usize, sample_len: usize) -> String {
    if sample_len < dataset_len {
        format!(
            "Loaded {} accidents. Showing a random sample of {} for performance.",
            format_thousands(dataset_len),
            format_thousands(sample_len)
        )
    } else {
        format!(
            "Loaded all {} accidents with valid coordinates.",
            format_thousands(dataset_len)
        )
    }
}
