//! Category ordering and palette resolution.
//!
//! Bar, pie, map legend and heatmap all read the same [`CategoryResolution`]
//! for a field, so category order and colors agree across views. Resolutions
//! are cached per (field, sample generation) in [`PaletteCache`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::data::WorkingSample;
use crate::models::Record;

pub const SEVERITY_FIELD: &str = "accident_severity";
pub const DAY_OF_WEEK_FIELD: &str = "day_of_week";

/// Severity levels, least to most severe.
pub const SEVERITY_ORDER: [&str; 3] = ["slight", "serious", "fatal"];
/// Colors for [`SEVERITY_ORDER`], index-aligned.
pub const SEVERITY_COLORS: [&str; 3] = ["#84c3ff", "#627cf3", "#E44848"];
/// Severity values outside the canonical list.
pub const SEVERITY_FALLBACK_COLOR: &str = "#bdbdbd";
/// Palette for two-valued fields, in domain order.
pub const BINARY_COLORS: [&str; 2] = ["#e63946", "#0694d6"];

pub const DAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Which palette rule produced a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteRegime {
    Severity,
    Binary,
    /// Colors are left to the renderer.
    Default,
}

/// Domain-to-color mapping for one categorical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub regime: PaletteRegime,
    pub domain: Vec<String>,
    /// Index-aligned with `domain`; `None` for the default regime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<String>>,
}

impl ColorScale {
    /// Explicit color for a category, if the regime assigns one.
    pub fn color_for(&self, category: &str) -> Option<&str> {
        let range = self.range.as_ref()?;
        let idx = self.domain.iter().position(|d| d == category)?;
        range.get(idx).map(String::as_str)
    }
}

/// Ordered domain and color scale for a field over one sample generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResolution {
    pub field: String,
    pub domain: Vec<String>,
    pub scale: ColorScale,
}

impl CategoryResolution {
    pub fn contains(&self, category: &str) -> bool {
        self.domain.iter().any(|d| d == category)
    }
}

/// Canonical order for fields that have one.
pub fn canonical_order(field: &str) -> Option<&'static [&'static str]> {
    match field {
        SEVERITY_FIELD => Some(&SEVERITY_ORDER),
        DAY_OF_WEEK_FIELD => Some(&DAY_ORDER),
        _ => None,
    }
}

fn canonical_index(order: &[&str], value: &str) -> Option<usize> {
    let value = value.trim();
    order.iter().position(|c| c.eq_ignore_ascii_case(value))
}

/// Distinct non-null categories of `field`, canonically ordered where known.
///
/// Values outside the canonical list follow in first-seen order.
pub fn category_domain<'a, I>(field: &str, records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen = HashSet::new();
    let mut first_seen = Vec::new();
    for record in records {
        if let Some(key) = record.category(field) {
            if seen.insert(key.clone()) {
                first_seen.push(key);
            }
        }
    }

    let Some(order) = canonical_order(field) else {
        return first_seen;
    };

    let mut slots: Vec<Option<String>> = vec![None; order.len()];
    let mut leftovers = Vec::new();
    for value in first_seen {
        match canonical_index(order, &value) {
            Some(i) if slots[i].is_none() => slots[i] = Some(value),
            _ => leftovers.push(value),
        }
    }
    slots.into_iter().flatten().chain(leftovers).collect()
}

/// Build the color scale for an already ordered domain.
pub fn color_scale(field: &str, domain: &[String]) -> ColorScale {
    if field == SEVERITY_FIELD {
        let range = domain
            .iter()
            .map(|value| {
                canonical_index(&SEVERITY_ORDER, value)
                    .map(|i| SEVERITY_COLORS[i])
                    .unwrap_or(SEVERITY_FALLBACK_COLOR)
                    .to_string()
            })
            .collect();
        return ColorScale {
            regime: PaletteRegime::Severity,
            domain: domain.to_vec(),
            range: Some(range),
        };
    }

    if domain.len() == 2 {
        return ColorScale {
            regime: PaletteRegime::Binary,
            domain: domain.to_vec(),
            range: Some(BINARY_COLORS.iter().map(|c| c.to_string()).collect()),
        };
    }

    ColorScale {
        regime: PaletteRegime::Default,
        domain: domain.to_vec(),
        range: None,
    }
}

/// Resolve domain and palette for `field` over `records`.
pub fn resolve<'a, I>(field: &str, records: I) -> CategoryResolution
where
    I: IntoIterator<Item = &'a Record>,
{
    let domain = category_domain(field, records);
    let scale = color_scale(field, &domain);
    CategoryResolution {
        field: field.to_string(),
        domain,
        scale,
    }
}

/// Resolutions for the current sample generation.
#[derive(Debug, Default)]
pub struct PaletteCache {
    generation: Option<u64>,
    entries: HashMap<String, Arc<CategoryResolution>>,
}

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached resolution for `field`, resolving on first use per generation.
    pub fn get_or_resolve(
        &mut self,
        field: &str,
        sample: &WorkingSample,
    ) -> Arc<CategoryResolution> {
        if self.generation != Some(sample.generation()) {
            self.entries.clear();
            self.generation = Some(sample.generation());
        }

        if let Some(found) = self.entries.get(field) {
            return Arc::clone(found);
        }

        let resolution = Arc::new(resolve(field, sample.iter()));
        debug!(
            "Resolved {} categories for '{}' (generation {})",
            resolution.domain.len(),
            field,
            sample.generation()
        );
        self.entries.insert(field.to_string(), Arc::clone(&resolution));
        resolution
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RowId;
    use crate::data::Dataset;
    use crate::models::AttributeValue;
    use proptest::prelude::*;

    fn records(field: &str, values: &[&str]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut attrs = HashMap::new();
                attrs.insert(field.to_string(), AttributeValue::from(*v));
                Record::new(RowId::new(i), 51.0, -1.0, attrs)
            })
            .collect()
    }

    #[test]
    fn test_severity_domain_is_canonical() {
        let recs = records(SEVERITY_FIELD, &["fatal", "slight", "slight"]);
        let res = resolve(SEVERITY_FIELD, &recs);
        assert_eq!(res.domain, vec!["slight", "fatal"]);
        assert_eq!(res.scale.regime, PaletteRegime::Severity);
    }

    #[test]
    fn test_fatal_color_is_stable_across_domains() {
        let a = resolve(SEVERITY_FIELD, &records(SEVERITY_FIELD, &["fatal", "slight"]));
        let b = resolve(
            SEVERITY_FIELD,
            &records(SEVERITY_FIELD, &["serious", "fatal", "slight"]),
        );
        assert_eq!(a.scale.color_for("fatal"), Some("#E44848"));
        assert_eq!(b.scale.color_for("fatal"), Some("#E44848"));
        assert_eq!(b.scale.color_for("serious"), Some("#627cf3"));
    }

    #[test]
    fn test_day_order_with_leftovers() {
        let recs = records(
            DAY_OF_WEEK_FIELD,
            &["Sunday", "Holiday", "Monday", "Unknown", "Wednesday"],
        );
        let domain = category_domain(DAY_OF_WEEK_FIELD, &recs);
        assert_eq!(
            domain,
            vec!["Monday", "Wednesday", "Sunday", "Holiday", "Unknown"]
        );
    }

    #[test]
    fn test_canonical_match_keeps_original_spelling() {
        let recs = records(SEVERITY_FIELD, &["Fatal", "Slight"]);
        let res = resolve(SEVERITY_FIELD, &recs);
        assert_eq!(res.domain, vec!["Slight", "Fatal"]);
        assert_eq!(res.scale.color_for("Fatal"), Some("#E44848"));
    }

    #[test]
    fn test_unknown_field_keeps_first_seen_order_and_skips_null() {
        let mut recs = records("weather_conditions", &["Raining", "Fine", "Raining", "Snowing"]);
        recs.push(Record::new(RowId::new(9), 51.0, -1.0, HashMap::new()));
        let res = resolve("weather_conditions", &recs);
        assert_eq!(res.domain, vec!["Raining", "Fine", "Snowing"]);
        assert_eq!(res.scale.regime, PaletteRegime::Default);
        assert!(res.scale.range.is_none());
        assert_eq!(res.scale.color_for("Fine"), None);
    }

    #[test]
    fn test_two_valued_field_gets_binary_palette() {
        let res = resolve(
            "urban_or_rural_area",
            &records("urban_or_rural_area", &["Urban", "Rural"]),
        );
        assert_eq!(res.scale.regime, PaletteRegime::Binary);
        assert_eq!(res.scale.color_for("Urban"), Some("#e63946"));
        assert_eq!(res.scale.color_for("Rural"), Some("#0694d6"));
    }

    #[test]
    fn test_severity_with_two_values_stays_severity_regime() {
        let res = resolve(SEVERITY_FIELD, &records(SEVERITY_FIELD, &["serious", "slight"]));
        assert_eq!(res.scale.regime, PaletteRegime::Severity);
        assert_eq!(res.scale.color_for("slight"), Some("#84c3ff"));
    }

    #[test]
    fn test_cache_reuses_until_generation_changes() {
        let recs = records(SEVERITY_FIELD, &["fatal", "slight"]);
        let ds = Arc::new(Dataset::from_records(vec![SEVERITY_FIELD.to_string()], recs));
        let gen1 = WorkingSample::draw(Arc::clone(&ds), 1_000, 42, 1);
        let gen2 = WorkingSample::draw(Arc::clone(&ds), 1_000, 42, 2);

        let mut cache = PaletteCache::new();
        let a = cache.get_or_resolve(SEVERITY_FIELD, &gen1);
        let b = cache.get_or_resolve(SEVERITY_FIELD, &gen1);
        assert!(Arc::ptr_eq(&a, &b));

        let c = cache.get_or_resolve(SEVERITY_FIELD, &gen2);
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(a.domain, c.domain);
        assert_eq!(cache.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_severity_domain_is_canonical_subsequence(
            picks in proptest::collection::vec(0usize..5, 0..40)
        ) {
            let pool = ["slight", "serious", "fatal", "other", "n/a"];
            let values: Vec<&str> = picks.iter().map(|&i| pool[i]).collect();
            let recs = records(SEVERITY_FIELD, &values);
            let domain = category_domain(SEVERITY_FIELD, &recs);

            let canonical: Vec<&str> = SEVERITY_ORDER
                .iter()
                .copied()
                .filter(|c| values.contains(c))
                .collect();
            let mut leftovers: Vec<&str> = Vec::new();
            for v in &values {
                if !SEVERITY_ORDER.contains(v) && !leftovers.contains(v) {
                    leftovers.push(*v);
                }
            }
            let expected: Vec<String> = canonical
                .into_iter()
                .chain(leftovers)
                .map(str::to_string)
                .collect();
            prop_assert_eq!(domain, expected);
        }
    }
}
