use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Indicator name -> value for one area.
pub type AreaRecord = IndexMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioMetadata {
    /// Display name.
    pub short: String,
}

/// One modelling run: indicator values for every area.
///
/// Areas keep insertion order, which is the iteration order used when two
/// scenarios are compared area by area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub metadata: ScenarioMetadata,
    #[serde(default)]
    pub values: IndexMap<String, AreaRecord>,
}

impl Scenario {
    #[must_use]
    pub fn new(short: impl Into<String>) -> Self {
        Self {
            metadata: ScenarioMetadata {
                short: short.into(),
            },
            values: IndexMap::new(),
        }
    }

    /// Adds (or replaces) one area record, keeping the first insertion position.
    #[must_use]
    pub fn with_area(mut self, area_id: impl Into<String>, record: AreaRecord) -> Self {
        self.values.insert(area_id.into(), record);
        self
    }

    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.metadata.short
    }

    #[must_use]
    pub fn area_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of `indicator` for one area. Missing areas or fields read as `NaN`.
    #[must_use]
    pub fn value(&self, area_id: &str, indicator: &str) -> f64 {
        self.values
            .get(area_id)
            .and_then(|record| record.get(indicator))
            .copied()
            .unwrap_or(f64::NAN)
    }

    pub fn area_ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Builds an [`AreaRecord`] from `(indicator, value)` pairs.
#[must_use]
pub fn area_record<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> AreaRecord {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}
