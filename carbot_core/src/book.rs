//! Scraped per-model attribute records.
//!
//! The [`SpecBook`] is built once by the scraper before the interactive
//! loop starts and is read-only afterward. Keys are lowercased model
//! names; the record keeps the display-cased name for responses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute bundle for one automobile model. Values are free-form
/// strings taken from the source table; a missing column leaves the
/// field `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Display-cased model name, as printed in responses.
    pub name: String,
    /// Production duration, e.g. `"2011-2021"`.
    pub production: Option<String>,
    /// Engine description, e.g. `"V12"`.
    pub engine: Option<String>,
    /// Top speed, e.g. `"350 km/h"`.
    pub top_speed: Option<String>,
}

impl ModelRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            production: None,
            engine: None,
            top_speed: None,
        }
    }

    /// The value stored for `attr`, if any.
    #[must_use]
    pub fn attribute(&self, attr: Attribute) -> Option<&str> {
        match attr {
            Attribute::Production => self.production.as_deref(),
            Attribute::Engine => self.engine.as_deref(),
            Attribute::TopSpeed => self.top_speed.as_deref(),
        }
    }
}

/// The three queryable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Production,
    Engine,
    TopSpeed,
}

impl Attribute {
    /// Human-readable label used in "not recorded" responses.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Production => "production duration",
            Self::Engine => "engine type",
            Self::TopSpeed => "top speed",
        }
    }
}

/// Outcome of an attribute lookup. All three cases are normal results;
/// the responder turns each into a printed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Model known, attribute present.
    Found { record: &'a ModelRecord, value: &'a str },
    /// Model known, but the source table had no value for this attribute.
    MissingAttribute(&'a ModelRecord),
    /// No record under this key.
    UnknownModel,
}

/// Mapping from lowercased model name to its record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecBook {
    records: HashMap<String, ModelRecord>,
}

impl SpecBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.records.contains_key(&model.to_lowercase())
    }

    /// Insert a record under the lowercased form of `key`, replacing any
    /// existing entry. The scraper checks [`Self::contains`] first to
    /// keep the first occurrence across tables.
    pub fn insert(&mut self, key: &str, record: ModelRecord) {
        self.records.insert(key.to_lowercase(), record);
    }

    /// Look up a record by model name (lowercased before lookup).
    #[must_use]
    pub fn record(&self, model: &str) -> Option<&ModelRecord> {
        self.records.get(&model.to_lowercase())
    }

    /// Look up one attribute of one model.
    #[must_use]
    pub fn attribute(&self, model: &str, attr: Attribute) -> Lookup<'_> {
        let Some(record) = self.record(model) else {
            return Lookup::UnknownModel;
        };
        record.attribute(attr).map_or(
            Lookup::MissingAttribute(record),
            |value| Lookup::Found { record, value },
        )
    }

    /// Display names of all registered models, sorted.
    #[must_use]
    pub fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.values().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
