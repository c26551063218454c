// Sensor reading domain models
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An open-ended set of named sensor measurements. Field values are always
/// numeric; anything that cannot be read as a number carries the NaN
/// sentinel instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Reading {
    fields: BTreeMap<String, f64>,
}

/// One parsed dataset record: a reading built from a CSV row.
pub type DatasetRow = Reading;

impl Reading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.fields.insert(name.into(), value);
    }

    /// Value of a named field, NaN when the field is absent.
    pub fn value(&self, name: &str) -> f64 {
        self.fields.get(name).copied().unwrap_or(f64::NAN)
    }
}

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let fields = raw
            .into_iter()
            .map(|(name, value)| {
                let coerced = coerce_value(&value);
                (name, coerced)
            })
            .collect();
        Ok(Self { fields })
    }
}

/// Coerce a raw CSV cell to a number. Empty and non-numeric cells become
/// NaN, never an error.
pub fn coerce_cell(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Coerce an arbitrary JSON value to a number. Numbers pass through,
/// numeric strings parse, everything else becomes NaN.
pub fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_cell(s),
        _ => f64::NAN,
    }
}

/// A prediction appended to the history log: the submitted reading plus the
/// computed score and a local timestamp. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(flatten)]
    pub reading: Reading,
    pub aqi: Option<i64>,
    pub time: String,
}

impl HistoryRecord {
    pub fn new(reading: Reading, aqi: Option<i64>, time: String) -> Self {
        Self { reading, aqi, time }
    }
}
