use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, SimplifyError};
use crate::value::TimeInput;

/// Built-in ways of rendering a time value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeStrategy {
    #[serde(rename = "iso")]
    Iso,
    #[serde(rename = "epoch")]
    Epoch,
    #[serde(rename = "simple-day")]
    SimpleDay,
    #[serde(rename = "none")]
    None,
}

impl TimeStrategy {
    pub const ALL: [TimeStrategy; 4] = [Self::Iso, Self::Epoch, Self::SimpleDay, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Epoch => "epoch",
            Self::SimpleDay => "simple-day",
            Self::None => "none",
        }
    }

    /// Look up a strategy by its exact key.
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == key)
            .ok_or_else(|| SimplifyError::invalid_converter_key(key))
    }
}

impl Default for TimeStrategy {
    fn default() -> Self {
        Self::Iso
    }
}

/// Caller-supplied time conversion.
pub type TimeConverterFn = Arc<dyn Fn(TimeInput<'_>) -> Value + Send + Sync>;

/// Time conversion requested by the caller: a strategy key, checked when a
/// time value is formatted, or a custom function.
#[derive(Clone)]
pub enum TimeConverter {
    Named(String),
    Custom(TimeConverterFn),
}

impl TimeConverter {
    pub fn named(key: impl Into<String>) -> Self {
        Self::Named(key.into())
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(TimeInput<'_>) -> Value + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }
}

impl Default for TimeConverter {
    fn default() -> Self {
        TimeStrategy::default().into()
    }
}

impl From<TimeStrategy> for TimeConverter {
    fn from(strategy: TimeStrategy) -> Self {
        Self::Named(strategy.as_str().to_string())
    }
}

impl Debug for TimeConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(key) => f.debug_tuple("Named").field(key).finish(),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl<'de> Deserialize<'de> for TimeConverter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::Named)
    }
}

/// Options read by the formatters.
///
/// Deserializes from the camelCase JSON form
/// (`{ "keepRichValues": true, "entityPrefix": "wd", "timeConverter": "epoch" }`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimplifyOptions {
    /// Keep the full structure instead of a scalar
    pub keep_rich_values: bool,
    /// Prepended to entity ids as `<prefix>:<id>`
    pub entity_prefix: Option<String>,
    pub time_converter: TimeConverter,
    /// Returned for `novalue` snaks
    pub novalue_value: Value,
    /// Returned for `somevalue` snaks
    pub somevalue_value: Value,
}

impl SimplifyOptions {
    pub fn rich() -> Self {
        Self {
            keep_rich_values: true,
            ..Self::default()
        }
    }

    pub fn with_entity_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.entity_prefix = Some(prefix.into());
        self
    }

    pub fn with_time_converter(mut self, converter: impl Into<TimeConverter>) -> Self {
        self.time_converter = converter.into();
        self
    }
}
