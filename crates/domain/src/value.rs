use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{Result, SimplifyError};

/// A tagged value as found in a snak's `datavalue` field.
///
/// Wire form is `{ "type": <tag>, "value": <payload> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DataValue {
    #[serde(rename = "string")]
    String(String),
    #[serde(rename = "monolingualtext")]
    MonolingualText(MonolingualText),
    #[serde(rename = "wikibase-entityid")]
    EntityId(EntityIdValue),
    #[serde(rename = "quantity")]
    Quantity(QuantityValue),
    #[serde(rename = "globecoordinate")]
    GlobeCoordinate(GlobeCoordinate),
    #[serde(rename = "time")]
    Time(TimeValue),
}

impl DataValue {
    /// The wire tag of this value.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::MonolingualText(_) => "monolingualtext",
            Self::EntityId(_) => "wikibase-entityid",
            Self::Quantity(_) => "quantity",
            Self::GlobeCoordinate(_) => "globecoordinate",
            Self::Time(_) => "time",
        }
    }

    /// The payload as JSON, without the tag.
    pub fn payload(&self) -> Result<Value> {
        let payload = match self {
            Self::String(s) => return Ok(Value::String(s.clone())),
            Self::MonolingualText(v) => serde_json::to_value(v),
            Self::EntityId(v) => serde_json::to_value(v),
            Self::Quantity(v) => serde_json::to_value(v),
            Self::GlobeCoordinate(v) => serde_json::to_value(v),
            Self::Time(v) => serde_json::to_value(v),
        };
        payload.map_err(|e| SimplifyError::MalformedValue(e.to_string()))
    }

    /// Decode a raw `{ type, value }` JSON object.
    pub fn from_json(raw: &Value) -> Result<Self> {
        Self::deserialize(raw).map_err(|e| SimplifyError::MalformedValue(e.to_string()))
    }
}

/// Text in a given language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonolingualText {
    pub text: String,
    pub language: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to an entity (item, property, lexeme, form, sense...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityIdValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        rename = "entity-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub entity_type: Option<String>,
    #[serde(
        rename = "numeric-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub numeric_id: Option<u64>,
}

impl EntityIdValue {
    /// Resolve the entity identifier.
    ///
    /// An explicit `id` wins; otherwise it is rebuilt from the entity type's
    /// letter and the numeric id (`item` + 42 -> `Q42`).
    pub fn resolve_id(&self) -> Result<String> {
        if let Some(id) = &self.id {
            return Ok(id.clone());
        }

        let letter = self.entity_type.as_deref().and_then(entity_type_letter);
        match (letter, self.numeric_id) {
            (Some(letter), Some(numeric_id)) => Ok(format!("{letter}{numeric_id}")),
            _ => Err(SimplifyError::UnresolvableEntityId {
                entity_type: self.entity_type.clone(),
                numeric_id: self.numeric_id,
            }),
        }
    }
}

fn entity_type_letter(entity_type: &str) -> Option<char> {
    match entity_type {
        "item" => Some('Q'),
        "lexeme" => Some('L'),
        "property" => Some('P'),
        _ => None,
    }
}

/// Amount with an optional unit and bounds, numbers encoded as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityValue {
    pub amount: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(
        rename = "upperBound",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub upper_bound: Option<String>,
    #[serde(
        rename = "lowerBound",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lower_bound: Option<String>,
}

fn default_unit() -> String {
    "1".to_string()
}

/// Point on a globe.
///
/// `altitude` and `precision` keep the difference between an absent field
/// (`None`) and an explicit `null` (`Some(Value::Null)`), so the payload
/// serializes back exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobeCoordinate {
    pub latitude: Number,
    pub longitude: Number,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub altitude: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub precision: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globe: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Point in time, e.g. `+1939-11-08T00:00:00Z` with day precision (11).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeValue {
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendarmodel: Option<String>,
}

impl TimeValue {
    pub fn new(time: impl Into<String>, precision: u8) -> Self {
        Self {
            time: time.into(),
            timezone: None,
            before: None,
            after: None,
            precision: Some(precision),
            calendarmodel: None,
        }
    }
}

/// Input accepted by time converters: a bare time string or a full payload.
#[derive(Debug, Clone, Copy)]
pub enum TimeInput<'a> {
    Raw(&'a str),
    Structured(&'a TimeValue),
}

impl<'a> TimeInput<'a> {
    pub fn time(&self) -> &'a str {
        match self {
            Self::Raw(time) => time,
            Self::Structured(value) => &value.time,
        }
    }

    /// Precision of the payload; bare strings carry none.
    pub fn precision(&self) -> Option<u8> {
        match self {
            Self::Raw(_) => None,
            Self::Structured(value) => value.precision,
        }
    }
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(time: &'a str) -> Self {
        Self::Raw(time)
    }
}

impl<'a> From<&'a TimeValue> for TimeInput<'a> {
    fn from(value: &'a TimeValue) -> Self {
        Self::Structured(value)
    }
}
