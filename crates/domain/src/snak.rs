use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a snak carries a value, an unknown value, or explicitly no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakType {
    Value,
    SomeValue,
    NoValue,
}

impl SnakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::SomeValue => "somevalue",
            Self::NoValue => "novalue",
        }
    }
}

/// A property/value pair from a statement, qualifier or reference.
///
/// `datavalue` stays raw JSON until dispatch so an unknown type tag is
/// reported before any payload decoding error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snak {
    pub snaktype: SnakType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datavalue: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Snak {
    pub fn value(
        property: impl Into<String>,
        datatype: impl Into<String>,
        datavalue: Value,
    ) -> Self {
        Self {
            snaktype: SnakType::Value,
            property: Some(property.into()),
            datatype: Some(datatype.into()),
            datavalue: Some(datavalue),
            hash: None,
        }
    }
}
