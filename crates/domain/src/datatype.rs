use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Canonical lookup form of a type name: lowercase, no whitespace, no hyphens.
///
/// `"Wikibase-Item"`, `"wikibase-item"` and `"wikibaseitem"` all collapse
/// onto `"wikibaseitem"`.
pub fn normalize_type_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Semantic type of a property or value.
///
/// Covers both property datatypes (`wikibase-item`, `globe-coordinate`...)
/// and the value tags they share a formatter with (`wikibase-entityid`,
/// `globecoordinate` after normalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datatype {
    #[serde(rename = "commonsMedia")]
    CommonsMedia,
    #[serde(rename = "external-id")]
    ExternalId,
    #[serde(rename = "geo-shape")]
    GeoShape,
    #[serde(rename = "math")]
    Math,
    #[serde(rename = "musical-notation")]
    MusicalNotation,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "tabular-data")]
    TabularData,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "monolingualtext")]
    MonolingualText,
    #[serde(rename = "wikibase-entityid")]
    WikibaseEntityId,
    #[serde(rename = "wikibase-form")]
    WikibaseForm,
    #[serde(rename = "wikibase-item")]
    WikibaseItem,
    #[serde(rename = "wikibase-lexeme")]
    WikibaseLexeme,
    #[serde(rename = "wikibase-property")]
    WikibaseProperty,
    #[serde(rename = "wikibase-sense")]
    WikibaseSense,
    #[serde(rename = "quantity")]
    Quantity,
    #[serde(rename = "globe-coordinate")]
    GlobeCoordinate,
    #[serde(rename = "time")]
    Time,
}

static DATATYPES_BY_NAME: LazyLock<HashMap<String, Datatype>> = LazyLock::new(|| {
    Datatype::ALL
        .iter()
        .map(|datatype| (normalize_type_name(datatype.as_str()), *datatype))
        .collect()
});

impl Datatype {
    pub const ALL: [Datatype; 18] = [
        Self::CommonsMedia,
        Self::ExternalId,
        Self::GeoShape,
        Self::Math,
        Self::MusicalNotation,
        Self::String,
        Self::TabularData,
        Self::Url,
        Self::MonolingualText,
        Self::WikibaseEntityId,
        Self::WikibaseForm,
        Self::WikibaseItem,
        Self::WikibaseLexeme,
        Self::WikibaseProperty,
        Self::WikibaseSense,
        Self::Quantity,
        Self::GlobeCoordinate,
        Self::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommonsMedia => "commonsMedia",
            Self::ExternalId => "external-id",
            Self::GeoShape => "geo-shape",
            Self::Math => "math",
            Self::MusicalNotation => "musical-notation",
            Self::String => "string",
            Self::TabularData => "tabular-data",
            Self::Url => "url",
            Self::MonolingualText => "monolingualtext",
            Self::WikibaseEntityId => "wikibase-entityid",
            Self::WikibaseForm => "wikibase-form",
            Self::WikibaseItem => "wikibase-item",
            Self::WikibaseLexeme => "wikibase-lexeme",
            Self::WikibaseProperty => "wikibase-property",
            Self::WikibaseSense => "wikibase-sense",
            Self::Quantity => "quantity",
            Self::GlobeCoordinate => "globe-coordinate",
            Self::Time => "time",
        }
    }

    /// Look up a datatype by any spelling variant of its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_normalized(&normalize_type_name(name))
    }

    /// Look up a datatype by an already-normalized name.
    pub fn from_normalized(normalized: &str) -> Option<Self> {
        DATATYPES_BY_NAME.get(normalized).copied()
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
