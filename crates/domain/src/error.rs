use thiserror::Error;

/// Where missing datatype support should be reported.
pub const FEEDBACK_URL: &str = "https://github.com/maxlath/wikibase-sdk/issues";

/// Converter keys longer than this are cut before being echoed back.
pub const MAX_ECHOED_KEY_LENGTH: usize = 100;

/// Errors raised while simplifying a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimplifyError {
    #[error(
        "{datatype} claim parser isn't implemented. Please report to {url}",
        url = FEEDBACK_URL
    )]
    UnimplementedType { datatype: String },

    #[error("invalid converter key: {key}")]
    InvalidConverterKey { key: String },

    #[error("Invalid {field}: {input:?} is not a number")]
    InvalidNumber { field: &'static str, input: String },

    #[error("Expected a {expected} value, got {found}")]
    UnexpectedValue {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot resolve entity id (entity-type: {entity_type:?}, numeric-id: {numeric_id:?})")]
    UnresolvableEntityId {
        entity_type: Option<String>,
        numeric_id: Option<u64>,
    },

    #[error("Malformed data value: {0}")]
    MalformedValue(String),
}

impl SimplifyError {
    /// Build an `InvalidConverterKey` error with the key truncated and quoted.
    pub fn invalid_converter_key(key: &str) -> Self {
        let truncated: String = if key.chars().count() > MAX_ECHOED_KEY_LENGTH {
            let head: String = key.chars().take(MAX_ECHOED_KEY_LENGTH).collect();
            format!("{head}...")
        } else {
            key.to_string()
        };

        Self::InvalidConverterKey {
            key: format!("{truncated:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimplifyError>;
