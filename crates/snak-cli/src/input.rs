use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use domain::{SimplifyOptions, Snak};

/// Shapes of JSON document the tool accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Bare `{ type, value }` object
    DataValue(Value),
    Snak(Snak),
    Snaks(Vec<Snak>),
    /// Property id -> snaks, as in qualifiers and references
    PropertySnaks(BTreeMap<String, Vec<Snak>>),
}

impl Document {
    /// Work out which shape a parsed JSON document has.
    pub fn detect(json: Value) -> Result<Self> {
        if json.is_array() {
            let snaks = serde_json::from_value(json).context("Invalid snak list")?;
            return Ok(Self::Snaks(snaks));
        }

        let Some(map) = json.as_object() else {
            bail!("Unsupported input: expected a JSON object or array, got {json}");
        };
        if map.contains_key("snaktype") {
            let snak = serde_json::from_value(json).context("Invalid snak")?;
            return Ok(Self::Snak(snak));
        }
        if map.contains_key("type") && map.contains_key("value") {
            return Ok(Self::DataValue(json));
        }

        let snaks = serde_json::from_value(json).context("Invalid property snaks map")?;
        Ok(Self::PropertySnaks(snaks))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::DataValue(_) => "data value",
            Self::Snak(_) => "snak",
            Self::Snaks(_) => "snak list",
            Self::PropertySnaks(_) => "property snaks",
        }
    }

    /// Simplify the document. `datatype` only applies to bare data values;
    /// snaks carry their own.
    pub fn simplify(&self, datatype: Option<&str>, options: &SimplifyOptions) -> Result<Value> {
        let simplified = match self {
            Self::DataValue(raw) => application::simplify_json(datatype, raw, options)?,
            Self::Snak(snak) => application::simplify_snak(snak, options)?,
            Self::Snaks(snaks) => {
                Value::Array(application::simplify_property_snaks(snaks, options)?)
            }
            Self::PropertySnaks(snaks) => {
                let simplified = application::simplify_snaks(snaks, options)?;
                Value::Object(
                    simplified
                        .into_iter()
                        .map(|(property, values)| (property, Value::Array(values)))
                        .collect(),
                )
            }
        };
        Ok(simplified)
    }
}
