use serde_json::Value;
use tracing::trace;

use domain::{DataValue, Result, SimplifyError, SimplifyOptions};

use crate::registry;

/// Explicit type name if given, otherwise the value's own tag.
///
/// Form and sense claims and media-info statements come without a
/// datatype, so the tag has to stand in for it.
fn effective_type_name<'a>(datatype: Option<&'a str>, tag: &'a str) -> &'a str {
    datatype.filter(|name| !name.is_empty()).unwrap_or(tag)
}

/// Simplify a decoded tagged value.
pub fn simplify_value(
    datatype: Option<&str>,
    value: &DataValue,
    options: &SimplifyOptions,
) -> Result<Value> {
    let type_name = effective_type_name(datatype, value.type_tag());
    let (resolved, formatter) = registry::lookup(type_name)?;
    trace!(type_name, datatype = %resolved, "Dispatching value");
    formatter(value, options)
}

/// Simplify a raw `{ type, value }` JSON object.
///
/// The type is resolved before the payload is decoded, so an unknown type
/// is reported as such rather than as a decoding failure.
pub fn simplify_json(
    datatype: Option<&str>,
    raw: &Value,
    options: &SimplifyOptions,
) -> Result<Value> {
    let tag = raw.get("type").and_then(Value::as_str).unwrap_or_default();
    let type_name = effective_type_name(datatype, tag);
    if type_name.is_empty() {
        return Err(SimplifyError::MalformedValue(
            "data value has no type tag and no datatype was given".to_string(),
        ));
    }

    let (resolved, formatter) = registry::lookup(type_name)?;
    trace!(type_name, datatype = %resolved, "Dispatching raw value");
    let value = DataValue::from_json(raw)?;
    formatter(&value, options)
}
