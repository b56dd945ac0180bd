use std::collections::BTreeMap;

use serde_json::Value;

use domain::{Result, SimplifyError, SimplifyOptions, Snak, SnakType};

use crate::dispatcher::simplify_json;

/// Simplify a single snak.
///
/// `somevalue` and `novalue` snaks yield the placeholders from the options.
pub fn simplify_snak(snak: &Snak, options: &SimplifyOptions) -> Result<Value> {
    match snak.snaktype {
        SnakType::Value => {
            let datavalue = snak.datavalue.as_ref().ok_or_else(|| {
                SimplifyError::MalformedValue(format!(
                    "value snak {} has no datavalue",
                    snak.property.as_deref().unwrap_or("<unknown property>")
                ))
            })?;
            simplify_json(snak.datatype.as_deref(), datavalue, options)
        }
        SnakType::SomeValue => Ok(options.somevalue_value.clone()),
        SnakType::NoValue => Ok(options.novalue_value.clone()),
    }
}

/// Simplify the snaks of one property, in order.
pub fn simplify_property_snaks(snaks: &[Snak], options: &SimplifyOptions) -> Result<Vec<Value>> {
    snaks
        .iter()
        .map(|snak| simplify_snak(snak, options))
        .collect()
}

/// Simplify a property -> snaks map (qualifiers, reference snaks).
pub fn simplify_snaks(
    snaks: &BTreeMap<String, Vec<Snak>>,
    options: &SimplifyOptions,
) -> Result<BTreeMap<String, Vec<Value>>> {
    snaks
        .iter()
        .map(|(property, property_snaks)| {
            Ok((
                property.clone(),
                simplify_property_snaks(property_snaks, options)?,
            ))
        })
        .collect()
}
