use serde_json::Value;

use domain::{DataValue, Datatype, Result, SimplifyError, SimplifyOptions, normalize_type_name};

use crate::formatters;

/// Turns a tagged value into its simplified form
pub type Formatter = fn(&DataValue, &SimplifyOptions) -> Result<Value>;

/// Formatter for a datatype.
///
/// Exhaustive over `Datatype`: a new type name does not compile until it
/// has a formatter.
pub fn formatter_for(datatype: Datatype) -> Formatter {
    match datatype {
        Datatype::CommonsMedia
        | Datatype::ExternalId
        | Datatype::GeoShape
        | Datatype::Math
        | Datatype::MusicalNotation
        | Datatype::String
        | Datatype::TabularData
        | Datatype::Url => formatters::passthrough,
        Datatype::MonolingualText => formatters::monolingual_text,
        Datatype::WikibaseEntityId
        | Datatype::WikibaseForm
        | Datatype::WikibaseItem
        | Datatype::WikibaseLexeme
        | Datatype::WikibaseProperty
        | Datatype::WikibaseSense => formatters::entity,
        Datatype::Quantity => formatters::quantity,
        Datatype::GlobeCoordinate => formatters::globe_coordinate,
        Datatype::Time => formatters::time,
    }
}

/// Find the formatter for any spelling of a type name.
pub fn lookup(type_name: &str) -> Result<(Datatype, Formatter)> {
    let normalized = normalize_type_name(type_name);
    match Datatype::from_normalized(&normalized) {
        Some(datatype) => Ok((datatype, formatter_for(datatype))),
        None => Err(SimplifyError::UnimplementedType {
            datatype: normalized,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_variants() {
        let (a, _) = lookup("Wikibase-Item").unwrap();
        let (b, _) = lookup("wikibaseitem").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Datatype::WikibaseItem);
    }

    #[test]
    fn test_lookup_unknown_reports_normalized_name() {
        let err = lookup("Bogus-Type").err().unwrap();
        assert_eq!(
            err,
            SimplifyError::UnimplementedType {
                datatype: "bogustype".to_string()
            }
        );
    }

    #[test]
    fn test_every_datatype_has_a_formatter() {
        for datatype in Datatype::ALL {
            let (found, _) = lookup(datatype.as_str()).unwrap();
            assert_eq!(found, datatype);
        }
    }
}
