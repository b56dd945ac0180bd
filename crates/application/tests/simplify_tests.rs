use application::{simplify_json, simplify_snak, simplify_value};
use domain::{
    DataValue, SimplifyError, SimplifyOptions, Snak, TimeConverter, TimeInput, TimeStrategy,
};
use serde_json::{Value, json};

fn decode(raw: Value) -> DataValue {
    DataValue::from_json(&raw).expect("valid data value")
}

fn entity(payload: Value) -> DataValue {
    decode(json!({ "type": "wikibase-entityid", "value": payload }))
}

fn wikidata_time() -> DataValue {
    decode(json!({
        "type": "time",
        "value": {
            "time": "+1939-11-08T00:00:00Z",
            "timezone": 0,
            "before": 0,
            "after": 0,
            "precision": 11,
            "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
        }
    }))
}

#[test] // type_name_spelling_variants_share_a_formatter
fn type_name_spelling_variants_share_a_formatter() {
    let value = entity(json!({ "id": "Q42" }));
    let options = SimplifyOptions::default();

    for datatype in [
        "Wikibase-Item",
        "wikibaseitem",
        "wikibase-item",
        "WIKIBASE ITEM",
    ] {
        let result = simplify_value(Some(datatype), &value, &options).unwrap();
        assert_eq!(result, json!("Q42"), "datatype {datatype}");
    }
}

#[test] // quantity_amount_only
fn quantity_amount_only() {
    let value = decode(json!({
        "type": "quantity",
        "value": { "amount": "12.5", "unit": "1" }
    }));
    let result = simplify_value(Some("quantity"), &value, &SimplifyOptions::default()).unwrap();
    assert_eq!(result, json!(12.5));
}

#[test] // quantity_rich_strips_unit_url
fn quantity_rich_strips_unit_url() {
    let value = decode(json!({
        "type": "quantity",
        "value": { "amount": "1", "unit": "http://www.wikidata.org/entity/Q11573" }
    }));
    let result = simplify_value(Some("quantity"), &value, &SimplifyOptions::rich()).unwrap();
    assert_eq!(result, json!({ "amount": 1, "unit": "Q11573" }));
}

#[test] // quantity_null_bounds_are_omitted
fn quantity_null_bounds_are_omitted() {
    let raw = json!({
        "type": "quantity",
        "value": { "amount": "+7", "unit": "1", "upperBound": null, "lowerBound": "+6" }
    });
    let result = simplify_json(Some("quantity"), &raw, &SimplifyOptions::rich()).unwrap();
    assert_eq!(result, json!({ "amount": 7, "unit": "1", "lowerBound": 6 }));
}

#[test] // entity_ids_with_and_without_prefix
fn entity_ids_with_and_without_prefix() {
    let value = entity(json!({ "id": "Q42" }));
    let plain = simplify_value(Some("wikibase-item"), &value, &SimplifyOptions::default()).unwrap();
    assert_eq!(plain, json!("Q42"));

    let prefixed = SimplifyOptions::default().with_entity_prefix("wd");
    let result = simplify_value(Some("wikibase-item"), &value, &prefixed).unwrap();
    assert_eq!(result, json!("wd:Q42"));
}

#[test] // entity_id_rebuilt_from_numeric_id
fn entity_id_rebuilt_from_numeric_id() {
    let value = entity(json!({ "entity-type": "item", "numeric-id": 42 }));
    let result =
        simplify_value(Some("wikibase-item"), &value, &SimplifyOptions::default()).unwrap();
    assert_eq!(result, json!("Q42"));

    let property = entity(json!({ "entity-type": "property", "numeric-id": 31 }));
    let result = simplify_value(
        Some("wikibase-property"),
        &property,
        &SimplifyOptions::default(),
    )
    .unwrap();
    assert_eq!(result, json!("P31"));
}

#[test] // entity_forms_and_senses_use_their_id
fn entity_forms_and_senses_use_their_id() {
    let form = entity(json!({ "entity-type": "form", "id": "L99-F2" }));
    let result = simplify_value(Some("wikibase-form"), &form, &SimplifyOptions::default()).unwrap();
    assert_eq!(result, json!("L99-F2"));
}

#[test] // globe_coordinate_pair_and_rich
fn globe_coordinate_pair_and_rich() {
    let raw = json!({ "type": "globecoordinate", "value": { "latitude": 1, "longitude": 2 } });

    let pair = simplify_json(Some("globe-coordinate"), &raw, &SimplifyOptions::default()).unwrap();
    assert_eq!(pair, json!([1, 2]));

    let rich = simplify_json(Some("globe-coordinate"), &raw, &SimplifyOptions::rich()).unwrap();
    assert_eq!(rich, json!({ "latitude": 1, "longitude": 2 }));
}

#[test] // monolingual_text_plain_and_rich
fn monolingual_text_plain_and_rich() {
    let raw = json!({ "type": "monolingualtext", "value": { "text": "hello", "language": "en" } });

    let plain = simplify_json(Some("monolingualtext"), &raw, &SimplifyOptions::default()).unwrap();
    assert_eq!(plain, json!("hello"));

    let rich = simplify_json(Some("monolingualtext"), &raw, &SimplifyOptions::rich()).unwrap();
    assert_eq!(rich, json!({ "text": "hello", "language": "en" }));
}

#[test] // string_like_datatypes_pass_through
fn string_like_datatypes_pass_through() {
    let value = decode(json!({ "type": "string", "value": "Douglas Adams.jpg" }));
    for datatype in [
        "commonsMedia",
        "external-id",
        "geo-shape",
        "math",
        "musical-notation",
        "string",
        "tabular-data",
        "url",
    ] {
        let result = simplify_value(Some(datatype), &value, &SimplifyOptions::default()).unwrap();
        assert_eq!(result, json!("Douglas Adams.jpg"), "datatype {datatype}");
    }
}

#[test] // unknown_type_is_unimplemented
fn unknown_type_is_unimplemented() {
    let value = decode(json!({ "type": "string", "value": "x" }));
    let err = simplify_value(Some("bogus-type"), &value, &SimplifyOptions::default()).unwrap_err();

    assert_eq!(
        err,
        SimplifyError::UnimplementedType {
            datatype: "bogustype".to_string()
        }
    );
    assert!(err.to_string().contains("bogustype"));
}

#[test] // invalid_time_converter_key
fn invalid_time_converter_key() {
    let options =
        SimplifyOptions::default().with_time_converter(TimeConverter::named("not-a-strategy"));
    let err = simplify_value(Some("time"), &wikidata_time(), &options).unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("invalid converter key"));
    assert!(message.contains("\"not-a-strategy\""));
}

#[test] // time_strategies
fn time_strategies() {
    let value = wikidata_time();
    let cases = [
        (TimeStrategy::Iso, json!("1939-11-08T00:00:00.000Z")),
        (TimeStrategy::Epoch, json!(-951436800000i64)),
        (TimeStrategy::SimpleDay, json!("1939-11-08")),
        (TimeStrategy::None, json!("+1939-11-08T00:00:00Z")),
    ];

    for (strategy, expected) in cases {
        let options = SimplifyOptions::default().with_time_converter(strategy);
        let result = simplify_value(Some("time"), &value, &options).unwrap();
        assert_eq!(result, expected, "strategy {}", strategy.as_str());
    }
}

#[test] // time_defaults_to_iso
fn time_defaults_to_iso() {
    let result = simplify_value(None, &wikidata_time(), &SimplifyOptions::default()).unwrap();
    assert_eq!(result, json!("1939-11-08T00:00:00.000Z"));
}

#[test] // time_custom_converter_gets_the_payload
fn time_custom_converter_gets_the_payload() {
    let converter = TimeConverter::custom(|input: TimeInput<'_>| {
        let precision = input.precision().unwrap_or(0);
        json!(format!("{}@{precision}", input.time()))
    });
    let options = SimplifyOptions::rich().with_time_converter(converter);

    let result = simplify_value(Some("time"), &wikidata_time(), &options).unwrap();
    assert_eq!(result["time"], json!("+1939-11-08T00:00:00Z@11"));
    assert_eq!(result["precision"], json!(11));
    assert_eq!(
        result["calendarmodel"],
        json!("http://www.wikidata.org/entity/Q1985727")
    );
}

#[test] // options_from_json_drive_formatting
fn options_from_json_drive_formatting() {
    let options: SimplifyOptions = serde_json::from_value(json!({
        "keepRichValues": false,
        "entityPrefix": "wd",
        "timeConverter": "simple-day"
    }))
    .unwrap();

    let item = entity(json!({ "id": "Q5" }));
    assert_eq!(
        simplify_value(Some("wikibase-item"), &item, &options).unwrap(),
        json!("wd:Q5")
    );
    assert_eq!(
        simplify_value(Some("time"), &wikidata_time(), &options).unwrap(),
        json!("1939-11-08")
    );
}

#[test] // missing_datatype_falls_back_to_value_tag
fn missing_datatype_falls_back_to_value_tag() {
    // Claims on lexeme senses come without a datatype
    let snak: Snak = serde_json::from_value(json!({
        "snaktype": "value",
        "property": "P5137",
        "datavalue": {
            "type": "wikibase-entityid",
            "value": { "entity-type": "item", "numeric-id": 146, "id": "Q146" }
        }
    }))
    .unwrap();

    let result = simplify_snak(&snak, &SimplifyOptions::default()).unwrap();
    assert_eq!(result, json!("Q146"));
}

#[test] // repeated_calls_are_identical
fn repeated_calls_are_identical() {
    let options = SimplifyOptions::rich().with_entity_prefix("wd");
    let values = [
        wikidata_time(),
        entity(json!({ "entity-type": "lexeme", "numeric-id": 7 })),
        decode(json!({
            "type": "quantity",
            "value": { "amount": "+3.5", "unit": "1", "upperBound": "+4" }
        })),
    ];

    for value in &values {
        let first = simplify_value(None, value, &options).unwrap();
        let second = simplify_value(None, value, &options).unwrap();
        assert_eq!(first, second);
    }
}
