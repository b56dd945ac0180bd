use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Number, Value, json};

use domain::{DataValue, Result, SimplifyError, SimplifyOptions, TimeInput};

use crate::time_converter::resolve_time_converter;

static ENTITY_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.*/entity/").expect("Invalid unit regex"));

fn unexpected(expected: &'static str, value: &DataValue) -> SimplifyError {
    SimplifyError::UnexpectedValue {
        expected,
        found: value.type_tag(),
    }
}

/// JSON number for a parsed amount: integral values become integers,
/// non-finite values become `null`.
pub fn number_value(num: f64) -> Value {
    // Largest integer with an exact f64 representation
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if num.fract() == 0.0 && num.abs() <= MAX_EXACT {
        return Value::from(num as i64);
    }
    Number::from_f64(num)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn parse_number(field: &'static str, input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| SimplifyError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}

/// Scalar types: the payload as it is.
pub fn passthrough(value: &DataValue, _options: &SimplifyOptions) -> Result<Value> {
    value.payload()
}

pub fn monolingual_text(value: &DataValue, options: &SimplifyOptions) -> Result<Value> {
    let DataValue::MonolingualText(text) = value else {
        return Err(unexpected("monolingualtext", value));
    };

    if options.keep_rich_values {
        value.payload()
    } else {
        Ok(Value::String(text.text.clone()))
    }
}

/// Entity references, optionally prefixed as `<prefix>:<id>`.
pub fn entity(value: &DataValue, options: &SimplifyOptions) -> Result<Value> {
    let DataValue::EntityId(entity) = value else {
        return Err(unexpected("wikibase-entityid", value));
    };

    let id = entity.resolve_id()?;
    let id = match &options.entity_prefix {
        Some(prefix) => format!("{prefix}:{id}"),
        None => id,
    };
    Ok(Value::String(id))
}

pub fn quantity(value: &DataValue, options: &SimplifyOptions) -> Result<Value> {
    let DataValue::Quantity(quantity) = value else {
        return Err(unexpected("quantity", value));
    };

    let amount = number_value(parse_number("amount", &quantity.amount)?);
    if !options.keep_rich_values {
        return Ok(amount);
    }

    let mut rich = Map::new();
    rich.insert("amount".to_string(), amount);
    rich.insert(
        "unit".to_string(),
        Value::String(ENTITY_URL_PREFIX.replace(&quantity.unit, "").into_owned()),
    );
    if let Some(upper) = &quantity.upper_bound {
        rich.insert(
            "upperBound".to_string(),
            number_value(parse_number("upperBound", upper)?),
        );
    }
    if let Some(lower) = &quantity.lower_bound {
        rich.insert(
            "lowerBound".to_string(),
            number_value(parse_number("lowerBound", lower)?),
        );
    }
    Ok(Value::Object(rich))
}

/// `[latitude, longitude]`, or the whole payload when rich values are kept.
pub fn globe_coordinate(value: &DataValue, options: &SimplifyOptions) -> Result<Value> {
    let DataValue::GlobeCoordinate(coordinate) = value else {
        return Err(unexpected("globecoordinate", value));
    };

    if options.keep_rich_values {
        value.payload()
    } else {
        Ok(json!([coordinate.latitude, coordinate.longitude]))
    }
}

pub fn time(value: &DataValue, options: &SimplifyOptions) -> Result<Value> {
    let DataValue::Time(time) = value else {
        return Err(unexpected("time", value));
    };

    let converter = resolve_time_converter(&options.time_converter)?;
    let converted = converter.convert(TimeInput::Structured(time));
    if !options.keep_rich_values {
        return Ok(converted);
    }

    let mut rich = Map::new();
    rich.insert("time".to_string(), converted);
    if let Some(timezone) = time.timezone {
        rich.insert("timezone".to_string(), Value::from(timezone));
    }
    if let Some(before) = time.before {
        rich.insert("before".to_string(), Value::from(before));
    }
    if let Some(after) = time.after {
        rich.insert("after".to_string(), Value::from(after));
    }
    if let Some(precision) = time.precision {
        rich.insert("precision".to_string(), Value::from(precision));
    }
    if let Some(calendarmodel) = &time.calendarmodel {
        rich.insert(
            "calendarmodel".to_string(),
            Value::String(calendarmodel.clone()),
        );
    }
    Ok(Value::Object(rich))
}
