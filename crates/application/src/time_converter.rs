use serde_json::Value;
use tracing::debug;

use domain::{Result, TimeConverter, TimeConverterFn, TimeInput, TimeStrategy};
use infrastructure::time;

/// Signature shared by the built-in time strategies
pub type TimeConversion = fn(TimeInput<'_>) -> Value;

/// The function behind a built-in strategy.
pub fn strategy_fn(strategy: TimeStrategy) -> TimeConversion {
    match strategy {
        TimeStrategy::Iso => time::to_iso_string,
        TimeStrategy::Epoch => time::to_epoch_millis,
        TimeStrategy::SimpleDay => time::to_simple_day,
        TimeStrategy::None => time::to_raw_time,
    }
}

/// All built-in strategies with their keys.
pub fn time_converters() -> [(&'static str, TimeConversion); 4] {
    TimeStrategy::ALL.map(|strategy| (strategy.as_str(), strategy_fn(strategy)))
}

/// A time converter ready to be applied
pub enum ResolvedTimeConverter<'a> {
    Builtin(TimeStrategy),
    Custom(&'a TimeConverterFn),
}

impl ResolvedTimeConverter<'_> {
    pub fn convert(&self, input: TimeInput<'_>) -> Value {
        match self {
            Self::Builtin(strategy) => strategy_fn(*strategy)(input),
            Self::Custom(f) => f(input),
        }
    }
}

/// Resolve a requested converter, failing on unknown strategy keys.
pub fn resolve_time_converter(converter: &TimeConverter) -> Result<ResolvedTimeConverter<'_>> {
    match converter {
        TimeConverter::Named(key) => {
            let strategy = TimeStrategy::from_key(key)?;
            debug!(strategy = strategy.as_str(), "Resolved time converter");
            Ok(ResolvedTimeConverter::Builtin(strategy))
        }
        TimeConverter::Custom(f) => Ok(ResolvedTimeConverter::Custom(f)),
    }
}
