//! Application layer - Simplification of Wikibase values
//!
//! A value is simplified by resolving its type name to a formatter in the
//! registry and applying that formatter with the caller's options.

pub mod dispatcher;
pub mod formatters;
pub mod registry;
pub mod snak;
pub mod time_converter;

pub use dispatcher::{simplify_json, simplify_value};
pub use registry::{Formatter, formatter_for, lookup};
pub use snak::{simplify_property_snaks, simplify_snak, simplify_snaks};
pub use time_converter::{
    ResolvedTimeConverter, TimeConversion, resolve_time_converter, strategy_fn, time_converters,
};
