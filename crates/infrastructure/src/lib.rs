//! Infrastructure layer - Collaborators of the simplifier
//!
//! - `time`: Wikibase time strings to calendar fields and the time renderings
//! - `config`: layered configuration (files + environment)

pub mod config;
pub mod time;

pub use config::{OptionsConfig, SimplifierConfig};
pub use time::{CalendarFields, parse_wikibase_time};
