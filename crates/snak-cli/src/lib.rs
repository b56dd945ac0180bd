pub mod input;

pub use input::Document;

/// Log filter used when `RUST_LOG` is unset. Events from the binary are
/// recorded under `snak_simplify`, the library's under `snak_cli`.
pub const DEFAULT_LOG_FILTER: &str = "info,snak_simplify=debug,snak_cli=debug";
