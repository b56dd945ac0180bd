//! Domain layer - Wikibase value model with no I/O
//!
//! This crate contains:
//! - Type names (datatypes) and the spelling normalizer
//! - Tagged data values and their payloads
//! - Snaks
//! - Simplification options and time converter selection
//! - The error type shared by every layer
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Payload shapes enforced by types, not property access
//! - Testable in isolation

pub mod datatype;
pub mod error;
pub mod options;
pub mod snak;
pub mod value;

// Re-export commonly used types
pub use datatype::{Datatype, normalize_type_name};
pub use error::{Result, SimplifyError};
pub use options::{SimplifyOptions, TimeConverter, TimeConverterFn, TimeStrategy};
pub use snak::{Snak, SnakType};
pub use value::{
    DataValue, EntityIdValue, GlobeCoordinate, MonolingualText, QuantityValue, TimeInput, TimeValue,
};
