//! Entity resolution for Austrian bank codes.
//!
//! Maps a validated IBAN to the financial entity that issued it. Invalid
//! input is unresolvable; valid input with an unknown bank code, or from a
//! country other than Austria, is `External`.

pub mod resolver;
pub mod types;

pub use resolver::{EntityResolver, resolve_entity, resolve_entity_name};
pub use types::Entity;
