//! # Static Configuration Data
//!
//! Built-in configuration shipped with the engine:
//!
//! - `attributes` - the canonical attribute vocabulary
//! - `roles` - weight tables for the ten built-in roles
//! - `formations` - built-in formations bound to those roles
//!
//! These are data, not behavior. The engine accepts any role table and
//! formation; the built-ins exist so a caller with a plain attribute
//! export can rank and build squads without supplying configuration.

pub mod attributes;
pub mod formations;
pub mod roles;

pub use attributes::{is_canonical_attribute, CANONICAL_ATTRIBUTES};
pub use formations::{builtin_formation, builtin_formations};
pub use roles::builtin_roles;
