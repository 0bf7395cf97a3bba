//! All configuration-relevant code: the full configuration structure
//! as well as methods needed to load and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_default_path`].
//!
//! # Internals
//! The configuration file is first deserialized into unvalidated ("unresolved")
//! structures, which are then recursively resolved into their validated versions.
//! For example, [`Configuration`] is loaded by deserializing an `UnresolvedConfiguration`
//! and calling one of the methods from the `traits` module on it.
//!
//! Resolution is where paths get their `{BASE_DATA_DIRECTORY}` placeholder replaced
//! and where tracing filters are checked.

mod error;
mod structure;
mod traits;
mod utilities;

pub use error::*;
pub use structure::*;
