//! Types shared between the Palabra server, its database layer
//! and the document import pipeline: strongly-typed identifiers,
//! the exercise type enumeration, public API models and the password hasher.

pub mod api_models;
pub mod exercise;
pub mod id;
pub mod password_hasher;
