//! Vocabulary document import pipeline.
//!
//! A document goes through four stages:
//! 1. [`extraction`] turns `.docx` / `.pdf` bytes into text lines,
//! 2. [`parser`] folds those lines into vocabulary entries and exercises,
//! 3. [`validation`] checks them against the available vocabulary images
//!    (in preview mode every issue is reported, in commit mode any issue rejects the document),
//! 4. [`importer`] plans and then atomically persists a validated document.
//!
//! [`pipeline`] composes these into the two document operations
//! (preview and import), while [`images`] manages the image directory
//! the validator and importer check against.

mod errors;
pub mod extraction;
pub mod images;
pub mod importer;
pub mod parser;
pub mod pipeline;
pub mod validation;

pub use errors::*;
