//! Checks the attribute names handed to SQL generation against the names a context recognizes.
//!
//! An unknown name is a caller contract violation. It is reported as [`UnrecognizedAttribute`],
//! which callers usually propagate with `?` as a [`Problem`].
pub mod attributes;
pub mod config;
pub mod problem;
pub mod validation;

pub use attributes::KnownAttributes;
pub use problem::{Problem, UnrecognizedAttribute};
pub use validation::Validation;
