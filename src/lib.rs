//! DRH target loader
//!
//! Emits Singer-style SCHEMA, RECORD and STATE messages as newline-delimited
//! JSON so an extractor's stdout can be piped straight into a target.

pub mod config;
pub mod loader;
pub mod schema;

pub use loader::{Loader, LoaderError, Message};
