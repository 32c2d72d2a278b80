//! Singer-style message emission
//!
//! Provides the three DRH protocol messages and the emitter that writes them:
//! - SCHEMA - describes a stream and its key properties
//! - RECORD - one row of a stream
//! - STATE - a bookmark the pipeline can resume from

pub mod emitter;
pub mod error;
pub mod message;

pub use emitter::Loader;
pub use error::LoaderError;
pub use message::Message;
