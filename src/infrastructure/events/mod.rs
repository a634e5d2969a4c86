//! Event Sink Implementations
//!
//! - `JsonEventSink` - NDJSON for CI/automation

mod json;

pub use json::JsonEventSink;
