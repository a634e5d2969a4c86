//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and terminal I/O.
//!
//! ## Structure
//!
//! - `process` - Shared subprocess runner
//! - `tools/` - git, gsutil, and yarn adapters
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod process;
pub mod tools;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::OutputMode;
pub use tools::{GitVersionSource, GsutilStore, YarnToolchain};
