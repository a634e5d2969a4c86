//! Domain Layer
//!
//! Pure types for version publishing, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `PublishedVersion`
//! - `value_objects/` - `VersionSpec`, `RemoteLocation`, `StorageLayout`
//! - `ports/` - Interfaces for the external tools and event reporting

pub mod entities;
pub mod ports;
pub mod value_objects;
