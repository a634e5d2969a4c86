//! External tool adapters
//!
//! Each adapter implements one domain port by shelling out to a
//! command-line tool.

mod git;
mod gsutil;
mod yarn;

pub use git::GitVersionSource;
pub use gsutil::GsutilStore;
pub use yarn::YarnToolchain;
