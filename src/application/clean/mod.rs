//! Clean Use Case
//!
//! Best-effort removal of a published version's storage prefix.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanResult;
pub use use_case::CleanUseCase;
