//! Publish Use Case
//!
//! Build the front-end and upload it to a fresh version prefix:
//!
//! 1. Check the prefix for an existing `index.html`
//! 2. Install dependencies
//! 3. Run the production build
//! 4. Copy the build output to the prefix

mod options;
mod result;
mod use_case;


pub use options::PublishOptions;
pub use result::PublishOutcome;
pub use use_case::PublishUseCase;
