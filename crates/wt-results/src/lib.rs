//! wt-results: result records for every device calculator and the shared
//! in-memory result store.
//!
//! One slot per [`wt_core::DeviceKind`]; a calculator publishes a complete
//! record into its slot (whole-record overwrite, never field-by-field) and
//! the presentation layer reads it back.

pub mod store;
pub mod types;

pub use store::ResultStore;
pub use types::*;
