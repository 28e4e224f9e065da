//! wt-core: stable foundation for the wastewater sizing workspace.
//!
//! Contains:
//! - device (vocabulary enums shared by the calculators and the result store)
//! - numeric (Real + tolerances + float helpers + the pinned rounding rule)
//! - error (shared error types)

pub mod device;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use device::*;
pub use error::{WtError, WtResult};
pub use numeric::*;
