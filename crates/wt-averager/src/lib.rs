//! wt-averager: sizing engine for wastewater flow/concentration averagers.
//!
//! Given influent flow and concentration parameters plus a chosen mechanism
//! type, derives the required averaging coefficient, averager volume, section
//! geometry and the mechanism-specific quantities (air demand for bubbling
//! averagers, per-channel width/flow/orifice distributions for multichannel
//! ones).
//!
//! The engine is a pure in-process library: the presentation layer resolves
//! field ranges with [`ranges::valid_range`] as values are entered, gates the
//! compute action on [`ranges::is_ready`], then runs
//! [`compute::compute_averager`] (or [`compute::compute_and_publish`] to also
//! write the shared [`wt_results::ResultStore`] slot).
//!
//! # Example
//!
//! ```
//! use wt_averager::{AveragerInput, FlowParams, compute_averager, is_ready};
//! use wt_core::{DischargeType, MechanismType, PlanForm};
//!
//! let inputs = AveragerInput {
//!     max_concentration_mg_l: Some(100.0),
//!     final_concentration_mg_l: Some(80.0),
//!     mean_concentration_mg_l: Some(40.0),
//!     working_period_h: Some(2.0),
//!     depth_m: Some(3.0),
//!     section_count: Some(2),
//!     section_width_m: Some(6.0),
//!     channel_count: Some(3),
//!     plan_form: Some(PlanForm::Rectangular),
//!     ..AveragerInput::default()
//! };
//! let mechanism = MechanismType::MultichannelByLength;
//! assert!(is_ready(mechanism, &inputs));
//!
//! let computed = compute_averager(
//!     &inputs,
//!     FlowParams { second_max_flow_m3_s: 50.0 },
//!     mechanism,
//!     DischargeType::VolleyDischarge,
//! )
//! .unwrap();
//! assert_eq!(computed.result.volume_m3.value, 270_000.0);
//! ```

pub mod coefficient;
pub mod compute;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mechanism;
pub mod ranges;

// Re-exports
pub use coefficient::averaging_coefficient;
pub use compute::{Computed, compute_and_publish, compute_averager, compute_case};
pub use constants::Band;
pub use error::{AveragerError, SizingResult, SizingWarning};
pub use input::{AveragerInput, FlowParams, SizingCase};
pub use ranges::{Field, is_ready, valid_range};
