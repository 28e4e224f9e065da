//! wt-equipment: fixed catalogue of manufactured treatment-plant equipment.
//!
//! Grate and hammer-crusher tables used by the grate calculator to pick a
//! manufactured model matching the computed channel dimensions.

pub mod catalog;

pub use catalog::{
    GrateModel, HammerCrusher, filter_grates, grate_by_mark, grates, hammer_crushers,
};
