//! Vocabulary shared by the device calculators and the result store.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Device-type slots of the shared result store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceKind {
    Grate,
    SandTrap,
    Sump,
    Averager,
}

/// Physical design family of an averager.
///
/// Selected once per calculation; every downstream stage branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MechanismType {
    /// Mixing by air bubblers along the section walls and interior.
    Bubbling,
    /// Parallel channels of graded width within each section.
    MultichannelByWidth,
    /// Parallel channels of graded length within each section.
    MultichannelByLength,
}

/// Influent perturbation pattern the averager must smooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DischargeType {
    /// Single volley (slug) discharge event.
    VolleyDischarge,
    /// Periodic cyclic concentration fluctuation.
    CyclicFluctuation,
}

/// Plan-view shape of a multichannel-by-length averager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanForm {
    Rectangular,
    Circular,
}

/// What the bubblers of a bubbling averager are operated for.
///
/// Each usage maps to a fixed pair of air intensities (wall + intermediate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BubblerUsage {
    ConcentrationAveraging,
    SedimentPrevention,
}
