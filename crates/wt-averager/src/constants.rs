//! Configured bounds, ratios and physical constants for averager sizing.
//!
//! Every value an operator cannot enter lives here: depth bands per
//! mechanism, bubbler spacing ratios, air intensities, orifice discharge
//! coefficients and the coefficient threshold that switches the volume
//! formula family.

use wt_core::BubblerUsage;

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Half-open band with no upper bound.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Averaging-coefficient value at which the volume formula family switches.
pub const COEFFICIENT_FORMULA_THRESHOLD: f64 = 5.0;

/// Working depth of a bubbling averager, m.
pub const DEPTH_BUBBLING: Band = Band::new(3.0, 6.0);

/// Working depth of a multichannel-by-width averager, m.
pub const DEPTH_MULTICHANNEL_WIDTH: Band = Band::new(0.0, 4.5);

/// Working depth of a multichannel-by-length averager, m.
pub const DEPTH_MULTICHANNEL_LENGTH: Band = Band::new(0.0, 3.0);

/// Submersion depth of the bubblers, m.
pub const BUBBLER_DEPTH: Band = Band::new(3.0, 5.0);

/// Wall bubbler spacing as a multiple of the bubbler submersion depth.
pub const WALL_BUBBLER_SPACING_RATIO: Band = Band::new(1.0, 1.5);

/// Intermediate bubbler spacing as a multiple of the bubbler submersion depth.
pub const INTERVAL_BUBBLER_SPACING_RATIO: Band = Band::new(2.0, 3.0);

/// Ceiling on the longitudinal water speed in a bubbling averager, m/s.
/// Reaching it is advisory, not fatal.
pub const LONGITUDINAL_SPEED_LIMIT_M_S: f64 = 0.0025;

pub const MIN_SECTION_COUNT: u32 = 2;
pub const MIN_CHANNEL_COUNT: u32 = 2;

/// Minimum non-silting water speed in the distribution tray, m/s.
pub const MIN_TRAY_SPEED_M_S: f64 = 0.4;

/// Allowed per-channel width in a multichannel-by-width section, m.
pub const DISTRIBUTION_CHANNEL_WIDTH: Band = Band::new(1.0, 6.0);

/// Allowed channel width in a multichannel-by-length section, m.
pub const PLAN_CHANNEL_WIDTH: Band = Band::new(1.5, 6.0);

/// Air intensities per metre of bubbler, m³/h·m: (wall, intermediate).
pub fn bubbler_intensities(usage: BubblerUsage) -> (f64, f64) {
    match usage {
        BubblerUsage::ConcentrationAveraging => (6.0, 12.0),
        BubblerUsage::SedimentPrevention => (12.0, 24.0),
    }
}

/// Discharge coefficient of the bottom orifices of the distribution tray.
pub const ORIFICE_MU_BOTTOM: f64 = 0.62;

/// Discharge coefficient of the side orifices of the distribution tray.
pub const ORIFICE_MU_SIDE: f64 = 0.70;

pub const GRAVITY_M_S2: f64 = 9.81;
