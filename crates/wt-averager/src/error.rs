//! Error and warning types for averager sizing.

use crate::ranges::Field;
use std::fmt;
use thiserror::Error;
use wt_core::PlanForm;

pub type SizingResult<T> = Result<T, AveragerError>;

/// Errors that abort a sizing computation.
///
/// No record is published when any of these occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AveragerError {
    /// Computation was invoked before the input set was ready.
    #[error("input set is not ready to compute: {field} is missing")]
    NotReady { field: Field },

    #[error("{field} = {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A field of another mechanism's input subgroup is populated.
    #[error("{field} does not belong to the selected mechanism's input subgroup")]
    ForeignField { field: Field },

    /// A supplied value is NaN or infinite.
    #[error("non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Permissible and mean concentrations coincide; K has no value.
    #[error("averaging coefficient is undefined: permissible and mean concentrations are equal")]
    UndefinedCoefficient,

    /// K sits exactly on the formula threshold, where neither volume
    /// formula applies.
    #[error("averaging coefficient {coefficient} is exactly at the formula threshold; no volume formula is selected")]
    CoefficientAtThreshold { coefficient: f64 },

    /// The volley-discharge log formula needs K > 1.
    #[error("averaging coefficient {coefficient} must exceed 1 for the volley-discharge volume formula")]
    UndefinedVolume { coefficient: f64 },

    /// The cyclic-fluctuation root formula needs K >= 1.
    #[error("averaging coefficient {coefficient} must be at least 1 for the cyclic-fluctuation volume formula")]
    CoefficientBelowUnity { coefficient: f64 },

    /// The width distribution formulas divide by N(N−1) and N²−1.
    #[error("channel distribution needs at least {min} channels, got {count}")]
    TooFewChannels { count: u32, min: u32 },
}

/// Advisory findings surfaced alongside a completed result.
///
/// A warning never blocks publication; the caller decides how to display it.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingWarning {
    /// Longitudinal water speed reached the design ceiling.
    LongitudinalSpeed { speed_m_s: f64, limit_m_s: f64 },

    /// First channel (ascending index, 1-based) whose width falls outside
    /// the configured band.
    ChannelWidthOutOfBand {
        index: usize,
        width_m: f64,
        min_m: f64,
        max_m: f64,
    },

    /// A plan-form channel width falls outside the configured band.
    PlanChannelWidthOutOfBand {
        form: PlanForm,
        width_m: f64,
        min_m: f64,
        max_m: f64,
    },
}

impl fmt::Display for SizingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingWarning::LongitudinalSpeed { speed_m_s, limit_m_s } => write!(
                f,
                "longitudinal water speed {speed_m_s:.5} m/s must stay below {limit_m_s} m/s; \
                 adjust the section count or the averager depth"
            ),
            SizingWarning::ChannelWidthOutOfBand {
                index,
                width_m,
                min_m,
                max_m,
            } => write!(
                f,
                "channel {index} width {width_m:.2} m must lie between {min_m} and {max_m} m"
            ),
            SizingWarning::PlanChannelWidthOutOfBand {
                form,
                width_m,
                min_m,
                max_m,
            } => write!(
                f,
                "{} channel width {width_m:.2} m must lie between {min_m} and {max_m} m",
                match form {
                    PlanForm::Rectangular => "rectangular-plan",
                    PlanForm::Circular => "circular-plan",
                }
            ),
        }
    }
}
