//! Averager input set.

use serde::{Deserialize, Serialize};
use wt_core::{BubblerUsage, DischargeType, MechanismType, PlanForm};

/// Influent flow parameters, shared by every device calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowParams {
    /// Peak instantaneous influent flow, m³/s.
    pub second_max_flow_m3_s: f64,
}

/// The full set of averager input fields.
///
/// Unset fields are `None`. Zero is a legitimate entered value (a mean
/// concentration of 0 mg/L is meaningful), so absence is never encoded as 0.
/// Exactly one mechanism-specific subgroup may be populated; the pipeline
/// rejects stray fields from the other subgroups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AveragerInput {
    /// Maximum pollutant concentration in the influent, mg/L.
    pub max_concentration_mg_l: Option<f64>,
    /// Permissible concentration for the downstream works, mg/L.
    pub final_concentration_mg_l: Option<f64>,
    /// Mean pollutant concentration in the influent, mg/L.
    pub mean_concentration_mg_l: Option<f64>,
    /// Working-cycle (fluctuation) period, h.
    pub working_period_h: Option<f64>,
    /// Averager working depth, m.
    pub depth_m: Option<f64>,
    pub section_count: Option<u32>,
    pub section_width_m: Option<f64>,

    // Bubbling subgroup
    pub bubbler_depth_m: Option<f64>,
    pub wall_bubbler_spacing_m: Option<f64>,
    pub interval_bubbler_count: Option<u32>,
    /// Solicited only when more than one intermediate bubbler is installed.
    pub interval_bubbler_spacing_m: Option<f64>,
    pub bubbler_usage: Option<BubblerUsage>,

    // Multichannel subgroups (channel count is shared by both)
    pub channel_count: Option<u32>,
    pub tray_speed_m_s: Option<f64>,
    pub tray_depth_m: Option<f64>,
    pub plan_form: Option<PlanForm>,
}

/// A complete sizing case: everything one computation needs.
///
/// This is the unit a case file on disk deserializes into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingCase {
    pub mechanism: MechanismType,
    pub discharge: DischargeType,
    pub flow: FlowParams,
    #[serde(default)]
    pub inputs: AveragerInput,
}
