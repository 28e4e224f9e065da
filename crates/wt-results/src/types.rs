//! Result data types.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use wt_core::{DischargeType, MechanismType, PlanForm};

/// A computed value paired with its display label.
///
/// Labels are static English strings carrying the quantity name and unit;
/// the presentation layer renders them as table rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labeled<T> {
    pub value: T,
    pub label: Cow<'static, str>,
}

impl<T> Labeled<T> {
    pub fn new(value: T, label: &'static str) -> Self {
        Self {
            value,
            label: Cow::Borrowed(label),
        }
    }
}

/// Full averager sizing record, published once per successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragerResult {
    pub discharge: DischargeType,
    pub mechanism: MechanismType,
    pub coefficient: Labeled<f64>,
    pub volume_m3: Labeled<f64>,
    pub section_area_m2: Labeled<f64>,
    pub depth_m: Labeled<f64>,
    pub section_width_m: Labeled<f64>,
    pub section_count: Labeled<u32>,
    pub mechanism_result: MechanismResult,
}

/// Mechanism-specific part of an [`AveragerResult`].
///
/// Exactly one branch exists per record, tagged by mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MechanismResult {
    Bubbling {
        section_length_m: Labeled<f64>,
        air_flow_m3_h: Labeled<f64>,
        wall_bubbler_spacing_m: Labeled<f64>,
        /// Absent when there are fewer than two intermediate bubblers.
        interval_bubbler_spacing_m: Option<Labeled<f64>>,
    },
    MultichannelWidth {
        channel_count: Labeled<u32>,
        section_length_m: Labeled<f64>,
        tray_section_area_m2: Labeled<f64>,
        /// Per-channel values, indexed 1..=channel_count in display order.
        channel_widths_m: Labeled<Vec<f64>>,
        channel_flows_m3_h: Labeled<Vec<f64>>,
        bottom_orifice_areas_m2: Labeled<Vec<f64>>,
        side_orifice_areas_m2: Labeled<Vec<f64>>,
    },
    MultichannelLength {
        /// Which of the two always-computed geometry pairs is primary.
        plan_form: PlanForm,
        channel_count: Labeled<u32>,
        section_volume_m3: Labeled<f64>,
        section_length_m: Labeled<f64>,
        diameter_m: Labeled<f64>,
        channel_width_rectangular_m: Labeled<f64>,
        channel_width_circular_m: Labeled<f64>,
    },
}

/// Bar-grate sizing record.
///
/// Catalogue entries are referenced by mark (see `wt-equipment`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrateResult {
    pub suitable_grate_mark: String,
    pub crusher_mark: String,
    pub ledge_installation_depth_m: f64,
    pub hammer_crusher_count: u32,
    pub suitable_grate_count: u32,
    pub inlet_channel_size_m: f64,
    pub outlet_channel_size_m: f64,
    pub widening_length_m: f64,
    pub chamber_length_m: f64,
    pub waste_volume_m3_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandTrapHorizontalForwardResult {
    pub section_count: u32,
    pub width_m: f64,
    pub length_m: f64,
    pub full_height_m: f64,
    pub section_depth_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandTrapHorizontalCircleResult {
    pub section_count: u32,
    pub length_m: f64,
    pub full_height_m: f64,
    pub middle_diameter_m: f64,
    pub outer_diameter_m: f64,
    pub bunker_cone_height_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandTrapVerticalResult {
    pub section_count: u32,
    pub full_height_m: f64,
    pub bunker_depth_m: f64,
    pub bunker_height_m: f64,
    pub compartment_area_m2: f64,
    pub compartment_diameter_m: f64,
}

/// Sand-trap record; one sub-record per installed scheme variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SandTrapResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_forward: Option<SandTrapHorizontalForwardResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_circle: Option<SandTrapHorizontalCircleResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangential: Option<SandTrapVerticalResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<SandTrapVerticalResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aerated: Option<SandTrapAeratedResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandTrapAeratedResult {
    pub section_count: u32,
    pub width_m: f64,
    pub length_m: f64,
    pub hydromechanical_flow_m3_s: f64,
    pub outlet_pipe_pressure_kpa: f64,
    pub total_air_flow_m3_h: f64,
    pub section_depth_m: f64,
}

/// Settling sump sizing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumpResult {
    pub clarification_effect_pct: f64,
    pub hydraulic_fineness_mm_s: f64,
    pub total_section_width_m: f64,
    pub section_count: u32,
    pub full_height_m: f64,
    pub daily_sediment_m3: f64,
}
