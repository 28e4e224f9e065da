//! The fixed-order sizing pipeline.
//!
//! ready check → range check → coefficient → volume/geometry →
//! mechanism-specific derivation → result assembly. Each stage consumes the
//! previous stage's output, so the order is not configurable. The pipeline
//! is pure: two invocations with identical inputs produce identical records.

use crate::coefficient::averaging_coefficient;
use crate::error::{AveragerError, SizingResult, SizingWarning};
use crate::geometry::{averager_volume, section_area, section_length};
use crate::input::{AveragerInput, FlowParams, SizingCase};
use crate::mechanism::{size_bubbling, size_multichannel_length, size_multichannel_width};
use crate::ranges::{self, Field};
use tracing::debug;
use wt_core::{DischargeType, MechanismType, ensure_finite};
use wt_results::{AveragerResult, Labeled, MechanismResult, ResultStore};

/// Outcome of a completed sizing computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub result: AveragerResult,
    /// Advisory findings; the result is valid and publishable regardless.
    pub warnings: Vec<SizingWarning>,
}

fn require<T>(value: Option<T>, field: Field) -> SizingResult<T> {
    value.ok_or(AveragerError::NotReady { field })
}

fn check_finite(value: f64, what: &'static str) -> SizingResult<f64> {
    ensure_finite(value, what).map_err(|_| AveragerError::NonPhysical { what })
}

/// Run the full averager sizing pipeline.
///
/// Fails without computing anything when the input set is not ready, when a
/// field is outside its valid range, or when a formula's domain condition is
/// violated; advisory findings are returned alongside the completed result.
pub fn compute_averager(
    inputs: &AveragerInput,
    flow: FlowParams,
    mechanism: MechanismType,
    discharge: DischargeType,
) -> SizingResult<Computed> {
    ranges::check_subgroup(mechanism, inputs)?;
    ranges::check_ranges(mechanism, inputs)?;
    check_finite(flow.second_max_flow_m3_s, "second max flow")?;

    let max = require(inputs.max_concentration_mg_l, Field::MaxConcentration)?;
    let permissible = require(inputs.final_concentration_mg_l, Field::FinalConcentration)?;
    let mean = require(inputs.mean_concentration_mg_l, Field::MeanConcentration)?;
    let period_h = require(inputs.working_period_h, Field::WorkingPeriod)?;
    let depth_m = require(inputs.depth_m, Field::Depth)?;
    let sections = require(inputs.section_count, Field::SectionCount)?;
    let width_m = require(inputs.section_width_m, Field::SectionWidth)?;

    let coefficient = averaging_coefficient(max, permissible, mean)?;
    let volume_m3 = averager_volume(
        discharge,
        mechanism,
        coefficient,
        flow.second_max_flow_m3_s,
        period_h,
    )?;
    let area_m2 = section_area(volume_m3, sections, depth_m);
    let length_m = section_length(area_m2, width_m);
    debug!(coefficient, volume_m3, area_m2, length_m, "geometry stage done");

    let (mechanism_result, warnings) = match mechanism {
        MechanismType::Bubbling => {
            let usage = require(inputs.bubbler_usage, Field::BubblerUsage)?;
            // Submersion depth only bounds the spacing fields; it does not
            // appear in the record itself.
            require(inputs.bubbler_depth_m, Field::BubblerDepth)?;
            let wall_spacing_m =
                require(inputs.wall_bubbler_spacing_m, Field::WallBubblerSpacing)?;
            let interval_count =
                require(inputs.interval_bubbler_count, Field::IntervalBubblerCount)?;
            let interval_spacing_m = if interval_count > 1 {
                Some(require(
                    inputs.interval_bubbler_spacing_m,
                    Field::IntervalBubblerSpacing,
                )?)
            } else {
                inputs.interval_bubbler_spacing_m
            };

            let (sizing, warnings) = size_bubbling(
                flow.second_max_flow_m3_s,
                width_m,
                depth_m,
                sections,
                length_m,
                interval_count,
                usage,
            );

            (
                MechanismResult::Bubbling {
                    section_length_m: Labeled::new(length_m, "Averager section length, m"),
                    air_flow_m3_h: Labeled::new(
                        sizing.air_flow_m3_h,
                        "Total air flow for bubbling, m³/h",
                    ),
                    wall_bubbler_spacing_m: Labeled::new(
                        wall_spacing_m,
                        "Spacing between wall bubblers, m",
                    ),
                    interval_bubbler_spacing_m: interval_spacing_m.map(|spacing| {
                        Labeled::new(spacing, "Spacing between intermediate bubblers, m")
                    }),
                },
                warnings,
            )
        }
        MechanismType::MultichannelByWidth => {
            let channels = require(inputs.channel_count, Field::ChannelCount)?;
            let tray_speed = require(inputs.tray_speed_m_s, Field::TraySpeed)?;
            let tray_depth = require(inputs.tray_depth_m, Field::TrayDepth)?;

            let (sizing, warnings) = size_multichannel_width(
                flow.second_max_flow_m3_s,
                sections,
                width_m,
                channels,
                tray_speed,
                tray_depth,
            )?;

            (
                MechanismResult::MultichannelWidth {
                    channel_count: Labeled::new(
                        channels,
                        "Number of channels per averager section",
                    ),
                    section_length_m: Labeled::new(length_m, "Averager section length, m"),
                    tray_section_area_m2: Labeled::new(
                        sizing.tray_section_area_m2,
                        "Cross-sectional area of the distribution tray, m²",
                    ),
                    channel_widths_m: Labeled::new(
                        sizing.channel_widths_m,
                        "Width of each section channel, m",
                    ),
                    channel_flows_m3_h: Labeled::new(
                        sizing.channel_flows_m3_h,
                        "Water flow in each channel, m³/h",
                    ),
                    bottom_orifice_areas_m2: Labeled::new(
                        sizing.bottom_orifice_areas_m2,
                        "Bottom orifice area in the distribution tray, m²",
                    ),
                    side_orifice_areas_m2: Labeled::new(
                        sizing.side_orifice_areas_m2,
                        "Side orifice area in the distribution tray, m²",
                    ),
                },
                warnings,
            )
        }
        MechanismType::MultichannelByLength => {
            let channels = require(inputs.channel_count, Field::ChannelCount)?;
            let plan_form = require(inputs.plan_form, Field::PlanForm)?;

            let (sizing, warnings) =
                size_multichannel_length(volume_m3, sections, area_m2, width_m, channels);

            (
                MechanismResult::MultichannelLength {
                    plan_form,
                    channel_count: Labeled::new(
                        channels,
                        "Number of channels per averager section",
                    ),
                    section_volume_m3: Labeled::new(
                        sizing.section_volume_m3,
                        "Volume of one averager section, m³",
                    ),
                    section_length_m: Labeled::new(
                        length_m,
                        "Averager section length for the rectangular plan, m",
                    ),
                    diameter_m: Labeled::new(
                        sizing.diameter_m,
                        "Averager diameter for the circular plan, m",
                    ),
                    channel_width_rectangular_m: Labeled::new(
                        sizing.channel_width_rectangular_m,
                        "Channel width for the rectangular plan, m",
                    ),
                    channel_width_circular_m: Labeled::new(
                        sizing.channel_width_circular_m,
                        "Channel width for the circular plan, m",
                    ),
                },
                warnings,
            )
        }
    };

    let result = AveragerResult {
        discharge,
        mechanism,
        coefficient: Labeled::new(coefficient, "Required averaging coefficient"),
        volume_m3: Labeled::new(volume_m3, "Averager volume, m³"),
        section_area_m2: Labeled::new(area_m2, "Area of each averager section, m²"),
        depth_m: Labeled::new(depth_m, "Averager depth, m"),
        section_width_m: Labeled::new(width_m, "Averager section width, m"),
        section_count: Labeled::new(sections, "Number of sections"),
        mechanism_result,
    };

    Ok(Computed { result, warnings })
}

/// Run the pipeline on a self-contained case.
pub fn compute_case(case: &SizingCase) -> SizingResult<Computed> {
    compute_averager(&case.inputs, case.flow, case.mechanism, case.discharge)
}

/// Compute and publish into the store's averager slot.
///
/// The slot is written only on success, with the complete record in one
/// assignment; a failed computation leaves any previous record in place.
pub fn compute_and_publish(
    store: &mut ResultStore,
    inputs: &AveragerInput,
    flow: FlowParams,
    mechanism: MechanismType,
    discharge: DischargeType,
) -> SizingResult<Computed> {
    let computed = compute_averager(inputs, flow, mechanism, discharge)?;
    store.set_averager(computed.result.clone());
    Ok(computed)
}
