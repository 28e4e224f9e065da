//! Mechanism-specific derivations.
//!
//! Exactly one of the three sizing functions runs per calculation, selected
//! by the mechanism type. Each returns its derived quantities plus any
//! advisory warnings; warnings never abort the computation.

use crate::constants::*;
use crate::error::{AveragerError, SizingResult, SizingWarning};
use tracing::warn;
use wt_core::{BubblerUsage, PlanForm};

/// Derived quantities of the bubbling branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BubblingSizing {
    /// Longitudinal water speed through the sections, m/s.
    pub water_speed_m_s: f64,
    pub wall_intensity_m3_h_m: f64,
    pub interval_intensity_m3_h_m: f64,
    /// Total air demand for bubbling, m³/h.
    pub air_flow_m3_h: f64,
}

/// v = q / (3600·B·H·n), then Qair = (2·qwall + n'·q') · (n·L).
pub fn size_bubbling(
    second_max_flow_m3_s: f64,
    section_width_m: f64,
    depth_m: f64,
    section_count: u32,
    section_length_m: f64,
    interval_bubbler_count: u32,
    usage: BubblerUsage,
) -> (BubblingSizing, Vec<SizingWarning>) {
    let sections = section_count as f64;
    let water_speed_m_s =
        second_max_flow_m3_s / (3600.0 * section_width_m * depth_m * sections);

    let mut warnings = Vec::new();
    if water_speed_m_s >= LONGITUDINAL_SPEED_LIMIT_M_S {
        warn!(
            speed_m_s = water_speed_m_s,
            limit_m_s = LONGITUDINAL_SPEED_LIMIT_M_S,
            "longitudinal water speed reaches the design ceiling"
        );
        warnings.push(SizingWarning::LongitudinalSpeed {
            speed_m_s: water_speed_m_s,
            limit_m_s: LONGITUDINAL_SPEED_LIMIT_M_S,
        });
    }

    let (wall_intensity_m3_h_m, interval_intensity_m3_h_m) = bubbler_intensities(usage);
    let air_flow_m3_h = (2.0 * wall_intensity_m3_h_m
        + interval_bubbler_count as f64 * interval_intensity_m3_h_m)
        * (sections * section_length_m);

    (
        BubblingSizing {
            water_speed_m_s,
            wall_intensity_m3_h_m,
            interval_intensity_m3_h_m,
            air_flow_m3_h,
        },
        warnings,
    )
}

/// Derived quantities of the multichannel-by-width branch.
///
/// Vectors are indexed by channel, ascending, channel 1 first.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthSizing {
    pub channel_widths_m: Vec<f64>,
    pub channel_flows_m3_h: Vec<f64>,
    /// Cross-sectional area of the distribution tray, m².
    pub tray_section_area_m2: f64,
    pub bottom_orifice_areas_m2: Vec<f64>,
    pub side_orifice_areas_m2: Vec<f64>,
}

/// Per-channel width/flow discretization plus tray orifice areas.
///
/// The distribution formulas divide by N(N−1) and N²−1, so fewer than two
/// channels is rejected before the loop runs.
pub fn size_multichannel_width(
    second_max_flow_m3_s: f64,
    section_count: u32,
    section_width_m: f64,
    channel_count: u32,
    tray_speed_m_s: f64,
    tray_depth_m: f64,
) -> SizingResult<(WidthSizing, Vec<SizingWarning>)> {
    if channel_count < MIN_CHANNEL_COUNT {
        return Err(AveragerError::TooFewChannels {
            count: channel_count,
            min: MIN_CHANNEL_COUNT,
        });
    }

    let n = channel_count as f64;
    // bi = (3·(i−0.5) / (N·(N−1))) · ((2N−1)/N − 2i/(N+1)) · B
    let channel_widths_m: Vec<f64> = (1..=channel_count)
        .map(|i| {
            let i = i as f64;
            (3.0 * (i - 0.5)) / (n * (n - 1.0))
                * ((2.0 * n - 1.0) / n - 2.0 * i / (n + 1.0))
                * section_width_m
        })
        .collect();

    // qi = ((2N−1)/(N·(N−1)) − 2i/(N²−1)) · (q·3600/nsec)
    let section_flow_m3_h = second_max_flow_m3_s * 3600.0 / section_count as f64;
    let channel_flows_m3_h: Vec<f64> = (1..=channel_count)
        .map(|i| {
            let i = i as f64;
            ((2.0 * n - 1.0) / (n * (n - 1.0)) - 2.0 * i / (n * n - 1.0)) * section_flow_m3_h
        })
        .collect();

    // Report the first out-of-band channel only, ascending
    let mut warnings = Vec::new();
    if let Some((index, width)) = channel_widths_m
        .iter()
        .enumerate()
        .find(|(_, width)| !DISTRIBUTION_CHANNEL_WIDTH.contains(**width))
    {
        warnings.push(SizingWarning::ChannelWidthOutOfBand {
            index: index + 1,
            width_m: *width,
            min_m: DISTRIBUTION_CHANNEL_WIDTH.min,
            max_m: DISTRIBUTION_CHANNEL_WIDTH.max,
        });
    }

    let tray_section_area_m2 = second_max_flow_m3_s / (section_count as f64 * tray_speed_m_s);

    // omega_i = qi·mu / (0.36·sqrt(2·g·h0))
    let head_term = 0.36 * (2.0 * GRAVITY_M_S2 * tray_depth_m).sqrt();
    let bottom_orifice_areas_m2 = channel_flows_m3_h
        .iter()
        .map(|flow| flow * ORIFICE_MU_BOTTOM / head_term)
        .collect();
    let side_orifice_areas_m2 = channel_flows_m3_h
        .iter()
        .map(|flow| flow * ORIFICE_MU_SIDE / head_term)
        .collect();

    Ok((
        WidthSizing {
            channel_widths_m,
            channel_flows_m3_h,
            tray_section_area_m2,
            bottom_orifice_areas_m2,
            side_orifice_areas_m2,
        },
        warnings,
    ))
}

/// Derived quantities of the multichannel-by-length branch.
///
/// Both plan-form geometry pairs are always computed; the selected plan form
/// only decides which pair the presentation layer leads with.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthSizing {
    pub section_volume_m3: f64,
    /// Diameter for the circular plan, m.
    pub diameter_m: f64,
    pub channel_width_rectangular_m: f64,
    pub channel_width_circular_m: f64,
}

pub fn size_multichannel_length(
    volume_m3: f64,
    section_count: u32,
    section_area_m2: f64,
    section_width_m: f64,
    channel_count: u32,
) -> (LengthSizing, Vec<SizingWarning>) {
    let section_volume_m3 = volume_m3 / section_count as f64;
    // D = sqrt(4·F/π)
    let diameter_m = (4.0 * section_area_m2 / std::f64::consts::PI).sqrt();
    let channels = channel_count as f64;
    let channel_width_rectangular_m = section_width_m / channels;
    let channel_width_circular_m = 0.5 * diameter_m / channels;

    let mut warnings = Vec::new();
    for (form, width) in [
        (PlanForm::Rectangular, channel_width_rectangular_m),
        (PlanForm::Circular, channel_width_circular_m),
    ] {
        if !PLAN_CHANNEL_WIDTH.contains(width) {
            warnings.push(SizingWarning::PlanChannelWidthOutOfBand {
                form,
                width_m: width,
                min_m: PLAN_CHANNEL_WIDTH.min,
                max_m: PLAN_CHANNEL_WIDTH.max,
            });
        }
    }

    (
        LengthSizing {
            section_volume_m3,
            diameter_m,
            channel_width_rectangular_m,
            channel_width_circular_m,
        },
        warnings,
    )
}
