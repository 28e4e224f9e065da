//! Range/validity resolution for the averager input set.
//!
//! Each field's valid interval is a function of the selected mechanism and
//! of the already-entered values it depends on, never of hidden state:
//! resolving the same state twice yields the same bounds.

use crate::constants::*;
use crate::error::{AveragerError, SizingResult};
use crate::input::AveragerInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use wt_core::MechanismType;

/// Identifier of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    MaxConcentration,
    FinalConcentration,
    MeanConcentration,
    WorkingPeriod,
    Depth,
    SectionCount,
    SectionWidth,
    BubblerDepth,
    WallBubblerSpacing,
    IntervalBubblerCount,
    IntervalBubblerSpacing,
    BubblerUsage,
    ChannelCount,
    TraySpeed,
    TrayDepth,
    PlanForm,
}

pub const ALL_FIELDS: [Field; 16] = [
    Field::MaxConcentration,
    Field::FinalConcentration,
    Field::MeanConcentration,
    Field::WorkingPeriod,
    Field::Depth,
    Field::SectionCount,
    Field::SectionWidth,
    Field::BubblerDepth,
    Field::WallBubblerSpacing,
    Field::IntervalBubblerCount,
    Field::IntervalBubblerSpacing,
    Field::BubblerUsage,
    Field::ChannelCount,
    Field::TraySpeed,
    Field::TrayDepth,
    Field::PlanForm,
];

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::MaxConcentration => "maximum concentration",
            Field::FinalConcentration => "permissible concentration",
            Field::MeanConcentration => "mean concentration",
            Field::WorkingPeriod => "working-cycle period",
            Field::Depth => "averager depth",
            Field::SectionCount => "section count",
            Field::SectionWidth => "section width",
            Field::BubblerDepth => "bubbler submersion depth",
            Field::WallBubblerSpacing => "wall bubbler spacing",
            Field::IntervalBubblerCount => "intermediate bubbler count",
            Field::IntervalBubblerSpacing => "intermediate bubbler spacing",
            Field::BubblerUsage => "bubbler usage",
            Field::ChannelCount => "channel count",
            Field::TraySpeed => "tray water speed",
            Field::TrayDepth => "tray water depth",
            Field::PlanForm => "plan form",
        };
        f.write_str(name)
    }
}

/// Valid interval for `field` under the given mechanism and entered values.
///
/// `None` while a value the bound depends on is still unset, when the field
/// does not belong to the selected mechanism's subgroup, or for select-type
/// fields (bubbler usage, plan form) that have no numeric domain.
pub fn valid_range(field: Field, mechanism: MechanismType, inputs: &AveragerInput) -> Option<Band> {
    use MechanismType::*;

    match field {
        Field::MaxConcentration => Some(Band::at_least(0.0)),
        Field::FinalConcentration => inputs
            .max_concentration_mg_l
            .map(|max| Band::new(0.0, max)),
        Field::MeanConcentration => inputs
            .final_concentration_mg_l
            .map(|permissible| Band::new(0.0, permissible)),
        Field::WorkingPeriod => Some(Band::at_least(0.0)),
        Field::Depth => Some(match mechanism {
            Bubbling => DEPTH_BUBBLING,
            MultichannelByWidth => DEPTH_MULTICHANNEL_WIDTH,
            MultichannelByLength => DEPTH_MULTICHANNEL_LENGTH,
        }),
        Field::SectionCount => Some(Band::at_least(MIN_SECTION_COUNT as f64)),
        Field::SectionWidth => Some(Band::at_least(0.0)),
        Field::BubblerDepth => (mechanism == Bubbling).then_some(BUBBLER_DEPTH),
        Field::WallBubblerSpacing => match mechanism {
            Bubbling => inputs.bubbler_depth_m.map(|depth| {
                Band::new(
                    WALL_BUBBLER_SPACING_RATIO.min * depth,
                    WALL_BUBBLER_SPACING_RATIO.max * depth,
                )
            }),
            _ => None,
        },
        Field::IntervalBubblerCount => (mechanism == Bubbling).then_some(Band::at_least(0.0)),
        Field::IntervalBubblerSpacing => match mechanism {
            Bubbling => inputs.bubbler_depth_m.map(|depth| {
                Band::new(
                    INTERVAL_BUBBLER_SPACING_RATIO.min * depth,
                    INTERVAL_BUBBLER_SPACING_RATIO.max * depth,
                )
            }),
            _ => None,
        },
        Field::ChannelCount => matches!(mechanism, MultichannelByWidth | MultichannelByLength)
            .then_some(Band::at_least(MIN_CHANNEL_COUNT as f64)),
        Field::TraySpeed => {
            (mechanism == MultichannelByWidth).then_some(Band::at_least(MIN_TRAY_SPEED_M_S))
        }
        Field::TrayDepth => (mechanism == MultichannelByWidth).then_some(Band::at_least(0.0)),
        Field::BubblerUsage | Field::PlanForm => None,
    }
}

/// Entered numeric value of `field`, if any. Counts widen to f64 so one
/// containment check covers every numeric field.
fn entered(field: Field, inputs: &AveragerInput) -> Option<f64> {
    match field {
        Field::MaxConcentration => inputs.max_concentration_mg_l,
        Field::FinalConcentration => inputs.final_concentration_mg_l,
        Field::MeanConcentration => inputs.mean_concentration_mg_l,
        Field::WorkingPeriod => inputs.working_period_h,
        Field::Depth => inputs.depth_m,
        Field::SectionCount => inputs.section_count.map(f64::from),
        Field::SectionWidth => inputs.section_width_m,
        Field::BubblerDepth => inputs.bubbler_depth_m,
        Field::WallBubblerSpacing => inputs.wall_bubbler_spacing_m,
        Field::IntervalBubblerCount => inputs.interval_bubbler_count.map(f64::from),
        Field::IntervalBubblerSpacing => inputs.interval_bubbler_spacing_m,
        Field::ChannelCount => inputs.channel_count.map(f64::from),
        Field::TraySpeed => inputs.tray_speed_m_s,
        Field::TrayDepth => inputs.tray_depth_m,
        Field::BubblerUsage | Field::PlanForm => None,
    }
}

fn is_set(field: Field, inputs: &AveragerInput) -> bool {
    match field {
        Field::BubblerUsage => inputs.bubbler_usage.is_some(),
        Field::PlanForm => inputs.plan_form.is_some(),
        _ => entered(field, inputs).is_some(),
    }
}

const COMMON_FIELDS: [Field; 7] = [
    Field::MaxConcentration,
    Field::FinalConcentration,
    Field::MeanConcentration,
    Field::WorkingPeriod,
    Field::Depth,
    Field::SectionCount,
    Field::SectionWidth,
];

/// First required-but-unset field, in entry order.
pub(crate) fn first_missing(mechanism: MechanismType, inputs: &AveragerInput) -> Option<Field> {
    if let Some(field) = COMMON_FIELDS.iter().find(|f| !is_set(**f, inputs)) {
        return Some(*field);
    }

    let branch: &[Field] = match mechanism {
        MechanismType::Bubbling => &[
            Field::BubblerUsage,
            Field::BubblerDepth,
            Field::WallBubblerSpacing,
            Field::IntervalBubblerCount,
        ],
        MechanismType::MultichannelByWidth => {
            &[Field::ChannelCount, Field::TraySpeed, Field::TrayDepth]
        }
        MechanismType::MultichannelByLength => &[Field::ChannelCount, Field::PlanForm],
    };
    if let Some(field) = branch.iter().find(|f| !is_set(**f, inputs)) {
        return Some(*field);
    }

    // Intermediate spacing is only required once there is more than one
    // intermediate bubbler.
    if mechanism == MechanismType::Bubbling
        && inputs.interval_bubbler_count.is_some_and(|count| count > 1)
        && inputs.interval_bubbler_spacing_m.is_none()
    {
        return Some(Field::IntervalBubblerSpacing);
    }

    None
}

/// "Ready to compute" predicate: all common fields present plus the selected
/// mechanism's required subgroup.
pub fn is_ready(mechanism: MechanismType, inputs: &AveragerInput) -> bool {
    first_missing(mechanism, inputs).is_none()
}

/// Check every entered field against its currently valid range; the first
/// offending field (in declaration order) is reported with its bound.
pub fn check_ranges(mechanism: MechanismType, inputs: &AveragerInput) -> SizingResult<()> {
    for field in ALL_FIELDS {
        let (Some(value), Some(band)) = (
            entered(field, inputs),
            valid_range(field, mechanism, inputs),
        ) else {
            continue;
        };
        if !band.contains(value) {
            return Err(AveragerError::OutOfRange {
                field,
                value,
                min: band.min,
                max: band.max,
            });
        }
    }
    Ok(())
}

/// Enforce subgroup exclusivity: fields of the two inactive mechanism
/// subgroups must stay unset.
pub fn check_subgroup(mechanism: MechanismType, inputs: &AveragerInput) -> SizingResult<()> {
    let foreign: &[Field] = match mechanism {
        MechanismType::Bubbling => &[
            Field::ChannelCount,
            Field::TraySpeed,
            Field::TrayDepth,
            Field::PlanForm,
        ],
        MechanismType::MultichannelByWidth => &[
            Field::BubblerDepth,
            Field::WallBubblerSpacing,
            Field::IntervalBubblerCount,
            Field::IntervalBubblerSpacing,
            Field::BubblerUsage,
            Field::PlanForm,
        ],
        MechanismType::MultichannelByLength => &[
            Field::BubblerDepth,
            Field::WallBubblerSpacing,
            Field::IntervalBubblerCount,
            Field::IntervalBubblerSpacing,
            Field::BubblerUsage,
            Field::TraySpeed,
            Field::TrayDepth,
        ],
    };

    match foreign.iter().find(|f| is_set(**f, inputs)) {
        Some(field) => Err(AveragerError::ForeignField { field: *field }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bubbling_inputs() -> AveragerInput {
        AveragerInput {
            max_concentration_mg_l: Some(100.0),
            final_concentration_mg_l: Some(80.0),
            mean_concentration_mg_l: Some(40.0),
            working_period_h: Some(2.0),
            depth_m: Some(4.0),
            section_count: Some(2),
            section_width_m: Some(6.0),
            bubbler_depth_m: Some(4.0),
            wall_bubbler_spacing_m: Some(5.0),
            interval_bubbler_count: Some(3),
            interval_bubbler_spacing_m: Some(10.0),
            bubbler_usage: Some(wt_core::BubblerUsage::ConcentrationAveraging),
            ..AveragerInput::default()
        }
    }

    #[test]
    fn concentration_bounds_chain() {
        let mut inputs = AveragerInput::default();
        assert_eq!(
            valid_range(Field::FinalConcentration, MechanismType::Bubbling, &inputs),
            None
        );

        inputs.max_concentration_mg_l = Some(100.0);
        let band =
            valid_range(Field::FinalConcentration, MechanismType::Bubbling, &inputs).unwrap();
        assert_eq!((band.min, band.max), (0.0, 100.0));

        inputs.final_concentration_mg_l = Some(80.0);
        let band = valid_range(Field::MeanConcentration, MechanismType::Bubbling, &inputs).unwrap();
        assert_eq!((band.min, band.max), (0.0, 80.0));
    }

    #[test]
    fn depth_band_depends_on_mechanism() {
        let inputs = AveragerInput::default();
        let bubbling = valid_range(Field::Depth, MechanismType::Bubbling, &inputs).unwrap();
        let width = valid_range(Field::Depth, MechanismType::MultichannelByWidth, &inputs).unwrap();
        let length =
            valid_range(Field::Depth, MechanismType::MultichannelByLength, &inputs).unwrap();
        assert_eq!(bubbling, DEPTH_BUBBLING);
        assert_eq!(width, DEPTH_MULTICHANNEL_WIDTH);
        assert_eq!(length, DEPTH_MULTICHANNEL_LENGTH);
    }

    #[test]
    fn bubbler_spacing_scales_with_submersion_depth() {
        let mut inputs = AveragerInput::default();
        assert_eq!(
            valid_range(Field::WallBubblerSpacing, MechanismType::Bubbling, &inputs),
            None
        );

        inputs.bubbler_depth_m = Some(4.0);
        let wall =
            valid_range(Field::WallBubblerSpacing, MechanismType::Bubbling, &inputs).unwrap();
        assert_eq!((wall.min, wall.max), (4.0, 6.0));
        let interval = valid_range(
            Field::IntervalBubblerSpacing,
            MechanismType::Bubbling,
            &inputs,
        )
        .unwrap();
        assert_eq!((interval.min, interval.max), (8.0, 12.0));
    }

    #[test]
    fn resolver_is_idempotent() {
        let inputs = bubbling_inputs();
        for field in ALL_FIELDS {
            assert_eq!(
                valid_range(field, MechanismType::Bubbling, &inputs),
                valid_range(field, MechanismType::Bubbling, &inputs),
            );
        }
    }

    #[test]
    fn ready_requires_the_mechanism_subgroup() {
        let mut inputs = bubbling_inputs();
        assert!(is_ready(MechanismType::Bubbling, &inputs));

        inputs.bubbler_depth_m = None;
        assert!(!is_ready(MechanismType::Bubbling, &inputs));
        assert_eq!(
            first_missing(MechanismType::Bubbling, &inputs),
            Some(Field::BubblerDepth)
        );
    }

    #[test]
    fn interval_spacing_required_only_above_one_bubbler() {
        let mut inputs = bubbling_inputs();
        inputs.interval_bubbler_spacing_m = None;

        inputs.interval_bubbler_count = Some(1);
        assert!(is_ready(MechanismType::Bubbling, &inputs));

        inputs.interval_bubbler_count = Some(2);
        assert!(!is_ready(MechanismType::Bubbling, &inputs));
        assert_eq!(
            first_missing(MechanismType::Bubbling, &inputs),
            Some(Field::IntervalBubblerSpacing)
        );
    }

    #[test]
    fn zero_mean_concentration_counts_as_entered() {
        let mut inputs = bubbling_inputs();
        inputs.mean_concentration_mg_l = Some(0.0);
        assert!(is_ready(MechanismType::Bubbling, &inputs));
        assert!(check_ranges(MechanismType::Bubbling, &inputs).is_ok());
    }

    #[test]
    fn out_of_range_reports_field_and_bound() {
        let mut inputs = bubbling_inputs();
        inputs.mean_concentration_mg_l = Some(90.0); // above the permissible 80
        let err = check_ranges(MechanismType::Bubbling, &inputs).unwrap_err();
        assert_eq!(
            err,
            AveragerError::OutOfRange {
                field: Field::MeanConcentration,
                value: 90.0,
                min: 0.0,
                max: 80.0,
            }
        );
    }

    #[test]
    fn foreign_subgroup_field_is_rejected() {
        let mut inputs = bubbling_inputs();
        inputs.tray_speed_m_s = Some(0.6);
        let err = check_subgroup(MechanismType::Bubbling, &inputs).unwrap_err();
        assert_eq!(
            err,
            AveragerError::ForeignField {
                field: Field::TraySpeed
            }
        );
    }
}
