//! Averager volume and section geometry.
//!
//! The volume formula is selected by discharge pattern, mechanism and the
//! position of the averaging coefficient relative to the formula threshold.
//! A coefficient sitting exactly on the threshold selects no formula and is
//! an explicit error. Section area derives from the rounded volume, and
//! section length from the rounded area.

use crate::constants::COEFFICIENT_FORMULA_THRESHOLD;
use crate::error::{AveragerError, SizingResult};
use wt_core::{DischargeType, MechanismType, round_half_away};

/// Required averager volume, m³ (rounded).
pub fn averager_volume(
    discharge: DischargeType,
    mechanism: MechanismType,
    coefficient: f64,
    second_max_flow_m3_s: f64,
    working_period_h: f64,
) -> SizingResult<f64> {
    let k = coefficient;
    let threshold = COEFFICIENT_FORMULA_THRESHOLD;
    // q·3600·t recurs in every branch
    let base = second_max_flow_m3_s * 3600.0 * working_period_h;

    let volume = match discharge {
        DischargeType::VolleyDischarge => match mechanism {
            MechanismType::Bubbling => {
                if k < threshold {
                    // Wz = 1.3·q·t / ln(K/(K−1)), defined for K > 1 only
                    if k <= 1.0 {
                        return Err(AveragerError::UndefinedVolume { coefficient: k });
                    }
                    1.3 * base / (k / (k - 1.0)).ln()
                } else if k > threshold {
                    // Wz = 1.3·q·t·K
                    1.3 * base * k
                } else {
                    return Err(AveragerError::CoefficientAtThreshold { coefficient: k });
                }
            }
            MechanismType::MultichannelByWidth | MechanismType::MultichannelByLength => {
                // Wz = 0.5·q·t·K
                0.5 * base * k
            }
        },
        DischargeType::CyclicFluctuation => {
            if k < threshold {
                // Wcir = 0.21·q·t·sqrt(K²−1), defined for K >= 1 only
                if k < 1.0 {
                    return Err(AveragerError::CoefficientBelowUnity { coefficient: k });
                }
                0.21 * base * (k * k - 1.0).sqrt()
            } else if k > threshold {
                // Wcir = 1.3·q·t·K
                1.3 * base * k
            } else {
                return Err(AveragerError::CoefficientAtThreshold { coefficient: k });
            }
        }
    };

    Ok(round_half_away(volume))
}

/// Plan area of one section, m² (rounded): F = W / (n·H).
pub fn section_area(volume_m3: f64, section_count: u32, depth_m: f64) -> f64 {
    round_half_away(volume_m3 / (section_count as f64 * depth_m))
}

/// Length of one section, m (rounded): L = F / B.
pub fn section_length(section_area_m2: f64, section_width_m: f64) -> f64 {
    round_half_away(section_area_m2 / section_width_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volley_bubbling_log_branch() {
        // K = 1.5 < 5: Wz = round(1.3·50·3600·2 / ln 3) = round(425991.95…)
        let volume = averager_volume(
            DischargeType::VolleyDischarge,
            MechanismType::Bubbling,
            1.5,
            50.0,
            2.0,
        )
        .unwrap();
        assert_eq!(volume, 425_992.0);
    }

    #[test]
    fn volley_bubbling_linear_branch() {
        let volume = averager_volume(
            DischargeType::VolleyDischarge,
            MechanismType::Bubbling,
            6.0,
            50.0,
            2.0,
        )
        .unwrap();
        assert_eq!(volume, 1.3 * 50.0 * 3600.0 * 2.0 * 6.0);
    }

    #[test]
    fn volley_multichannel_volume() {
        let volume = averager_volume(
            DischargeType::VolleyDischarge,
            MechanismType::MultichannelByWidth,
            1.5,
            50.0,
            2.0,
        )
        .unwrap();
        assert_eq!(volume, 270_000.0);
    }

    #[test]
    fn cyclic_root_branch() {
        // Wcir = round(0.21·10·3600·1·sqrt(1.5²−1)) = round(8452.34…)
        let volume = averager_volume(
            DischargeType::CyclicFluctuation,
            MechanismType::Bubbling,
            1.5,
            10.0,
            1.0,
        )
        .unwrap();
        assert_eq!(volume, 8_452.0);
    }

    #[test]
    fn coefficient_exactly_at_threshold_selects_no_formula() {
        for discharge in [
            DischargeType::VolleyDischarge,
            DischargeType::CyclicFluctuation,
        ] {
            let err =
                averager_volume(discharge, MechanismType::Bubbling, 5.0, 50.0, 2.0).unwrap_err();
            assert_eq!(err, AveragerError::CoefficientAtThreshold { coefficient: 5.0 });
        }
    }

    #[test]
    fn cyclic_below_unity_is_rejected() {
        let err = averager_volume(
            DischargeType::CyclicFluctuation,
            MechanismType::Bubbling,
            0.8,
            50.0,
            2.0,
        )
        .unwrap_err();
        assert_eq!(err, AveragerError::CoefficientBelowUnity { coefficient: 0.8 });
    }

    #[test]
    fn volley_log_branch_needs_k_above_one() {
        // K = 1 would make the log argument infinite
        let err = averager_volume(
            DischargeType::VolleyDischarge,
            MechanismType::Bubbling,
            1.0,
            50.0,
            2.0,
        )
        .unwrap_err();
        assert_eq!(err, AveragerError::UndefinedVolume { coefficient: 1.0 });
    }

    #[test]
    fn area_and_length_chain() {
        let area = section_area(425_992.0, 2, 4.0);
        assert_eq!(area, 53_249.0);
        let length = section_length(area, 6.0);
        assert_eq!(length, 8_875.0);
    }
}
