//! Averaging-coefficient calculation.

use crate::error::{AveragerError, SizingResult};

/// Required averaging coefficient K = (Cmax − Cmid) / (Cadm − Cmid).
///
/// Undefined when the permissible and mean concentrations coincide; the
/// caller must withhold downstream computation instead of letting a
/// non-finite coefficient reach the geometry formulas.
pub fn averaging_coefficient(
    max_mg_l: f64,
    final_mg_l: f64,
    mean_mg_l: f64,
) -> SizingResult<f64> {
    if final_mg_l == mean_mg_l {
        return Err(AveragerError::UndefinedCoefficient);
    }
    Ok((max_mg_l - mean_mg_l) / (final_mg_l - mean_mg_l))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use wt_core::{Tolerances, nearly_equal};

    proptest! {
        // Any ordered triple with final > mean yields K >= 1, and inverting
        // the formula recovers the permissible concentration.
        #[test]
        fn inverse_recovers_permissible(mean in 0.0_f64..500.0, gap_final in 1e-3_f64..500.0, gap_max in 0.0_f64..500.0) {
            let final_mg_l = mean + gap_final;
            let max_mg_l = final_mg_l + gap_max;

            let k = averaging_coefficient(max_mg_l, final_mg_l, mean).unwrap();
            prop_assert!(k >= 1.0);

            let reconstructed = mean + (max_mg_l - mean) / k;
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(reconstructed, final_mg_l, tol));
        }
    }
}
