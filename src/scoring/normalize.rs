//! Normalization of one category's raw points into a 0-10 direct score.

use crate::config::ScoringConstants;

/// Maps `(raw_score, max_possible)` to a direct score in [0, 10].
///
/// Pure function, applied in order: boost the raw/max ratio and clamp to 10,
/// floor any nonzero engagement at `floor`, then amplify the mid band so
/// incremental improvement in the middle range is rewarded. Scores at or above
/// `mid_band_high` are left untouched.
pub fn normalize_direct(raw_score: f64, max_possible: f64, constants: &ScoringConstants) -> f64 {
    if max_possible <= 0.0 {
        return 0.0;
    }

    let mut normalized = (raw_score / max_possible * 10.0 * constants.boost).min(10.0);

    if raw_score > 0.0 && normalized < constants.floor {
        normalized = constants.floor;
    }

    if normalized >= constants.mid_band_low && normalized < constants.mid_band_high {
        normalized =
            constants.mid_band_low + (normalized - constants.mid_band_low) * constants.mid_scale;
    }

    normalized.clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ScoringConstants {
        ScoringConstants::default()
    }

    #[test]
    fn zero_raw_scores_zero() {
        assert_eq!(normalize_direct(0.0, 10.0, &defaults()), 0.0);
    }

    #[test]
    fn zero_max_scores_zero_regardless_of_raw() {
        assert_eq!(normalize_direct(5.0, 0.0, &defaults()), 0.0);
        assert_eq!(normalize_direct(5.0, -1.0, &defaults()), 0.0);
    }

    #[test]
    fn tiny_nonzero_engagement_hits_the_floor_exactly() {
        // 1/100 * 12.5 = 0.125, floored to 3.0; the mid-band rescale of an
        // exact floor value is a no-op.
        assert_eq!(normalize_direct(1.0, 100.0, &defaults()), 3.0);
    }

    #[test]
    fn full_marks_saturate_at_ten() {
        // ratio 1.0 boosted to 12.5, clamped to 10.
        assert_eq!(normalize_direct(5.0, 5.0, &defaults()), 10.0);
        assert_eq!(normalize_direct(10.0, 10.0, &defaults()), 10.0);
    }

    #[test]
    fn mid_band_values_are_amplified() {
        // ratio 0.4 -> 5.0 pre-scaling -> 3 + 2 * 1.2 = 5.4.
        let score = normalize_direct(4.0, 10.0, &defaults());
        assert!((score - 5.4).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn band_edges_behave_as_specified() {
        // Exactly 3.0 pre-scaling stays 3.0.
        let at_low = normalize_direct(2.4, 10.0, &defaults());
        assert!((at_low - 3.0).abs() < 1e-12, "got {at_low}");

        // Exactly 7.0 pre-scaling is outside the band and untouched.
        let at_high = normalize_direct(5.6, 10.0, &defaults());
        assert!((at_high - 7.0).abs() < 1e-12, "got {at_high}");

        // Just below 7.0 is still inside the band.
        let below_high = normalize_direct(5.599, 10.0, &defaults());
        assert!(below_high > at_low && below_high < 10.0);
    }

    #[test]
    fn result_is_always_within_bounds() {
        let constants = defaults();
        for raw_tenths in 0..=200 {
            for max_tenths in 0..=100 {
                let raw = f64::from(raw_tenths) / 10.0;
                let max = f64::from(max_tenths) / 10.0;
                let score = normalize_direct(raw, max, &constants);
                assert!(
                    (0.0..=10.0).contains(&score),
                    "normalize({raw}, {max}) = {score} out of bounds"
                );
            }
        }
    }

    #[test]
    fn monotonic_in_raw_within_each_band() {
        let constants = defaults();
        // The mid-band rescale steps down at the band's upper edge, so
        // monotonicity is checked per segment rather than across it.
        let segments: [(f64, f64); 3] = [(0.0, 2.39), (2.4, 5.59), (5.6, 12.0)];
        for (lo, hi) in segments {
            let mut previous = f64::NEG_INFINITY;
            let steps = 50;
            for step in 0..=steps {
                let raw = lo + (hi - lo) * f64::from(step) / f64::from(steps);
                let score = normalize_direct(raw, 10.0, &constants);
                assert!(
                    score >= previous,
                    "normalize({raw}, 10) = {score} dropped below {previous}"
                );
                previous = score;
            }
        }
    }

    #[test]
    fn negative_raw_is_clamped_to_zero() {
        assert_eq!(normalize_direct(-3.0, 10.0, &defaults()), 0.0);
    }

    #[test]
    fn overridden_constants_change_the_curve() {
        let constants = ScoringConstants {
            boost: 1.0,
            floor: 0.0,
            mid_scale: 1.0,
            ..ScoringConstants::default()
        };
        // With boost/floor/scaling neutralized this is plain ratio * 10.
        assert_eq!(normalize_direct(4.0, 10.0, &constants), 4.0);
        assert_eq!(normalize_direct(1.0, 100.0, &constants), 0.1);
    }
}
