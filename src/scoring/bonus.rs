//! Cross-category bonus propagation over the relationship graph.
//!
//! A goal that scores well radiates a modest uplift to its synergistic
//! neighbours. The cap keeps transferred credit from ever dominating a
//! category's own performance.

use crate::config::ScoringConstants;
use crate::types::catalog::Relationship;
use crate::types::CategoryId;
use std::collections::BTreeMap;

/// Computes the bonus each category receives from the relationship graph.
///
/// Only edges with positive strength act, and only when the source's direct
/// score reaches the threshold. Edges pointing at categories missing from
/// `direct_scores` are ignored. Every accumulated bonus is clamped to
/// `[0, max_bonus]`.
pub fn propagate_bonuses(
    relationships: &[Relationship],
    direct_scores: &BTreeMap<CategoryId, f64>,
    constants: &ScoringConstants,
) -> BTreeMap<CategoryId, f64> {
    let mut bonuses: BTreeMap<CategoryId, f64> =
        direct_scores.keys().map(|id| (*id, 0.0)).collect();

    for edge in relationships {
        if edge.strength <= 0.0 {
            continue;
        }
        let Some(direct) = direct_scores.get(&edge.source) else {
            continue;
        };
        if *direct < constants.bonus_threshold {
            continue;
        }
        let Some(accumulator) = bonuses.get_mut(&edge.target) else {
            continue;
        };
        *accumulator += (direct - constants.bonus_threshold) * edge.strength * constants.bonus_factor;
    }

    for bonus in bonuses.values_mut() {
        *bonus = bonus.clamp(0.0, constants.max_bonus);
    }
    bonuses
}
