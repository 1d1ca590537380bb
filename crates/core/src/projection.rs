//! Weekly projection lookup.

use crate::league::Player;

/// Projected points for `week`.
///
/// Prefers the projection line for exactly that scoring period. Without
/// one, returns the most recent projection ordered by season then period.
/// Returns `None` when the player carries no projection with a total.
pub fn projection_for_week(player: &Player, week: i64) -> Option<f64> {
    let exact = player
        .stats
        .iter()
        .find(|s| s.scoring_period_id == Some(week) && s.is_usable_projection())
        .and_then(|s| s.applied_total);
    if exact.is_some() {
        return exact;
    }

    let mut projections: Vec<_> = player
        .stats
        .iter()
        .filter(|s| s.is_usable_projection())
        .collect();
    projections.sort_by_key(|s| (s.season_id, s.scoring_period_id));
    projections.last().and_then(|s| s.applied_total)
}

/// Score used when ranking start/sit candidates.
///
/// Falls back to `percent_owned / 10` when the player has no projection at
/// all, and to `0.0` when ownership is unknown too. The ownership proxy is a
/// heuristic kept for compatibility with existing clients.
pub fn ranking_score(player: &Player, week: i64) -> f64 {
    projection_for_week(player, week)
        .or_else(|| player.percent_owned().map(|pct| pct / 10.0))
        .unwrap_or(0.0)
}

/// Round to two decimal places for display.
///
/// Halves round away from zero, so `0.125` becomes `0.13` and `-0.125`
/// becomes `-0.13`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
