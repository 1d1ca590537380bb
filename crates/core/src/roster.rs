//! Starter / bench split of a roster snapshot.

use crate::league::RosterEntry;
use crate::lineup::{is_active_slot, BENCH_SLOT};

/// Split roster entries into `(starters, bench)`, preserving input order.
///
/// Injured-reserve entries land in neither list: they can't be started and
/// aren't swap candidates.
pub fn partition(entries: &[RosterEntry]) -> (Vec<&RosterEntry>, Vec<&RosterEntry>) {
    let starters = entries
        .iter()
        .filter(|e| is_active_slot(e.lineup_slot_id))
        .collect();
    let bench = entries
        .iter()
        .filter(|e| e.lineup_slot_id == BENCH_SLOT)
        .collect();
    (starters, bench)
}
