//! ESPN lineup-slot and position codes.

/// Lineup slot of a benched player.
pub const BENCH_SLOT: i64 = 20;

/// Lineup slot of a player on injured reserve.
pub const INJURED_RESERVE_SLOT: i64 = 21;

/// True for every slot that counts toward the weekly score.
pub fn is_active_slot(slot_id: i64) -> bool {
    slot_id != BENCH_SLOT && slot_id != INJURED_RESERVE_SLOT
}

/// Short label for a lineup slot id.
pub fn slot_label(slot_id: i64) -> &'static str {
    match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        BENCH_SLOT => "BE",
        INJURED_RESERVE_SLOT => "IR",
        23 => "FLEX",
        24 => "ER",
        _ => "UNKNOWN",
    }
}

/// Short label for a player's default position id.
pub fn position_label(position_id: i64) -> &'static str {
    match position_id {
        1 => "QB",
        2 => "RB",
        3 => "WR",
        4 => "TE",
        5 => "K",
        7 => "P",
        9 => "DT",
        10 => "DE",
        11 => "LB",
        12 => "CB",
        13 => "S",
        14 => "HC",
        16 => "D/ST",
        _ => "UNKNOWN",
    }
}
