//! Progression and faction reputation types

use serde::{Deserialize, Serialize};

/// A generic progression track (rank, reputation, season pass, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progression {
    pub hash: u32,
    pub level: i32,
    pub cap: i32,
    pub daily_progress: i32,
    pub daily_limit: i32,
    pub weekly_progress: i32,
    pub weekly_limit: i32,
    pub current_progress: i32,
    pub progress_to_next_level: i32,
    pub next_level_at: i32,
}

/// Faction reputation: a progression plus the faction identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Faction {
    pub faction_hash: u32,
    pub faction_vendor_index: i32,
    pub progression: Progression,
}
