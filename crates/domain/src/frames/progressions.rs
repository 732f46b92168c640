//! Deserializers for progression and faction payloads

use serde_json::Value;

use super::support::{as_object, hash, int_or, opt_hash, Object};
use super::FrameError;
use crate::types::{Faction, Progression};

pub(crate) fn progression_from_object(obj: &Object) -> Progression {
    // Progressions keyed by hash sometimes omit `progressionHash` inside
    // the body; zero is carried for those.
    Progression {
        hash: opt_hash(obj, "progressionHash").unwrap_or(0),
        level: int_or(obj, "level", 0) as i32,
        cap: int_or(obj, "levelCap", 0) as i32,
        daily_progress: int_or(obj, "dailyProgress", 0) as i32,
        daily_limit: int_or(obj, "dailyLimit", 0) as i32,
        weekly_progress: int_or(obj, "weeklyProgress", 0) as i32,
        weekly_limit: int_or(obj, "weeklyLimit", 0) as i32,
        current_progress: int_or(obj, "currentProgress", 0) as i32,
        progress_to_next_level: int_or(obj, "progressToNextLevel", 0) as i32,
        next_level_at: int_or(obj, "nextLevelAt", 0) as i32,
    }
}

/// Deserialize one progression track.
pub fn deserialize_progression(value: &Value) -> Result<Progression, FrameError> {
    Ok(progression_from_object(as_object(value, "progression")?))
}

/// Deserialize one faction reputation entry.
pub fn deserialize_faction(value: &Value) -> Result<Faction, FrameError> {
    const CTX: &str = "faction";
    let obj = as_object(value, CTX)?;

    Ok(Faction {
        faction_hash: hash(obj, CTX, "factionHash")?,
        faction_vendor_index: int_or(obj, "factionVendorIndex", -1) as i32,
        progression: progression_from_object(obj),
    })
}
