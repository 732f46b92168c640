//! Deserializers for seasonal artifact payloads

use serde_json::Value;

use super::progressions::progression_from_object;
use super::support::{array_or_empty, as_object, boolean, hash, int_or, opt_object_field};
use super::FrameError;
use crate::types::{Artifact, ArtifactTier, ArtifactTierItem, CharacterArtifact, Progression};

fn progression_of(obj: &serde_json::Map<String, Value>, name: &str) -> Progression {
    opt_object_field(obj, name).map(progression_from_object).unwrap_or_default()
}

/// Deserialize the profile-scoped seasonal artifact.
pub fn deserialize_artifact(value: &Value) -> Result<Artifact, FrameError> {
    const CTX: &str = "artifact";
    let obj = as_object(value, CTX)?;

    Ok(Artifact {
        hash: hash(obj, CTX, "artifactHash")?,
        points_acquired: int_or(obj, "pointsAcquired", 0) as i32,
        power_bonus: int_or(obj, "powerBonus", 0) as i32,
        point_progression: progression_of(obj, "pointProgression"),
        power_bonus_progression: progression_of(obj, "powerBonusProgression"),
    })
}

/// Deserialize the character-scoped seasonal artifact with unlock tiers.
pub fn deserialize_character_artifact(value: &Value) -> Result<CharacterArtifact, FrameError> {
    const CTX: &str = "character artifact";
    let obj = as_object(value, CTX)?;

    let tiers = array_or_empty(obj, "tiers")
        .iter()
        .filter_map(Value::as_object)
        .map(|tier| ArtifactTier {
            hash: int_or(tier, "tierHash", 0) as u32,
            is_unlocked: boolean(tier, "isUnlocked"),
            points_to_unlock: int_or(tier, "pointsToUnlock", 0) as i32,
            items: array_or_empty(tier, "items")
                .iter()
                .filter_map(Value::as_object)
                .map(|item| ArtifactTierItem {
                    hash: int_or(item, "itemHash", 0) as u32,
                    is_active: boolean(item, "isActive"),
                })
                .collect(),
        })
        .collect();

    Ok(CharacterArtifact {
        hash: hash(obj, CTX, "artifactHash")?,
        points_used: int_or(obj, "pointsUsed", 0) as i32,
        reset_count: int_or(obj, "resetCount", 0) as i32,
        tiers,
    })
}
