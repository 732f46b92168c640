//! Seasonal artifact types

use serde::{Deserialize, Serialize};

use super::Progression;

/// The profile-scoped seasonal artifact state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifact {
    pub hash: u32,
    pub points_acquired: i32,
    pub power_bonus: i32,
    pub point_progression: Progression,
    pub power_bonus_progression: Progression,
}

/// The character-scoped seasonal artifact state, including unlock tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterArtifact {
    pub hash: u32,
    pub points_used: i32,
    pub reset_count: i32,
    pub tiers: Vec<ArtifactTier>,
}

/// One unlock tier of the seasonal artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactTier {
    pub hash: u32,
    pub is_unlocked: bool,
    pub points_to_unlock: i32,
    pub items: Vec<ArtifactTierItem>,
}

/// One mod choice inside an artifact tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArtifactTierItem {
    pub hash: u32,
    pub is_active: bool,
}
