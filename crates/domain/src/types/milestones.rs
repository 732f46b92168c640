//! Milestone types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public milestone window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub hash: u32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub order: i32,
    pub available_quests: Vec<MilestoneQuest>,
    pub activities: Vec<MilestoneActivity>,
}

/// A quest currently offered by a milestone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MilestoneQuest {
    pub item_hash: u32,
}

/// An activity variant offered by a milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneActivity {
    pub hash: u32,
    pub challenge_objective_hashes: Vec<u32>,
    pub modifier_hashes: Vec<u32>,
}

/// Localized editorial content attached to a milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneContent {
    pub about: String,
    pub status: String,
    pub tips: Vec<String>,
}
