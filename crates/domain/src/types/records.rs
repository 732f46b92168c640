//! Triumph record and collectible types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Objective;
use crate::enums::RecordState;

/// One triumph record's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub state: RecordState,
    pub objectives: Option<Vec<Objective>>,
    pub interval_objectives: Option<Vec<Objective>>,
    pub intervals_redeemed_count: i32,
}

/// Triumph score totals for a profile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RecordScores {
    pub current_score: i32,
    pub lifetime_score: i32,
    pub active_score: i32,
}

/// The profile-scoped records subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsComponent {
    pub score: RecordScores,
    /// Records keyed by record hash.
    pub records: HashMap<u32, Record>,
}

/// One collectible's acquisition state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectible {
    pub state: i32,
}

/// A presentation node's completion state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NodeStatus {
    pub state: i32,
    pub progress_value: i32,
    pub completion_value: i32,
}
