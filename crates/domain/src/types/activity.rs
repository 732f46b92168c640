//! Activity history and post-game report types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DestinyMembership;
use crate::enums::{GameMode, MembershipType};

/// Per-player scalar values shared by history entries and post-game
/// reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityValues {
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub kd_ratio: f64,
    pub kda_ratio: f64,
    pub efficiency: f64,
    pub duration_seconds: i32,
    pub opponents_defeated: i32,
    pub score: i32,
    pub team: Option<i32>,
    pub completed: bool,
    pub player_count: i32,
}

/// One entry of a character's activity history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub period: DateTime<Utc>,
    pub instance_id: i64,
    /// The activity definition hash.
    pub hash: u32,
    pub mode: GameMode,
    pub modes: Vec<GameMode>,
    pub membership_type: MembershipType,
    pub is_private: bool,
    pub values: ActivityValues,
}

/// A post-game carnage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActivity {
    pub period: DateTime<Utc>,
    pub instance_id: i64,
    pub hash: u32,
    pub mode: GameMode,
    pub modes: Vec<GameMode>,
    pub membership_type: MembershipType,
    pub starting_phase_index: Option<i32>,
    pub is_from_beginning: bool,
    pub players: Vec<PostActivityPlayer>,
    pub teams: Vec<PostActivityTeam>,
}

/// One player's slice of a post-game report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActivityPlayer {
    pub standing: i32,
    pub score: i32,
    pub character_id: i64,
    pub destiny_user: DestinyMembership,
    pub class: String,
    pub class_hash: u32,
    pub race_hash: u32,
    pub gender_hash: u32,
    pub light_level: i32,
    pub emblem_hash: u32,
    pub values: ActivityValues,
}

/// One team's slice of a post-game report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActivityTeam {
    pub id: i32,
    pub name: String,
    pub standing: i32,
    pub score: i32,
}

/// Lifetime aggregates for one activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedActivity {
    pub hash: u32,
    pub values: AggregatedActivityValues,
}

/// Lifetime per-activity totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregatedActivityValues {
    pub completions: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub wins: i32,
    pub seconds_played: i64,
    pub fastest_completion_seconds: Option<i64>,
}
