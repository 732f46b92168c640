//! The composite profile response
//!
//! `Component` mirrors the remote's mega-response: every subtree is
//! individually optional and present only when the caller requested the
//! matching component type and the remote chose to include it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Artifact, Character, CharacterProgressions, Collectible, DestinyMembership, ItemsComponent,
    NodeStatus, ProfileItem, Record, RecordsComponent, RenderedData,
};
use crate::enums::GameMode;

/// The composite profile response. Absent subtrees are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Component {
    pub profile: Option<ProfileComponent>,
    pub profile_progression: Option<ProfileProgressionComponent>,
    pub profile_currencies: Option<Vec<ProfileItem>>,
    pub profile_inventories: Option<Vec<ProfileItem>>,
    pub profile_records: Option<RecordsComponent>,
    /// Characters keyed by character id.
    pub characters: Option<HashMap<i64, Character>>,
    pub character_inventories: Option<HashMap<i64, Vec<ProfileItem>>>,
    pub character_equipment: Option<HashMap<i64, Vec<ProfileItem>>>,
    pub character_activities: Option<HashMap<i64, ActivitiesComponent>>,
    pub character_render_data: Option<HashMap<i64, RenderedData>>,
    pub character_progressions: Option<HashMap<i64, CharacterProgressions>>,
    pub character_records: Option<HashMap<i64, HashMap<u32, Record>>>,
    pub item_components: Option<ItemsComponent>,
    /// Profile-scoped collectibles keyed by collectible hash.
    pub collectibles: Option<HashMap<u32, Collectible>>,
    /// Profile-scoped presentation nodes keyed by node hash.
    pub presentation_nodes: Option<HashMap<u32, NodeStatus>>,
    /// Profile-scoped reusable plugs keyed by plug set hash.
    pub profile_plug_sets: Option<HashMap<u32, Vec<PlugSetEntry>>>,
    pub character_plug_sets: Option<HashMap<i64, HashMap<u32, Vec<PlugSetEntry>>>>,
    /// Saved loadout slots per character, sparse slots included.
    pub character_loadouts: Option<HashMap<i64, Vec<Loadout>>>,
    pub commendations: Option<CommendationsComponent>,
}

/// The account-level profile subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileComponent {
    pub user: DestinyMembership,
    pub date_last_played: DateTime<Utc>,
    pub character_ids: Vec<i64>,
    pub season_hashes: Vec<u32>,
    pub current_season_hash: Option<u32>,
    pub versions_owned: i32,
    pub current_guardian_rank: i32,
}

/// The profile-scoped progression subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileProgressionComponent {
    pub artifact: Artifact,
    /// Checklist completion keyed by checklist hash then entry hash.
    pub checklists: HashMap<u32, HashMap<u32, bool>>,
}

/// One reusable plug available from a plug set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlugSetEntry {
    pub plug_item_hash: u32,
    pub can_insert: bool,
    pub enabled: bool,
}

/// One saved loadout slot. Empty slots carry the sentinel identity
/// hashes the remote uses and an empty item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loadout {
    pub color_hash: u32,
    pub icon_hash: u32,
    pub name_hash: u32,
    pub items: Vec<LoadoutItem>,
}

/// One equipped entry inside a saved loadout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutItem {
    pub item_instance_id: i64,
    pub plug_item_hashes: Vec<u32>,
}

/// Account-wide commendation standing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommendationsComponent {
    pub total_score: i32,
    pub score_detail_values: Vec<i32>,
    /// Per-commendation totals keyed by commendation hash.
    pub scores_by_hash: HashMap<u32, i32>,
    /// Per-node totals keyed by commendation node hash.
    pub node_scores_by_hash: HashMap<u32, i32>,
    /// Per-node share of the total, keyed by commendation node hash.
    pub node_percentages_by_hash: HashMap<u32, f64>,
}

/// One character's current-activity subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitiesComponent {
    pub date_activity_started: DateTime<Utc>,
    pub current_activity_hash: u32,
    pub current_activity_mode: Option<GameMode>,
    pub current_activity_mode_types: Vec<GameMode>,
    pub current_playlist_activity_hash: Option<u32>,
    pub last_completed_story_hash: u32,
}
