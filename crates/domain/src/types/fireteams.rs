//! Fireteam listing and FireteamFinder lobby types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DestinyMembership;
use crate::enums::{FireteamActivity, FireteamPlatform};

/// A recruitment listing from the fireteam board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fireteam {
    pub id: i64,
    pub group_id: i64,
    pub platform: FireteamPlatform,
    pub activity_type: FireteamActivity,
    pub is_immediate: bool,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub owner_membership_id: i64,
    pub player_slot_count: i32,
    pub available_player_slots: i32,
    pub available_alternate_slots: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub is_public: bool,
    pub locale: String,
    pub is_valid: bool,
}

/// A FireteamFinder lobby.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireteamLobby {
    pub id: i64,
    pub revision: i32,
    pub state: i32,
    pub owner_id: i64,
    pub player_count: i32,
    pub created_at: DateTime<Utc>,
    pub settings: FireteamLobbySettings,
}

/// Host-chosen settings for a FireteamFinder lobby.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FireteamLobbySettings {
    pub max_player_count: i32,
    pub online_players_only: bool,
    pub privacy_scope: i32,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub clan_id: i64,
    pub activity_graph_hash: u32,
    pub activity_hash: u32,
}

/// A member of a fireteam listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireteamMember {
    pub membership: DestinyMembership,
    pub character_id: Option<i64>,
    pub date_joined: DateTime<Utc>,
    pub has_microphone: bool,
    pub last_platform_invite_date: Option<DateTime<Utc>>,
}
