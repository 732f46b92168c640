//! Bungie.Net and Destiny user types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Image;
use crate::enums::MembershipType;

/// A Bungie.Net account profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BungieUser {
    pub id: i64,
    /// The display name; the Undefined sentinel when the remote hides it.
    pub name: String,
    /// The four-digit discriminator paired with the global display name.
    pub code: Option<i16>,
    /// `name#code`, already joined by the remote.
    pub unique_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub about: Option<String>,
    pub status: Option<String>,
    pub locale: Option<String>,
    pub picture: Image,
    pub psn_name: Option<String>,
    pub steam_name: Option<String>,
    pub twitch_name: Option<String>,
    pub blizzard_name: Option<String>,
    pub stadia_name: Option<String>,
    pub egs_name: Option<String>,
    pub theme_id: i64,
    pub theme_name: String,
    pub show_activity: bool,
    pub title: Option<String>,
    pub profile_ban_expire: Option<DateTime<Utc>>,
}

/// A Destiny membership on a specific platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinyMembership {
    pub id: i64,
    pub name: String,
    pub code: Option<i16>,
    pub last_seen_name: String,
    #[serde(rename = "type")]
    pub membership_type: MembershipType,
    pub is_public: bool,
    pub crossave_override: MembershipType,
    pub icon: Image,
    /// Platforms this profile is reachable from under cross save.
    pub types: Vec<MembershipType>,
}

impl DestinyMembership {
    /// `name#code` when the discriminator is known, the bare name
    /// otherwise.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.code {
            Some(code) => format!("{}#{code}", self.name),
            None => self.name.clone(),
        }
    }
}
