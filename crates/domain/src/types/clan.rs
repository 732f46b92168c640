//! Clan (GroupV2) types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DestinyMembership, Image, Progression};
use crate::enums::{ClanMemberType, GroupType, MembershipType};

/// A clan or general group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clan {
    pub id: i64,
    pub name: String,
    pub group_type: GroupType,
    pub created_at: DateTime<Utc>,
    pub member_count: i32,
    pub motto: String,
    pub about: String,
    pub is_public: bool,
    pub banner: Image,
    pub avatar: Image,
    pub tags: Vec<String>,
    pub chat_security: i32,
    /// The founder, when the payload is a full group response.
    pub owner: Option<ClanMember>,
    pub features: ClanFeatures,
    /// Clan progressions keyed by progression hash.
    pub progressions: HashMap<u32, Progression>,
    pub banner_data: ClanBanner,
    /// The calling user's memberships in this group, keyed by the
    /// remote's membership-type label.
    pub current_user_memberships: HashMap<String, ClanMember>,
}

/// Feature switches and limits configured on a clan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClanFeatures {
    pub max_members: i32,
    pub capabilities: i32,
    pub membership_types: Vec<MembershipType>,
    pub invite_permissions: bool,
    pub update_banner_permissions: bool,
    pub update_culture_permissions: bool,
    pub join_level: i32,
}

/// Banner decal and color selections for a clan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClanBanner {
    pub decal_id: u32,
    pub decal_color_id: u32,
    pub decal_background_color_id: u32,
    pub gonfalon_id: u32,
    pub gonfalon_color_id: u32,
    pub gonfalon_detail_id: u32,
    pub gonfalon_detail_color_id: u32,
}

/// A member of a clan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanMember {
    pub group_id: i64,
    pub member_type: ClanMemberType,
    pub is_online: bool,
    pub last_online: Option<DateTime<Utc>>,
    pub joined_at: DateTime<Utc>,
    /// The Destiny profile this membership belongs to.
    pub membership: DestinyMembership,
    /// The linked Bungie.Net profile, when the remote includes it.
    pub bungie_membership: Option<DestinyMembership>,
}
