//! Deserializers for clan (GroupV2) payloads

use std::collections::HashMap;

use serde_json::Value;

use super::progressions::progression_from_object;
use super::support::{
    array_or_empty, as_object, boolean, display_string, id, image_or_missing, int_array, int_or,
    object_field, opt_epoch, opt_object_field, timestamp, Object,
};
use super::user::membership_from_object;
use super::FrameError;
use crate::types::{Clan, ClanBanner, ClanFeatures, ClanMember};

fn features_from_object(obj: &Object) -> ClanFeatures {
    ClanFeatures {
        max_members: int_or(obj, "maximumMembers", 0) as i32,
        capabilities: int_or(obj, "capabilities", 0) as i32,
        membership_types: int_array(obj, "membershipTypes").into_iter().map(Into::into).collect(),
        invite_permissions: boolean(obj, "invitePermissionOverride"),
        update_banner_permissions: boolean(obj, "updateBannerPermissionOverride"),
        update_culture_permissions: boolean(obj, "updateCulturePermissionOverride"),
        join_level: int_or(obj, "joinLevel", 0) as i32,
    }
}

fn banner_from_object(obj: &Object) -> ClanBanner {
    ClanBanner {
        decal_id: int_or(obj, "decalId", 0) as u32,
        decal_color_id: int_or(obj, "decalColorId", 0) as u32,
        decal_background_color_id: int_or(obj, "decalBackgroundColorId", 0) as u32,
        gonfalon_id: int_or(obj, "gonfalonId", 0) as u32,
        gonfalon_color_id: int_or(obj, "gonfalonColorId", 0) as u32,
        gonfalon_detail_id: int_or(obj, "gonfalonDetailId", 0) as u32,
        gonfalon_detail_color_id: int_or(obj, "gonfalonDetailColorId", 0) as u32,
    }
}

fn member_from_object(obj: &Object, context: &'static str) -> Result<ClanMember, FrameError> {
    let membership = membership_from_object(object_field(obj, context, "destinyUserInfo")?, context)?;
    let bungie_membership = opt_object_field(obj, "bungieNetUserInfo")
        .and_then(|info| membership_from_object(info, context).ok());

    Ok(ClanMember {
        group_id: id(obj, context, "groupId")?,
        member_type: int_or(obj, "memberType", 0).into(),
        is_online: boolean(obj, "isOnline"),
        last_online: opt_epoch(obj, "lastOnlineStatusChange"),
        joined_at: timestamp(obj, context, "joinDate")?,
        membership,
        bungie_membership,
    })
}

/// Deserialize one clan member entry.
pub fn deserialize_clan_member(value: &Value) -> Result<ClanMember, FrameError> {
    member_from_object(as_object(value, "clan member")?, "clan member")
}

/// Deserialize the member roster of a clan from a search result page.
pub fn deserialize_clan_members(value: &Value) -> Result<Vec<ClanMember>, FrameError> {
    const CTX: &str = "clan members";
    let obj = as_object(value, CTX)?;

    array_or_empty(obj, "results")
        .iter()
        .map(|entry| member_from_object(as_object(entry, CTX)?, CTX))
        .collect()
}

fn detail_from_object(obj: &Object, context: &'static str) -> Result<Clan, FrameError> {
    let features =
        opt_object_field(obj, "features").map(features_from_object).unwrap_or_default();
    let banner_data =
        opt_object_field(obj, "clanInfo").and_then(|info| opt_object_field(info, "clanBannerData"))
            .map(banner_from_object)
            .unwrap_or_default();

    Ok(Clan {
        id: id(obj, context, "groupId")?,
        name: display_string(obj, "name"),
        group_type: int_or(obj, "groupType", 0).into(),
        created_at: timestamp(obj, context, "creationDate")?,
        member_count: int_or(obj, "memberCount", 0) as i32,
        motto: display_string(obj, "motto"),
        about: display_string(obj, "about"),
        is_public: boolean(obj, "isPublic"),
        banner: image_or_missing(obj, "bannerPath"),
        avatar: image_or_missing(obj, "avatarPath"),
        tags: array_or_empty(obj, "tags")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        chat_security: int_or(obj, "chatSecurity", 0) as i32,
        owner: None,
        features,
        progressions: HashMap::new(),
        banner_data,
        current_user_memberships: HashMap::new(),
    })
}

/// Deserialize a full group response, including founder and the calling
/// user's membership map.
pub fn deserialize_clan(value: &Value) -> Result<Clan, FrameError> {
    const CTX: &str = "clan";
    let obj = as_object(value, CTX)?;
    let detail = object_field(obj, CTX, "detail")?;

    let mut clan = detail_from_object(detail, CTX)?;

    clan.owner = opt_object_field(obj, "founder")
        .and_then(|founder| member_from_object(founder, CTX).ok());
    clan.progressions = opt_object_field(detail, "clanInfo")
        .and_then(|info| opt_object_field(info, "d2ClanProgressions"))
        .map(|map| {
            map.iter()
                .filter_map(|(key, value)| {
                    Some((key.parse().ok()?, progression_from_object(value.as_object()?)))
                })
                .collect()
        })
        .unwrap_or_default();
    clan.current_user_memberships = opt_object_field(obj, "currentUserMemberMap")
        .map(|map| {
            map.iter()
                .filter_map(|(key, value)| {
                    let member = member_from_object(value.as_object()?, CTX).ok()?;
                    Some((key.clone(), member))
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(clan)
}

/// Deserialize the bare group object used by search and membership
/// listings, which has no `detail` envelope.
pub fn deserialize_clan_summary(value: &Value) -> Result<Clan, FrameError> {
    const CTX: &str = "clan summary";
    detail_from_object(as_object(value, CTX)?, CTX)
}

/// Deserialize the groups a user belongs to.
pub fn deserialize_user_clans(value: &Value) -> Result<Vec<Clan>, FrameError> {
    const CTX: &str = "user clans";
    let obj = as_object(value, CTX)?;

    array_or_empty(obj, "results")
        .iter()
        .filter_map(|entry| entry.as_object())
        .filter_map(|entry| entry.get("group"))
        .map(deserialize_clan_summary)
        .collect()
}
