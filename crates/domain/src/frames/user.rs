//! Deserializers for Bungie.Net and Destiny user payloads

use serde_json::Value;

use super::support::{
    as_array, as_object, boolean, display_string, id, image_or_missing, int_array, int_or,
    opt_string, opt_timestamp, short_code, timestamp, Object,
};
use super::FrameError;
use crate::enums::MembershipType;
use crate::types::{BungieUser, DestinyMembership};

/// Deserialize a Bungie.Net account profile (`GeneralUser`).
pub fn deserialize_bungie_user(value: &Value) -> Result<BungieUser, FrameError> {
    const CTX: &str = "bungie user";
    let obj = as_object(value, CTX)?;

    Ok(BungieUser {
        id: id(obj, CTX, "membershipId")?,
        name: display_string(obj, "cachedBungieGlobalDisplayName"),
        code: short_code(obj, "cachedBungieGlobalDisplayNameCode"),
        unique_name: display_string(obj, "uniqueName"),
        created_at: timestamp(obj, CTX, "firstAccess")?,
        updated_at: timestamp(obj, CTX, "lastUpdate")?,
        is_deleted: boolean(obj, "isDeleted"),
        about: opt_string(obj, "about"),
        status: opt_string(obj, "statusText"),
        locale: opt_string(obj, "locale"),
        picture: image_or_missing(obj, "profilePicturePath"),
        psn_name: opt_string(obj, "psnDisplayName"),
        steam_name: opt_string(obj, "steamDisplayName"),
        twitch_name: opt_string(obj, "twitchDisplayName"),
        blizzard_name: opt_string(obj, "blizzardDisplayName"),
        stadia_name: opt_string(obj, "stadiaDisplayName"),
        egs_name: opt_string(obj, "egsDisplayName"),
        theme_id: int_or(obj, "profileTheme", 0),
        theme_name: display_string(obj, "profileThemeName"),
        show_activity: boolean(obj, "showActivity"),
        title: opt_string(obj, "userTitleDisplay"),
        profile_ban_expire: opt_timestamp(obj, "profileBanExpire"),
    })
}

pub(crate) fn membership_from_object(
    obj: &Object,
    context: &'static str,
) -> Result<DestinyMembership, FrameError> {
    // The remote spells this field `LastSeenDisplayName` on some routes
    // and `displayName` on others.
    let last_seen_name = match opt_string(obj, "LastSeenDisplayName") {
        Some(name) => name,
        None => display_string(obj, "displayName"),
    };

    Ok(DestinyMembership {
        id: id(obj, context, "membershipId")?,
        name: display_string(obj, "bungieGlobalDisplayName"),
        code: short_code(obj, "bungieGlobalDisplayNameCode"),
        last_seen_name,
        membership_type: MembershipType::from(int_or(obj, "membershipType", 0)),
        is_public: boolean(obj, "isPublic"),
        crossave_override: MembershipType::from(int_or(obj, "crossSaveOverride", 0)),
        icon: image_or_missing(obj, "iconPath"),
        types: int_array(obj, "applicableMembershipTypes")
            .into_iter()
            .map(MembershipType::from)
            .collect(),
    })
}

/// Deserialize a single Destiny membership (`UserInfoCard`).
pub fn deserialize_destiny_membership(value: &Value) -> Result<DestinyMembership, FrameError> {
    const CTX: &str = "destiny membership";
    membership_from_object(as_object(value, CTX)?, CTX)
}

/// Deserialize an array of Destiny memberships, as returned by player
/// search routes.
pub fn deserialize_destiny_memberships(
    value: &Value,
) -> Result<Vec<DestinyMembership>, FrameError> {
    as_array(value, "destiny memberships")?
        .iter()
        .map(deserialize_destiny_membership)
        .collect()
}

/// Deserialize the hard-linked-credential profile shape, which nests the
/// memberships under `destinyMemberships`.
pub fn deserialize_linked_profiles(value: &Value) -> Result<Vec<DestinyMembership>, FrameError> {
    const CTX: &str = "linked profiles";
    let obj = as_object(value, CTX)?;
    match obj.get("profiles").or_else(|| obj.get("destinyMemberships")) {
        Some(profiles) => deserialize_destiny_memberships(profiles),
        None => Ok(Vec::new()),
    }
}
