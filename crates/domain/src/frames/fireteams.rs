//! Deserializers for fireteam listings and FireteamFinder lobbies

use serde_json::Value;

use super::support::{
    array_or_empty, as_object, boolean, display_string, id, int_or, object_field, opt_id,
    opt_timestamp, timestamp, Object,
};
use super::user::membership_from_object;
use super::FrameError;
use crate::types::{Fireteam, FireteamLobby, FireteamLobbySettings, FireteamMember};

fn fireteam_from_object(obj: &Object, context: &'static str) -> Result<Fireteam, FrameError> {
    Ok(Fireteam {
        id: id(obj, context, "fireteamId")?,
        group_id: int_or(obj, "groupId", 0),
        platform: int_or(obj, "platform", 0).into(),
        activity_type: int_or(obj, "activityType", 0).into(),
        is_immediate: boolean(obj, "isImmediate"),
        scheduled_time: opt_timestamp(obj, "scheduledTime"),
        owner_membership_id: int_or(obj, "ownerMembershipId", 0),
        player_slot_count: int_or(obj, "playerSlotCount", 0) as i32,
        available_player_slots: int_or(obj, "availablePlayerSlotCount", 0) as i32,
        available_alternate_slots: int_or(obj, "availableAlternateSlotCount", 0) as i32,
        title: display_string(obj, "title"),
        created_at: timestamp(obj, context, "dateCreated")?,
        is_public: boolean(obj, "isPublic"),
        locale: display_string(obj, "locale"),
        is_valid: boolean(obj, "isValid"),
    })
}

/// Deserialize one fireteam listing.
pub fn deserialize_fireteam(value: &Value) -> Result<Fireteam, FrameError> {
    const CTX: &str = "fireteam";
    fireteam_from_object(as_object(value, CTX)?, CTX)
}

/// Deserialize a search page of fireteam listings. Entries that do not
/// parse are skipped.
pub fn deserialize_fireteams(value: &Value) -> Result<Vec<Fireteam>, FrameError> {
    const CTX: &str = "fireteam search";
    let obj = as_object(value, CTX)?;

    Ok(array_or_empty(obj, "results")
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            // Detail routes nest the listing under `Summary`.
            let listing = entry.get("Summary").and_then(Value::as_object).unwrap_or(entry);
            fireteam_from_object(listing, CTX).ok()
        })
        .collect())
}

/// Deserialize the members of a fireteam detail response.
pub fn deserialize_fireteam_members(value: &Value) -> Result<Vec<FireteamMember>, FrameError> {
    const CTX: &str = "fireteam members";
    let obj = as_object(value, CTX)?;

    array_or_empty(obj, "Members")
        .iter()
        .map(|entry| {
            let member = as_object(entry, CTX)?;
            let info = object_field(member, CTX, "destinyUserInfo")?;
            Ok(FireteamMember {
                membership: membership_from_object(info, CTX)?,
                character_id: opt_id(member, "characterId"),
                date_joined: timestamp(member, CTX, "dateJoined")?,
                has_microphone: boolean(member, "hasMicrophone"),
                last_platform_invite_date: opt_timestamp(member, "lastPlatformInviteAttemptDate"),
            })
        })
        .collect()
}

fn settings_from_object(obj: &Object) -> FireteamLobbySettings {
    FireteamLobbySettings {
        max_player_count: int_or(obj, "maxPlayerCount", 0) as i32,
        online_players_only: boolean(obj, "onlinePlayersOnly"),
        privacy_scope: int_or(obj, "privacyScope", 0) as i32,
        scheduled_time: opt_timestamp(obj, "scheduledDateTime"),
        clan_id: int_or(obj, "clanId", 0),
        activity_graph_hash: int_or(obj, "activityGraphHash", 0) as u32,
        activity_hash: int_or(obj, "activityHash", 0) as u32,
    }
}

/// Deserialize one FireteamFinder lobby.
pub fn deserialize_lobby(value: &Value) -> Result<FireteamLobby, FrameError> {
    const CTX: &str = "lobby";
    let obj = as_object(value, CTX)?;

    Ok(FireteamLobby {
        id: id(obj, CTX, "lobbyId")?,
        revision: int_or(obj, "revision", 0) as i32,
        state: int_or(obj, "state", 0) as i32,
        owner_id: int_or(obj, "ownerId", 0),
        player_count: int_or(obj, "playerCount", 0) as i32,
        created_at: timestamp(obj, CTX, "createdDateTime")?,
        settings: object_field(obj, CTX, "settings").map(settings_from_object).unwrap_or_default(),
    })
}

/// Deserialize the lobby list of a FireteamFinder response.
pub fn deserialize_lobbies(value: &Value) -> Result<Vec<FireteamLobby>, FrameError> {
    const CTX: &str = "lobbies";
    let obj = as_object(value, CTX)?;

    Ok(array_or_empty(obj, "lobbies")
        .iter()
        .filter_map(|entry| deserialize_lobby(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    //! Unit tests for fireteam deserializers.
    use serde_json::json;

    use super::*;
    use crate::enums::{FireteamActivity, FireteamPlatform};

    fn listing() -> Value {
        json!({
            "fireteamId": "9214364",
            "groupId": "4107840",
            "platform": 4,
            "activityType": 1,
            "isImmediate": true,
            "ownerMembershipId": "4611686018467284386",
            "playerSlotCount": 6,
            "availablePlayerSlotCount": 2,
            "availableAlternateSlotCount": 0,
            "title": "Last Wish full run",
            "dateCreated": "2024-05-28T02:10:00Z",
            "isPublic": true,
            "locale": "en",
            "isValid": true
        })
    }

    /// Validates `deserialize_fireteam` behavior for an immediate
    /// listing.
    ///
    /// Assertions:
    /// - Confirms platform and activity map to their enums.
    /// - Confirms an immediate listing has no scheduled time.
    #[test]
    fn test_listing() {
        let fireteam = deserialize_fireteam(&listing()).unwrap();
        assert_eq!(fireteam.platform, FireteamPlatform::STEAM);
        assert_eq!(fireteam.activity_type, FireteamActivity::RAID);
        assert!(fireteam.is_immediate);
        assert!(fireteam.scheduled_time.is_none());
        assert_eq!(fireteam.available_player_slots, 2);
    }

    /// Validates `deserialize_fireteams` behavior for both page shapes.
    ///
    /// Assertions:
    /// - Confirms bare listings and `Summary`-wrapped detail entries
    ///   both parse.
    #[test]
    fn test_search_page_shapes() {
        let page = json!({ "results": [listing(), { "Summary": listing() }] });
        assert_eq!(deserialize_fireteams(&page).unwrap().len(), 2);
    }

    /// Validates `deserialize_lobby` behavior for the FireteamFinder
    /// shape.
    ///
    /// Assertions:
    /// - Confirms lobby state and host settings parse.
    #[test]
    fn test_lobby() {
        let payload = json!({
            "lobbyId": "1053712",
            "revision": 3,
            "state": 2,
            "ownerId": "4611686018467284386",
            "playerCount": 4,
            "createdDateTime": "2024-05-28T02:10:00Z",
            "settings": {
                "maxPlayerCount": 6,
                "onlinePlayersOnly": true,
                "privacyScope": 1,
                "scheduledDateTime": "2024-05-29T01:00:00Z",
                "activityHash": 910380154u32
            }
        });

        let lobby = deserialize_lobby(&payload).unwrap();
        assert_eq!(lobby.state, 2);
        assert_eq!(lobby.settings.max_player_count, 6);
        assert!(lobby.settings.scheduled_time.is_some());
        assert_eq!(lobby.settings.activity_hash, 910_380_154);
    }
}
