//! Deserializer for the composite profile response
//!
//! Every subtree of the response is optional: the remote includes only
//! the components the caller requested, and privacy settings can strip
//! subtrees even then. Each present subtree is wrapped in a `data`
//! envelope.

use std::collections::HashMap;

use serde_json::Value;

use super::character::{
    deserialize_character, deserialize_character_progressions, deserialize_render_data,
};
use super::items::{deserialize_items, deserialize_items_component};
use super::records::{
    deserialize_collectibles, deserialize_nodes, deserialize_records_component, records_map,
};
use super::season::deserialize_artifact;
use super::support::{
    array_or_empty, as_object, boolean, hash_array, int_array, int_or, object_field, opt_hash,
    opt_id, opt_int, opt_object_field, timestamp, Object,
};
use super::user::membership_from_object;
use super::FrameError;
use crate::types::{
    ActivitiesComponent, CommendationsComponent, Component, Loadout, LoadoutItem, PlugSetEntry,
    ProfileComponent, ProfileProgressionComponent, Record,
};

fn data_of<'a>(obj: &'a Object, name: &str) -> Option<&'a Value> {
    opt_object_field(obj, name).and_then(|component| component.get("data"))
}

fn character_keyed<T>(
    obj: &Object,
    name: &str,
    mut parse: impl FnMut(&Value) -> Option<T>,
) -> Option<HashMap<i64, T>> {
    let data = data_of(obj, name)?.as_object()?;
    Some(
        data.iter()
            .filter_map(|(key, value)| Some((key.parse().ok()?, parse(value)?)))
            .collect(),
    )
}

fn profile_from_object(data: &Object) -> Result<ProfileComponent, FrameError> {
    const CTX: &str = "profile";
    let user = membership_from_object(object_field(data, CTX, "userInfo")?, CTX)?;

    Ok(ProfileComponent {
        user,
        date_last_played: timestamp(data, CTX, "dateLastPlayed")?,
        character_ids: int_array(data, "characterIds"),
        season_hashes: hash_array(data, "seasonHashes"),
        current_season_hash: opt_hash(data, "currentSeasonHash"),
        versions_owned: int_or(data, "versionsOwned", 0) as i32,
        current_guardian_rank: int_or(data, "currentGuardianRank", 0) as i32,
    })
}

fn profile_progression_from_object(data: &Object) -> ProfileProgressionComponent {
    let artifact = data
        .get("seasonalArtifact")
        .and_then(|artifact| deserialize_artifact(artifact).ok())
        .unwrap_or_default();

    let checklists = opt_object_field(data, "checklists")
        .map(|checklists| {
            checklists
                .iter()
                .filter_map(|(key, value)| {
                    let hash: u32 = key.parse().ok()?;
                    let entries = value
                        .as_object()?
                        .iter()
                        .filter_map(|(entry, done)| {
                            Some((entry.parse().ok()?, done.as_bool()?))
                        })
                        .collect();
                    Some((hash, entries))
                })
                .collect()
        })
        .unwrap_or_default();

    ProfileProgressionComponent { artifact, checklists }
}

fn plug_sets_from_value(value: &Value) -> Option<HashMap<u32, Vec<PlugSetEntry>>> {
    let plugs = value.as_object()?.get("plugs")?.as_object()?;
    Some(
        plugs
            .iter()
            .filter_map(|(key, entries)| {
                let hash: u32 = key.parse().ok()?;
                let entries = entries
                    .as_array()?
                    .iter()
                    .filter_map(|entry| {
                        let entry = entry.as_object()?;
                        Some(PlugSetEntry {
                            plug_item_hash: opt_hash(entry, "plugItemHash")?,
                            can_insert: boolean(entry, "canInsert"),
                            enabled: boolean(entry, "enabled"),
                        })
                    })
                    .collect();
                Some((hash, entries))
            })
            .collect(),
    )
}

fn loadouts_from_value(value: &Value) -> Option<Vec<Loadout>> {
    let loadouts = value.as_object()?.get("loadouts")?.as_array()?;
    Some(
        loadouts
            .iter()
            .filter_map(|loadout| {
                let obj = loadout.as_object()?;
                let items = array_or_empty(obj, "items")
                    .iter()
                    .filter_map(|item| {
                        let item = item.as_object()?;
                        Some(LoadoutItem {
                            item_instance_id: opt_id(item, "itemInstanceId")?,
                            plug_item_hashes: hash_array(item, "plugItemHashes"),
                        })
                    })
                    .collect();
                Some(Loadout {
                    color_hash: int_or(obj, "colorHash", 0) as u32,
                    icon_hash: int_or(obj, "iconHash", 0) as u32,
                    name_hash: int_or(obj, "nameHash", 0) as u32,
                    items,
                })
            })
            .collect(),
    )
}

fn hash_keyed_of<T>(
    data: &Object,
    name: &str,
    mut read: impl FnMut(&Value) -> Option<T>,
) -> HashMap<u32, T> {
    opt_object_field(data, name)
        .map(|map| {
            map.iter()
                .filter_map(|(key, value)| Some((key.parse().ok()?, read(value)?)))
                .collect()
        })
        .unwrap_or_default()
}

fn commendations_from_object(data: &Object) -> CommendationsComponent {
    CommendationsComponent {
        total_score: int_or(data, "totalScore", 0) as i32,
        score_detail_values: int_array(data, "scoreDetailValues")
            .into_iter()
            .map(|value| value as i32)
            .collect(),
        scores_by_hash: hash_keyed_of(data, "commendationScoresByHash", |value| {
            value.as_i64().map(|score| score as i32)
        }),
        node_scores_by_hash: hash_keyed_of(data, "commendationNodeScoresByHash", |value| {
            value.as_i64().map(|score| score as i32)
        }),
        node_percentages_by_hash: hash_keyed_of(
            data,
            "commendationNodePercentagesByHash",
            Value::as_f64,
        ),
    }
}

fn activities_from_value(value: &Value) -> Option<ActivitiesComponent> {
    let obj = value.as_object()?;

    Some(ActivitiesComponent {
        date_activity_started: timestamp(obj, "character activities", "dateActivityStarted").ok()?,
        current_activity_hash: int_or(obj, "currentActivityHash", 0) as u32,
        current_activity_mode: opt_int(obj, "currentActivityModeType").map(Into::into),
        current_activity_mode_types: int_array(obj, "currentActivityModeTypes")
            .into_iter()
            .map(Into::into)
            .collect(),
        current_playlist_activity_hash: opt_hash(obj, "currentPlaylistActivityHash"),
        last_completed_story_hash: int_or(obj, "lastCompletedStoryHash", 0) as u32,
    })
}

/// Deserialize a composite profile response into its typed subtrees.
/// Absent and privacy-stripped components read as `None`.
pub fn deserialize_component(value: &Value) -> Result<Component, FrameError> {
    const CTX: &str = "profile response";
    let obj = as_object(value, CTX)?;

    let profile = match data_of(obj, "profile").and_then(Value::as_object) {
        Some(data) => Some(profile_from_object(data)?),
        None => None,
    };

    let profile_progression = data_of(obj, "profileProgression")
        .and_then(Value::as_object)
        .map(profile_progression_from_object);

    let character_records: Option<HashMap<i64, HashMap<u32, Record>>> =
        character_keyed(obj, "characterRecords", |value| {
            Some(records_map(value.as_object()?))
        });

    Ok(Component {
        profile,
        profile_progression,
        profile_currencies: data_of(obj, "profileCurrencies")
            .and_then(|data| deserialize_items(data).ok()),
        profile_inventories: data_of(obj, "profileInventory")
            .and_then(|data| deserialize_items(data).ok()),
        profile_records: data_of(obj, "profileRecords")
            .and_then(|data| deserialize_records_component(data).ok()),
        characters: character_keyed(obj, "characters", |value| {
            deserialize_character(value).ok()
        }),
        character_inventories: character_keyed(obj, "characterInventories", |value| {
            deserialize_items(value).ok()
        }),
        character_equipment: character_keyed(obj, "characterEquipment", |value| {
            deserialize_items(value).ok()
        }),
        character_activities: character_keyed(obj, "characterActivities", activities_from_value),
        character_render_data: character_keyed(obj, "characterRenderData", |value| {
            deserialize_render_data(value).ok()
        }),
        character_progressions: character_keyed(obj, "characterProgressions", |value| {
            deserialize_character_progressions(value).ok()
        }),
        character_records,
        item_components: obj
            .get("itemComponents")
            .and_then(|components| deserialize_items_component(components).ok()),
        collectibles: data_of(obj, "profileCollectibles")
            .and_then(|data| deserialize_collectibles(data).ok()),
        presentation_nodes: data_of(obj, "profilePresentationNodes")
            .and_then(|data| deserialize_nodes(data).ok()),
        profile_plug_sets: data_of(obj, "profilePlugSets").and_then(plug_sets_from_value),
        character_plug_sets: character_keyed(obj, "characterPlugSets", plug_sets_from_value),
        character_loadouts: character_keyed(obj, "characterLoadouts", loadouts_from_value),
        commendations: data_of(obj, "profileCommendations")
            .and_then(Value::as_object)
            .map(commendations_from_object),
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for the composite profile deserializer.
    use serde_json::json;

    use super::*;
    use crate::enums::GameMode;

    /// Validates `deserialize_component` behavior for a partial
    /// response.
    ///
    /// Assertions:
    /// - Confirms requested subtrees unwrap their `data` envelopes.
    /// - Confirms unrequested subtrees read as `None`.
    #[test]
    fn test_partial_response() {
        let payload = json!({
            "profile": {
                "data": {
                    "userInfo": {
                        "membershipId": "4611686018467284386",
                        "membershipType": 3,
                        "displayName": "Dubzy"
                    },
                    "dateLastPlayed": "2024-06-01T18:30:00Z",
                    "characterIds": ["2305843009504575107"],
                    "seasonHashes": [2809059426u32, 2809059427u32],
                    "currentSeasonHash": 2809059427u32,
                    "versionsOwned": 127,
                    "currentGuardianRank": 8
                },
                "privacy": 1
            },
            "characterActivities": {
                "data": {
                    "2305843009504575107": {
                        "dateActivityStarted": "2024-06-01T18:00:00Z",
                        "currentActivityHash": 1191701339u32,
                        "currentActivityModeType": 4,
                        "currentActivityModeTypes": [7, 4],
                        "lastCompletedStoryHash": 0
                    }
                }
            }
        });

        let component = deserialize_component(&payload).unwrap();

        let profile = component.profile.expect("profile should parse");
        assert_eq!(profile.user.id, 4_611_686_018_467_284_386);
        assert_eq!(profile.character_ids, vec![2_305_843_009_504_575_107]);
        assert_eq!(profile.current_season_hash, Some(2_809_059_427));
        assert_eq!(profile.current_guardian_rank, 8);

        let activities = component.character_activities.expect("activities should parse");
        let current = &activities[&2_305_843_009_504_575_107];
        assert_eq!(current.current_activity_mode, Some(GameMode::RAID));
        assert_eq!(current.current_activity_mode_types.len(), 2);

        assert!(component.characters.is_none());
        assert!(component.item_components.is_none());
        assert!(component.collectibles.is_none());
        assert!(component.profile_plug_sets.is_none());
        assert!(component.character_loadouts.is_none());
        assert!(component.commendations.is_none());
    }

    /// Validates `deserialize_component` behavior for the checklist and
    /// artifact subtree.
    ///
    /// Assertions:
    /// - Confirms the seasonal artifact parses out of the progression
    ///   subtree.
    /// - Confirms checklists key by hash at both levels.
    #[test]
    fn test_profile_progression() {
        let payload = json!({
            "profileProgression": {
                "data": {
                    "seasonalArtifact": {
                        "artifactHash": 2894222926u32,
                        "pointsAcquired": 12,
                        "powerBonus": 9
                    },
                    "checklists": {
                        "1697465175": { "1955149021": true, "3251761357": false }
                    }
                }
            }
        });

        let component = deserialize_component(&payload).unwrap();
        let progression = component.profile_progression.expect("subtree should parse");
        assert_eq!(progression.artifact.power_bonus, 9);
        assert!(progression.checklists[&1_697_465_175][&1_955_149_021]);
        assert!(!progression.checklists[&1_697_465_175][&3_251_761_357]);
    }

    /// Validates `deserialize_component` behavior for the plug-set,
    /// loadout, and commendation subtrees.
    ///
    /// Assertions:
    /// - Confirms profile and character plug sets key by plug set hash.
    /// - Confirms loadouts group per character with their item plugs.
    /// - Confirms commendation maps key by node hash.
    /// - Ensures a malformed plug entry is skipped, not fatal.
    #[test]
    fn test_plug_sets_loadouts_and_commendations() {
        let payload = json!({
            "profilePlugSets": {
                "data": {
                    "plugs": {
                        "1402935016": [
                            { "plugItemHash": 3523296417u32, "canInsert": true, "enabled": true },
                            { "canInsert": true }
                        ]
                    }
                }
            },
            "characterPlugSets": {
                "data": {
                    "2305843009504575107": {
                        "plugs": {
                            "287042893": [
                                { "plugItemHash": 1847790787u32, "canInsert": false, "enabled": true }
                            ]
                        }
                    }
                }
            },
            "characterLoadouts": {
                "data": {
                    "2305843009504575107": {
                        "loadouts": [
                            {
                                "colorHash": 1677044925u32,
                                "iconHash": 797343696u32,
                                "nameHash": 752612103u32,
                                "items": [
                                    {
                                        "itemInstanceId": "6917529861674225986",
                                        "plugItemHashes": [1498917124u32, 3003114975u32]
                                    }
                                ]
                            },
                            { "colorHash": 0, "iconHash": 0, "nameHash": 0, "items": [] }
                        ]
                    }
                }
            },
            "profileCommendations": {
                "data": {
                    "totalScore": 1240,
                    "scoreDetailValues": [620, 620],
                    "commendationNodePercentagesByHash": {
                        "154475713": 0.25,
                        "1341823550": 0.75
                    },
                    "commendationNodeScoresByHash": { "154475713": 310 },
                    "commendationScoresByHash": { "3228231556": 930 }
                }
            }
        });

        let component = deserialize_component(&payload).unwrap();

        let plug_sets = component.profile_plug_sets.expect("plug sets should parse");
        let entries = &plug_sets[&1_402_935_016];
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].plug_item_hash, 3_523_296_417);
        assert!(entries[0].can_insert);

        let character_plug_sets =
            component.character_plug_sets.expect("character plug sets should parse");
        let per_character = &character_plug_sets[&2_305_843_009_504_575_107];
        assert!(!per_character[&287_042_893][0].can_insert);

        let loadouts = component.character_loadouts.expect("loadouts should parse");
        let slots = &loadouts[&2_305_843_009_504_575_107];
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name_hash, 752_612_103);
        assert_eq!(slots[0].items[0].item_instance_id, 6_917_529_861_674_225_986);
        assert_eq!(slots[0].items[0].plug_item_hashes.len(), 2);
        assert!(slots[1].items.is_empty());

        let commendations = component.commendations.expect("commendations should parse");
        assert_eq!(commendations.total_score, 1240);
        assert_eq!(commendations.score_detail_values, vec![620, 620]);
        assert_eq!(commendations.node_percentages_by_hash[&1_341_823_550], 0.75);
        assert_eq!(commendations.node_scores_by_hash[&154_475_713], 310);
        assert_eq!(commendations.scores_by_hash[&3_228_231_556], 930);
    }

    /// Validates `deserialize_component` behavior for a privacy-limited
    /// response.
    ///
    /// Assertions:
    /// - Confirms a subtree with no `data` key reads as `None` instead
    ///   of failing.
    #[test]
    fn test_privacy_stripped_subtree() {
        let payload = json!({
            "profileInventory": { "privacy": 2 }
        });

        let component = deserialize_component(&payload).unwrap();
        assert!(component.profile_inventories.is_none());
    }
}
