//! Deserializers for character payloads

use std::collections::HashMap;

use serde_json::Value;

use super::entity::objective_from_object;
use super::progressions::{deserialize_faction, progression_from_object};
use super::support::{
    array_or_empty, as_object, float_or, id, image_or_missing, int_or, opt_hash,
    opt_object_field, timestamp,
};
use super::FrameError;
use crate::types::{Character, CharacterProgressions, Dye, Objective, Rgba, RenderedData};

/// Deserialize one character from the `Characters` component entry.
pub fn deserialize_character(value: &Value) -> Result<Character, FrameError> {
    const CTX: &str = "character";
    let obj = as_object(value, CTX)?;

    let color = opt_object_field(obj, "emblemColor").map_or_else(Rgba::default, |c| Rgba {
        red: int_or(c, "red", 0) as u8,
        green: int_or(c, "green", 0) as u8,
        blue: int_or(c, "blue", 0) as u8,
        alpha: int_or(c, "alpha", 255) as u8,
    });

    let stats = opt_object_field(obj, "stats")
        .map(|stats| {
            stats
                .iter()
                .filter_map(|(key, value)| {
                    let hash: u32 = key.parse().ok()?;
                    Some((hash.into(), value.as_i64()? as i32))
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Character {
        id: id(obj, CTX, "characterId")?,
        member_id: id(obj, CTX, "membershipId")?,
        member_type: int_or(obj, "membershipType", 0).into(),
        light: int_or(obj, "light", 0) as i32,
        level: int_or(obj, "baseCharacterLevel", 0) as i32,
        class: int_or(obj, "classType", 0).into(),
        gender: int_or(obj, "genderType", 0).into(),
        race: int_or(obj, "raceType", 0).into(),
        emblem: image_or_missing(obj, "emblemBackgroundPath"),
        emblem_icon: image_or_missing(obj, "emblemPath"),
        emblem_hash: int_or(obj, "emblemHash", 0) as u32,
        emblem_color: color,
        last_played: timestamp(obj, CTX, "dateLastPlayed")?,
        total_played_time: int_or(obj, "minutesPlayedTotal", 0),
        minutes_played_this_session: int_or(obj, "minutesPlayedThisSession", 0),
        percent_to_next_level: float_or(obj, "percentToNextLevel", 0.0),
        title_hash: opt_hash(obj, "titleRecordHash"),
        stats,
    })
}

/// Deserialize the render data of one character.
pub fn deserialize_render_data(value: &Value) -> Result<RenderedData, FrameError> {
    const CTX: &str = "render data";
    let obj = as_object(value, CTX)?;

    let custom_dyes = array_or_empty(obj, "customDyes")
        .iter()
        .filter_map(Value::as_object)
        .map(|dye| Dye {
            channel_hash: int_or(dye, "channelHash", 0) as u32,
            dye_hash: int_or(dye, "dyeHash", 0) as u32,
        })
        .collect();

    Ok(RenderedData { custom_dyes })
}

fn hash_keyed<T>(
    obj: &serde_json::Map<String, Value>,
    name: &str,
    mut parse: impl FnMut(&Value) -> Option<T>,
) -> HashMap<u32, T> {
    obj.get(name)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(key, value)| Some((key.parse().ok()?, parse(value)?)))
                .collect()
        })
        .unwrap_or_default()
}

/// Deserialize one character's progressions, factions, and uninstanced
/// item objectives.
pub fn deserialize_character_progressions(
    value: &Value,
) -> Result<CharacterProgressions, FrameError> {
    const CTX: &str = "character progressions";
    let obj = as_object(value, CTX)?;

    let progressions = hash_keyed(obj, "progressions", |value| {
        value.as_object().map(progression_from_object)
    });
    let factions = hash_keyed(obj, "factions", |value| deserialize_faction(value).ok());
    let uninstanced_item_objectives = hash_keyed(obj, "uninstancedItemObjectives", |value| {
        let objectives: Vec<Objective> = value
            .as_array()?
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|entry| objective_from_object(entry, CTX).ok())
            .collect();
        Some(objectives)
    });

    Ok(CharacterProgressions { progressions, factions, uninstanced_item_objectives })
}

#[cfg(test)]
mod tests {
    //! Unit tests for character deserializers.
    use serde_json::json;

    use super::*;
    use crate::enums::{Class, Stat};

    fn character_payload() -> Value {
        json!({
            "characterId": "2305843009504575107",
            "membershipId": "4611686018467284386",
            "membershipType": 3,
            "dateLastPlayed": "2024-06-01T18:30:00Z",
            "minutesPlayedTotal": "151442",
            "minutesPlayedThisSession": "114",
            "light": 1987,
            "baseCharacterLevel": 50,
            "classType": 1,
            "raceType": 2,
            "genderType": 0,
            "emblemPath": "/common/destiny2_content/icons/emblem.jpg",
            "emblemBackgroundPath": "/common/destiny2_content/icons/emblem_bg.jpg",
            "emblemHash": 1907674138u32,
            "emblemColor": { "red": 12, "green": 64, "blue": 128, "alpha": 255 },
            "percentToNextLevel": 42.5,
            "titleRecordHash": 3464275895u32,
            "stats": {
                "2996146975": 100,
                "392767087": 60
            }
        })
    }

    /// Validates `deserialize_character` behavior for a complete payload.
    ///
    /// Assertions:
    /// - Confirms string-encoded identifiers and playtime parse.
    /// - Confirms class, light, and title map through.
    /// - Confirms stats are keyed by stat hash.
    #[test]
    fn test_character_full() {
        let character = deserialize_character(&character_payload()).unwrap();

        assert_eq!(character.id, 2_305_843_009_504_575_107);
        assert_eq!(character.member_id, 4_611_686_018_467_284_386);
        assert_eq!(character.class, Class::HUNTER);
        assert_eq!(character.light, 1987);
        assert_eq!(character.total_played_time, 151_442);
        assert_eq!(character.title_hash, Some(3_464_275_895));
        assert_eq!(character.stats.get(&Stat::MOBILITY), Some(&100));
        assert_eq!(character.emblem_color.blue, 128);
    }

    /// Validates `deserialize_character` behavior when a required field
    /// is absent.
    ///
    /// Assertions:
    /// - Confirms a missing `characterId` surfaces as a frame error.
    #[test]
    fn test_character_missing_id() {
        let payload = json!({ "membershipId": "1", "dateLastPlayed": "2024-06-01T18:30:00Z" });
        assert!(deserialize_character(&payload).is_err());
    }

    /// Validates `deserialize_character_progressions` behavior for the
    /// hash-keyed maps.
    ///
    /// Assertions:
    /// - Confirms progressions and factions key by hash.
    /// - Confirms uninstanced item objectives collect per item hash.
    #[test]
    fn test_character_progressions() {
        let payload = json!({
            "progressions": {
                "540048094": { "progressionHash": 540048094u32, "level": 7 }
            },
            "factions": {
                "611314723": { "factionHash": 611314723u32, "level": 3 }
            },
            "uninstancedItemObjectives": {
                "1303705556": [
                    { "objectiveHash": 944910941u32, "progress": 3, "completionValue": 10 }
                ]
            }
        });
        let progressions = deserialize_character_progressions(&payload).unwrap();
        assert_eq!(progressions.progressions.len(), 1);
        assert_eq!(progressions.progressions[&540_048_094].level, 7);
        assert_eq!(progressions.factions[&611_314_723].progression.level, 3);
        assert_eq!(progressions.uninstanced_item_objectives[&1_303_705_556].len(), 1);
    }

    /// Validates `deserialize_render_data` behavior for custom dyes.
    ///
    /// Assertions:
    /// - Confirms dye channel and hash pairs map through.
    #[test]
    fn test_render_data() {
        let payload = json!({
            "customDyes": [
                { "channelHash": 218592586u32, "dyeHash": 3500775965u32 }
            ]
        });
        let render = deserialize_render_data(&payload).unwrap();
        assert_eq!(render.custom_dyes.len(), 1);
        assert_eq!(render.custom_dyes[0].channel_hash, 218_592_586);
    }
}
