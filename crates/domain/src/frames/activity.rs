//! Deserializers for activity history and post-game reports

use serde_json::Value;

use super::support::{
    array_or_empty, as_object, boolean, display_string, hash, id, int_array, int_or, object_field,
    opt_int, stat_value, timestamp, Object,
};
use super::user::membership_from_object;
use super::FrameError;
use crate::types::{
    ActivityValues, Activity, AggregatedActivity, AggregatedActivityValues, PostActivity,
    PostActivityPlayer, PostActivityTeam,
};

fn values_from_object(values: &Object) -> ActivityValues {
    let team = values.contains_key("team").then(|| stat_value(values, "team") as i32);

    ActivityValues {
        kills: stat_value(values, "kills") as i32,
        deaths: stat_value(values, "deaths") as i32,
        assists: stat_value(values, "assists") as i32,
        kd_ratio: stat_value(values, "killsDeathsRatio"),
        kda_ratio: stat_value(values, "killsDeathsAssists"),
        efficiency: stat_value(values, "efficiency"),
        duration_seconds: stat_value(values, "activityDurationSeconds") as i32,
        opponents_defeated: stat_value(values, "opponentsDefeated") as i32,
        score: stat_value(values, "score") as i32,
        team,
        completed: stat_value(values, "completed") != 0.0,
        player_count: stat_value(values, "playerCount") as i32,
    }
}

fn details<'a>(obj: &'a Object, context: &'static str) -> Result<(&'a Object, i64), FrameError> {
    let details = object_field(obj, context, "activityDetails")?;
    let instance_id = id(details, context, "instanceId")?;
    Ok((details, instance_id))
}

/// Deserialize one activity history entry.
pub fn deserialize_activity(value: &Value) -> Result<Activity, FrameError> {
    const CTX: &str = "activity";
    let obj = as_object(value, CTX)?;
    let (detail, instance_id) = details(obj, CTX)?;

    Ok(Activity {
        period: timestamp(obj, CTX, "period")?,
        instance_id,
        hash: hash(detail, CTX, "referenceId")?,
        mode: int_or(detail, "mode", 0).into(),
        modes: int_array(detail, "modes").into_iter().map(Into::into).collect(),
        membership_type: int_or(detail, "membershipType", 0).into(),
        is_private: boolean(detail, "isPrivate"),
        values: object_field(obj, CTX, "values").map(values_from_object).unwrap_or_default(),
    })
}

/// Deserialize a page of activity history. Entries that do not parse
/// are skipped.
pub fn deserialize_activities(value: &Value) -> Result<Vec<Activity>, FrameError> {
    const CTX: &str = "activity history";
    let obj = as_object(value, CTX)?;

    Ok(array_or_empty(obj, "activities")
        .iter()
        .filter_map(|entry| deserialize_activity(entry).ok())
        .collect())
}

fn player_from_object(obj: &Object, context: &'static str) -> Result<PostActivityPlayer, FrameError> {
    let player = object_field(obj, context, "player")?;
    let user = membership_from_object(object_field(player, context, "destinyUserInfo")?, context)?;

    Ok(PostActivityPlayer {
        standing: int_or(obj, "standing", 0) as i32,
        score: stat_value(obj, "score") as i32,
        character_id: id(obj, context, "characterId")?,
        destiny_user: user,
        class: display_string(player, "characterClass"),
        class_hash: int_or(player, "classHash", 0) as u32,
        race_hash: int_or(player, "raceHash", 0) as u32,
        gender_hash: int_or(player, "genderHash", 0) as u32,
        light_level: int_or(player, "lightLevel", 0) as i32,
        emblem_hash: int_or(player, "emblemHash", 0) as u32,
        values: object_field(obj, context, "values").map(values_from_object).unwrap_or_default(),
    })
}

/// Deserialize a post-game carnage report.
pub fn deserialize_post_activity(value: &Value) -> Result<PostActivity, FrameError> {
    const CTX: &str = "post activity";
    let obj = as_object(value, CTX)?;
    let (detail, instance_id) = details(obj, CTX)?;

    let players = array_or_empty(obj, "entries")
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| player_from_object(entry, CTX).ok())
        .collect();

    let teams = array_or_empty(obj, "teams")
        .iter()
        .filter_map(Value::as_object)
        .map(|team| PostActivityTeam {
            id: int_or(team, "teamId", 0) as i32,
            name: display_string(team, "teamName"),
            standing: stat_value(team, "standing") as i32,
            score: stat_value(team, "score") as i32,
        })
        .collect();

    Ok(PostActivity {
        period: timestamp(obj, CTX, "period")?,
        instance_id,
        hash: hash(detail, CTX, "referenceId")?,
        mode: int_or(detail, "mode", 0).into(),
        modes: int_array(detail, "modes").into_iter().map(Into::into).collect(),
        membership_type: int_or(detail, "membershipType", 0).into(),
        starting_phase_index: opt_int(obj, "startingPhaseIndex").map(|n| n as i32),
        is_from_beginning: boolean(obj, "activityWasStartedFromBeginning"),
        players,
        teams,
    })
}

/// Deserialize lifetime per-activity aggregates.
pub fn deserialize_aggregated_activities(
    value: &Value,
) -> Result<Vec<AggregatedActivity>, FrameError> {
    const CTX: &str = "aggregated activities";
    let obj = as_object(value, CTX)?;

    Ok(array_or_empty(obj, "activities")
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let hash = entry.get("activityHash")?.as_u64()? as u32;
            let values = entry.get("values")?.as_object()?;
            Some(AggregatedActivity {
                hash,
                values: AggregatedActivityValues {
                    completions: stat_value(values, "activityCompletions") as i32,
                    kills: stat_value(values, "activityKills") as i32,
                    deaths: stat_value(values, "activityDeaths") as i32,
                    assists: stat_value(values, "activityAssists") as i32,
                    wins: stat_value(values, "activityWins") as i32,
                    seconds_played: stat_value(values, "activitySecondsPlayed") as i64,
                    fastest_completion_seconds: values
                        .get("fastestCompletionMsForActivity")
                        .map(|_| (stat_value(values, "fastestCompletionMsForActivity") / 1000.0) as i64),
                },
            })
        })
        .collect())
}
