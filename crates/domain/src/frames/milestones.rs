//! Deserializers for public milestone payloads

use std::collections::HashMap;

use serde_json::Value;

use super::support::{
    array_or_empty, as_object, display_string, hash, hash_array, int_or, opt_timestamp,
};
use super::FrameError;
use crate::types::{Milestone, MilestoneActivity, MilestoneContent, MilestoneQuest};

/// Deserialize one public milestone.
pub fn deserialize_milestone(value: &Value) -> Result<Milestone, FrameError> {
    const CTX: &str = "milestone";
    let obj = as_object(value, CTX)?;

    let available_quests = array_or_empty(obj, "availableQuests")
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|quest| Some(MilestoneQuest { item_hash: quest.get("questItemHash")?.as_u64()? as u32 }))
        .collect();

    let activities = array_or_empty(obj, "activities")
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|activity| {
            Some(MilestoneActivity {
                hash: activity.get("activityHash")?.as_u64()? as u32,
                challenge_objective_hashes: hash_array(activity, "challengeObjectiveHashes"),
                modifier_hashes: hash_array(activity, "modifierHashes"),
            })
        })
        .collect();

    Ok(Milestone {
        hash: hash(obj, CTX, "milestoneHash")?,
        start_date: opt_timestamp(obj, "startDate"),
        end_date: opt_timestamp(obj, "endDate"),
        order: int_or(obj, "order", 0) as i32,
        available_quests,
        activities,
    })
}

/// Deserialize the weekly public milestones map, keyed by milestone
/// hash. Entries that do not parse are skipped.
pub fn deserialize_milestones(value: &Value) -> Result<HashMap<u32, Milestone>, FrameError> {
    const CTX: &str = "milestones";
    let obj = as_object(value, CTX)?;

    Ok(obj
        .iter()
        .filter_map(|(key, value)| {
            Some((key.parse().ok()?, deserialize_milestone(value).ok()?))
        })
        .collect())
}

/// Deserialize localized milestone editorial content.
pub fn deserialize_milestone_content(value: &Value) -> Result<MilestoneContent, FrameError> {
    const CTX: &str = "milestone content";
    let obj = as_object(value, CTX)?;

    Ok(MilestoneContent {
        about: display_string(obj, "about"),
        status: display_string(obj, "status"),
        tips: array_or_empty(obj, "tips")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for milestone deserializers.
    use serde_json::json;

    use super::*;

    /// Validates `deserialize_milestones` behavior for the hash-keyed
    /// weekly map.
    ///
    /// Assertions:
    /// - Confirms milestones key by their hash.
    /// - Confirms quests, activities, and the date window parse.
    #[test]
    fn test_weekly_milestones() {
        let payload = json!({
            "2029743966": {
                "milestoneHash": 2029743966u32,
                "order": 10,
                "startDate": "2024-05-28T17:00:00Z",
                "endDate": "2024-06-04T17:00:00Z",
                "availableQuests": [ { "questItemHash": 1322173101u32 } ],
                "activities": [{
                    "activityHash": 1191701339u32,
                    "challengeObjectiveHashes": [391915206u32],
                    "modifierHashes": [758645239u32, 1783825372u32]
                }]
            }
        });

        let milestones = deserialize_milestones(&payload).unwrap();
        let milestone = &milestones[&2_029_743_966];
        assert_eq!(milestone.order, 10);
        assert!(milestone.start_date.is_some());
        assert_eq!(milestone.available_quests[0].item_hash, 1_322_173_101);
        assert_eq!(milestone.activities[0].modifier_hashes.len(), 2);
    }

    /// Validates `deserialize_milestone` behavior for a dateless
    /// milestone.
    ///
    /// Assertions:
    /// - Confirms absent dates read as `None` rather than failing.
    #[test]
    fn test_dateless_milestone() {
        let payload = json!({ "milestoneHash": 4253138191u32 });
        let milestone = deserialize_milestone(&payload).unwrap();
        assert!(milestone.start_date.is_none());
        assert!(milestone.activities.is_empty());
    }

    /// Validates `deserialize_milestone_content` behavior for the
    /// editorial shape.
    ///
    /// Assertions:
    /// - Confirms about, status, and tips map through.
    #[test]
    fn test_milestone_content() {
        let payload = json!({
            "about": "The weekly raid challenge.",
            "status": "#",
            "tips": ["Bring a well.", "Swap for boss damage."]
        });

        let content = deserialize_milestone_content(&payload).unwrap();
        assert_eq!(content.about, "The weekly raid challenge.");
        assert_eq!(content.status, "");
        assert_eq!(content.tips.len(), 2);
    }
}
