//! Deserializers for triumph records and collectibles

use std::collections::HashMap;

use serde_json::Value;

use super::entity::objective_from_object;
use super::support::{array_or_empty, as_object, int_or, opt_object_field, Object};
use super::FrameError;
use crate::enums::RecordState;
use crate::types::{Collectible, NodeStatus, Record, RecordScores, RecordsComponent};

fn objectives_of(obj: &Object, name: &str) -> Option<Vec<crate::types::Objective>> {
    let raw = array_or_empty(obj, name);
    if raw.is_empty() {
        return None;
    }
    let parsed: Vec<_> = raw
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| objective_from_object(entry, "record objective").ok())
        .collect();
    Some(parsed)
}

pub(crate) fn record_from_object(obj: &Object) -> Record {
    Record {
        state: RecordState::from(int_or(obj, "state", 0)),
        objectives: objectives_of(obj, "objectives"),
        interval_objectives: objectives_of(obj, "intervalObjectives"),
        intervals_redeemed_count: int_or(obj, "intervalsRedeemedCount", 0) as i32,
    }
}

/// Deserialize one triumph record.
pub fn deserialize_record(value: &Value) -> Result<Record, FrameError> {
    Ok(record_from_object(as_object(value, "record")?))
}

pub(crate) fn records_map(obj: &Object) -> HashMap<u32, Record> {
    opt_object_field(obj, "records")
        .map(|records| {
            records
                .iter()
                .filter_map(|(key, value)| {
                    let hash: u32 = key.parse().ok()?;
                    Some((hash, record_from_object(value.as_object()?)))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Deserialize the profile-scoped records subtree.
pub fn deserialize_records_component(value: &Value) -> Result<RecordsComponent, FrameError> {
    const CTX: &str = "profile records";
    let obj = as_object(value, CTX)?;

    Ok(RecordsComponent {
        score: RecordScores {
            current_score: int_or(obj, "score", 0) as i32,
            lifetime_score: int_or(obj, "lifetimeScore", 0) as i32,
            active_score: int_or(obj, "activeScore", 0) as i32,
        },
        records: records_map(obj),
    })
}

/// Deserialize a map of collectibles keyed by collectible hash.
pub fn deserialize_collectibles(value: &Value) -> Result<HashMap<u32, Collectible>, FrameError> {
    const CTX: &str = "collectibles";
    let obj = as_object(value, CTX)?;
    let collectibles = opt_object_field(obj, "collectibles").unwrap_or(obj);

    Ok(collectibles
        .iter()
        .filter_map(|(key, value)| {
            let hash: u32 = key.parse().ok()?;
            let state = value.as_object().map(|entry| int_or(entry, "state", 0) as i32)?;
            Some((hash, Collectible { state }))
        })
        .collect())
}

/// Deserialize a map of presentation node statuses keyed by node hash.
pub fn deserialize_nodes(value: &Value) -> Result<HashMap<u32, NodeStatus>, FrameError> {
    const CTX: &str = "presentation nodes";
    let obj = as_object(value, CTX)?;
    let nodes = opt_object_field(obj, "nodes").unwrap_or(obj);

    Ok(nodes
        .iter()
        .filter_map(|(key, value)| {
            let hash: u32 = key.parse().ok()?;
            let entry = value.as_object()?;
            Some((
                hash,
                NodeStatus {
                    state: int_or(entry, "state", 0) as i32,
                    progress_value: int_or(entry, "progressValue", 0) as i32,
                    completion_value: int_or(entry, "completionValue", 0) as i32,
                },
            ))
        })
        .collect())
}
