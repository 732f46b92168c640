//! Deserializers for inventory item payloads

use std::collections::HashMap;

use serde_json::Value;

use super::entity::objective_from_object;
use super::support::{
    array_or_empty, as_object, boolean, hash, image_or_missing, int_array, int_or, opt_hash,
    opt_id, opt_int, opt_object_field, Object,
};
use super::FrameError;
use crate::types::{ItemInstance, ItemPerk, ItemSocket, ItemsComponent, ProfileItem, StatValue};

pub(crate) fn item_from_object(obj: &Object, context: &'static str) -> Result<ProfileItem, FrameError> {
    Ok(ProfileItem {
        hash: hash(obj, context, "itemHash")?,
        quantity: int_or(obj, "quantity", 1) as i32,
        bind_status: int_or(obj, "bindStatus", 0) as i32,
        location: int_or(obj, "location", 0).into(),
        bucket: int_or(obj, "bucketHash", 0) as u32,
        transfer_status: int_or(obj, "transferStatus", 0).into(),
        lockable: boolean(obj, "lockable"),
        state: int_or(obj, "state", 0).into(),
        instance_id: opt_id(obj, "itemInstanceId"),
        version_number: opt_int(obj, "versionNumber").map(|n| n as i32),
        override_style_item_hash: opt_hash(obj, "overrideStyleItemHash"),
    })
}

/// Deserialize a single inventory item.
pub fn deserialize_item(value: &Value) -> Result<ProfileItem, FrameError> {
    const CTX: &str = "item";
    item_from_object(as_object(value, CTX)?, CTX)
}

/// Deserialize an inventory component's `items` array. Entries that do
/// not parse are skipped.
pub fn deserialize_items(value: &Value) -> Result<Vec<ProfileItem>, FrameError> {
    const CTX: &str = "inventory";
    let obj = as_object(value, CTX)?;

    Ok(array_or_empty(obj, "items")
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|entry| item_from_object(entry, CTX).ok())
        .collect())
}

fn instance_from_object(obj: &Object) -> ItemInstance {
    let primary_stat = opt_object_field(obj, "primaryStat").map(|stat| StatValue {
        stat_hash: int_or(stat, "statHash", 0) as u32,
        value: int_or(stat, "value", 0) as i32,
    });

    ItemInstance {
        damage_type: int_or(obj, "damageType", 0).into(),
        primary_stat,
        item_level: int_or(obj, "itemLevel", 0) as i32,
        quality: int_or(obj, "quality", 0) as i32,
        is_equipped: boolean(obj, "isEquipped"),
        can_equip: boolean(obj, "canEquip"),
        equip_required_level: int_or(obj, "equipRequiredLevel", 0) as i32,
        cannot_equip_reason: int_or(obj, "cannotEquipReason", 0) as i32,
    }
}

/// Deserialize instance-scoped item data.
pub fn deserialize_item_instance(value: &Value) -> Result<ItemInstance, FrameError> {
    Ok(instance_from_object(as_object(value, "item instance")?))
}

fn perks_from_object(obj: &Object) -> Vec<ItemPerk> {
    array_or_empty(obj, "perks")
        .iter()
        .filter_map(Value::as_object)
        .map(|perk| ItemPerk {
            hash: int_or(perk, "perkHash", 0) as u32,
            icon: image_or_missing(perk, "iconPath"),
            is_active: boolean(perk, "isActive"),
            visible: boolean(perk, "visible"),
        })
        .collect()
}

fn sockets_from_object(obj: &Object) -> Vec<ItemSocket> {
    array_or_empty(obj, "sockets")
        .iter()
        .filter_map(Value::as_object)
        .map(|socket| ItemSocket {
            plug_hash: opt_hash(socket, "plugHash"),
            is_enabled: boolean(socket, "isEnabled"),
            is_visible: boolean(socket, "isVisible"),
            enable_fail_indexes: socket
                .get("enableFailIndexes")
                .and_then(Value::as_array)
                .map(|_| int_array(socket, "enableFailIndexes").into_iter().map(|n| n as i32).collect()),
        })
        .collect()
}

fn instance_keyed<T>(
    components: &Object,
    name: &str,
    mut parse: impl FnMut(&Object) -> Option<T>,
) -> HashMap<i64, T> {
    opt_object_field(components, name)
        .and_then(|component| opt_object_field(component, "data"))
        .map(|data| {
            data.iter()
                .filter_map(|(key, value)| {
                    let instance_id: i64 = key.parse().ok()?;
                    Some((instance_id, parse(value.as_object()?)?))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Deserialize the instance-keyed `itemComponents` block of a composite
/// profile response.
pub fn deserialize_items_component(value: &Value) -> Result<ItemsComponent, FrameError> {
    const CTX: &str = "item components";
    let components = as_object(value, CTX)?;

    let instances = instance_keyed(components, "instances", |obj| Some(instance_from_object(obj)));
    let perks = instance_keyed(components, "perks", |obj| Some(perks_from_object(obj)));
    let sockets = instance_keyed(components, "sockets", |obj| Some(sockets_from_object(obj)));
    let objectives = instance_keyed(components, "objectives", |obj| {
        Some(
            array_or_empty(obj, "objectives")
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|entry| objective_from_object(entry, CTX).ok())
                .collect(),
        )
    });

    Ok(ItemsComponent { instances, perks, sockets, objectives })
}

#[cfg(test)]
mod tests {
    //! Unit tests for item deserializers.
    use serde_json::json;

    use super::*;
    use crate::enums::{DamageType, ItemLocation, ItemState, TransferStatus};

    /// Validates `deserialize_item` behavior for an instanced weapon.
    ///
    /// Assertions:
    /// - Confirms the string-encoded instance id parses.
    /// - Confirms location, transfer status, and state map to enums.
    #[test]
    fn test_instanced_item() {
        let payload = json!({
            "itemHash": 1363886209u32,
            "quantity": 1,
            "bindStatus": 0,
            "location": 1,
            "bucketHash": 1498876634u32,
            "transferStatus": 0,
            "lockable": true,
            "state": 5,
            "itemInstanceId": "6917529339402885276",
            "versionNumber": 2
        });

        let item = deserialize_item(&payload).unwrap();
        assert_eq!(item.hash, 1_363_886_209);
        assert_eq!(item.location, ItemLocation::INVENTORY);
        assert_eq!(item.transfer_status, TransferStatus::CAN_TRANSFER);
        assert_eq!(item.state, ItemState::from(5));
        assert_eq!(item.instance_id, Some(6_917_529_339_402_885_276));
        assert!(item.is_instanced());
    }

    /// Validates `deserialize_item` behavior for an uninstanced stack.
    ///
    /// Assertions:
    /// - Confirms absent instance fields read as `None`.
    #[test]
    fn test_uninstanced_stack() {
        let payload = json!({ "itemHash": 3159615086u32, "quantity": 25000, "location": 1 });
        let item = deserialize_item(&payload).unwrap();
        assert_eq!(item.quantity, 25_000);
        assert!(item.instance_id.is_none());
        assert!(!item.is_instanced());
    }

    /// Validates `deserialize_items_component` behavior for the
    /// instance-keyed maps.
    ///
    /// Assertions:
    /// - Confirms each sub-component unwraps its `data` envelope.
    /// - Confirms keys parse as instance ids.
    #[test]
    fn test_items_component() {
        let payload = json!({
            "instances": {
                "data": {
                    "6917529339402885276": {
                        "damageType": 3,
                        "primaryStat": { "statHash": 1480404414u32, "value": 1991 },
                        "isEquipped": true,
                        "canEquip": true
                    }
                }
            },
            "sockets": {
                "data": {
                    "6917529339402885276": {
                        "sockets": [
                            { "plugHash": 1498917124u32, "isEnabled": true, "isVisible": true },
                            { "isEnabled": false, "isVisible": false }
                        ]
                    }
                }
            }
        });

        let components = deserialize_items_component(&payload).unwrap();
        let instance = &components.instances[&6_917_529_339_402_885_276];
        assert_eq!(instance.damage_type, DamageType::SOLAR);
        assert_eq!(instance.primary_stat.unwrap().value, 1991);
        assert!(instance.is_equipped);

        let sockets = &components.sockets[&6_917_529_339_402_885_276];
        assert_eq!(sockets.len(), 2);
        assert_eq!(sockets[0].plug_hash, Some(1_498_917_124));
        assert!(sockets[1].plug_hash.is_none());
        assert!(components.perks.is_empty());
    }
}
