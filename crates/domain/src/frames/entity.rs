//! Deserializers for catalogue entities and runtime objectives

use serde_json::Value;

use super::support::{
    as_object, boolean, display_string, hash, image_or_missing, int_array, int_or, opt_hash,
    opt_object_field, opt_string, Object,
};
use super::FrameError;
use crate::enums::{AmmoType, DamageType, ItemType, TierType};
use crate::types::{Image, InventoryEntity, Objective, ObjectiveEntity};

/// Deserialize a full inventory item catalogue entry
/// (`DestinyInventoryItemDefinition`).
///
/// Redacted entries keep their hash but carry the Undefined sentinel for
/// display strings and the missing-icon path.
pub fn deserialize_inventory_entity(value: &Value) -> Result<InventoryEntity, FrameError> {
    const CTX: &str = "inventory entity";
    let obj = as_object(value, CTX)?;

    let display = opt_object_field(obj, "displayProperties");
    let (name, description, icon, has_icon) = match display {
        Some(props) => (
            display_string(props, "name"),
            opt_string(props, "description"),
            image_or_missing(props, "icon"),
            boolean(props, "hasIcon"),
        ),
        None => (crate::UNDEFINED.to_owned(), None, Image::missing_icon(), false),
    };

    let inventory = opt_object_field(obj, "inventory");
    let (tier, tier_name, bucket_hash, max_stack_size) = match inventory {
        Some(block) => (
            TierType::from(int_or(block, "tierType", 0)),
            display_string(block, "tierTypeName"),
            opt_hash(block, "bucketTypeHash").unwrap_or(0),
            int_or(block, "maxStackSize", 1) as i32,
        ),
        None => (TierType::UNKNOWN, crate::UNDEFINED.to_owned(), 0, 1),
    };

    let ammo_type = opt_object_field(obj, "equippingBlock")
        .map_or(AmmoType::NONE, |block| AmmoType::from(int_or(block, "ammoType", 0)));

    Ok(InventoryEntity {
        hash: hash(obj, CTX, "hash")?,
        index: int_or(obj, "index", 0) as i32,
        name,
        description,
        flavor_text: opt_string(obj, "flavorText"),
        icon,
        has_icon,
        water_mark: opt_string(obj, "iconWatermark"),
        screenshot: opt_string(obj, "screenshot"),
        item_type: ItemType::from(int_or(obj, "itemType", 0)),
        type_name: display_string(obj, "itemTypeDisplayName"),
        tier,
        tier_name,
        bucket_hash,
        is_equippable: boolean(obj, "equippable"),
        max_stack_size,
        ammo_type,
        damage_types: int_array(obj, "damageTypes").into_iter().map(DamageType::from).collect(),
        lore_hash: opt_hash(obj, "loreHash"),
    })
}

/// Deserialize an objective catalogue entry
/// (`DestinyObjectiveDefinition`).
pub fn deserialize_objective_entity(value: &Value) -> Result<ObjectiveEntity, FrameError> {
    const CTX: &str = "objective entity";
    let obj = as_object(value, CTX)?;

    let description = opt_object_field(obj, "displayProperties")
        .map_or_else(|| crate::UNDEFINED.to_owned(), |props| display_string(props, "description"));

    Ok(ObjectiveEntity {
        hash: hash(obj, CTX, "hash")?,
        index: int_or(obj, "index", 0) as i32,
        description,
        progress_description: display_string(obj, "progressDescription"),
        completion_value: int_or(obj, "completionValue", 0) as i32,
        allow_negative_value: boolean(obj, "allowNegativeValue"),
        allow_overcompletion: boolean(obj, "allowOvercompletion"),
        show_value_on_complete: boolean(obj, "showValueOnComplete"),
        value_style: int_or(obj, "valueStyle", 0) as i32,
        location_hash: opt_hash(obj, "locationHash").unwrap_or(0),
        minimum_visibility_threshold: int_or(obj, "minimumVisibilityThreshold", 0) as i32,
    })
}

pub(crate) fn objective_from_object(
    obj: &Object,
    context: &'static str,
) -> Result<Objective, FrameError> {
    Ok(Objective {
        hash: hash(obj, context, "objectiveHash")?,
        progress: int_or(obj, "progress", 0) as i32,
        completion_value: int_or(obj, "completionValue", 0) as i32,
        complete: boolean(obj, "complete"),
        visible: boolean(obj, "visible"),
        destination_hash: opt_hash(obj, "destinationHash"),
        activity_hash: opt_hash(obj, "activityHash"),
    })
}

/// Deserialize runtime progress against one objective.
pub fn deserialize_objective(value: &Value) -> Result<Objective, FrameError> {
    const CTX: &str = "objective";
    objective_from_object(as_object(value, CTX)?, CTX)
}
